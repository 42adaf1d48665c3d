use std::fmt;
use crate::error::{BitVecError, Result};

/// A single four-valued bit.
///
/// The discriminant is the two-bit `(b,a)` encoding used by `Word`:
/// `a` is the low bit and `b` marks the bit as unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bit {
  Zero = 0,
  One  = 1,
  X    = 2,
  Z    = 3,
}

impl Bit {

  /// Build a bit from its two mask bits.
  pub fn from_ab(a: bool, b: bool) -> Bit {
    match (a, b) {
      (false, false) => Bit::Zero,
      (true,  false) => Bit::One,
      (false, true)  => Bit::X,
      (true,  true)  => Bit::Z,
    }
  }

  /// The `a` (value) mask bit.
  pub fn a(self) -> bool { (self as u8) & 1 != 0 }

  /// The `b` (unknown) mask bit.
  pub fn b(self) -> bool { (self as u8) & 2 != 0 }

  /// Is this `x` or `z`.
  pub fn is_unknown(self) -> bool { self.b() }

  pub fn from_char(c: char) -> Result<Bit> {
    match c {
      '0' => Ok(Bit::Zero),
      '1' => Ok(Bit::One),
      'x' => Ok(Bit::X),
      'z' => Ok(Bit::Z),
      _   => Err(BitVecError::InvalidInput(format!("{:?}", c)))
    }
  }

  pub fn to_char(self) -> char {
    match self {
      Bit::Zero => '0',
      Bit::One  => '1',
      Bit::X    => 'x',
      Bit::Z    => 'z',
    }
  }
}

impl TryFrom<char> for Bit {
  type Error = BitVecError;
  fn try_from(c: char) -> Result<Bit> { Bit::from_char(c) }
}

/// Decode the two-bit encoding `0..=3`.
impl TryFrom<u8> for Bit {
  type Error = BitVecError;
  fn try_from(code: u8) -> Result<Bit> {
    match code {
      0 => Ok(Bit::Zero),
      1 => Ok(Bit::One),
      2 => Ok(Bit::X),
      3 => Ok(Bit::Z),
      _ => Err(BitVecError::InvalidInput(code.to_string()))
    }
  }
}

impl From<bool> for Bit {
  fn from(b: bool) -> Bit { if b { Bit::One } else { Bit::Zero } }
}

impl fmt::Display for Bit {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.to_char())
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn encoding() {
    for c in ['0', '1', 'x', 'z'] {
      let b = Bit::from_char(c).unwrap();
      assert_eq!(b.to_char(), c);
      assert_eq!(Bit::from_ab(b.a(), b.b()), b);
      assert_eq!(Bit::try_from(b as u8).unwrap(), b);
    }
    assert!(Bit::X.is_unknown() && Bit::Z.is_unknown());
    assert!(!Bit::Zero.is_unknown() && !Bit::One.is_unknown());
  }

  #[test]
  fn bad_input() {
    assert!(matches!(Bit::from_char('X'), Err(BitVecError::InvalidInput(_))));
    assert!(matches!(Bit::try_from(4_u8), Err(BitVecError::InvalidInput(_))));
  }
}
