use crate::bit::Bit;

pub type WordT = u32;

/// 32 four-valued bits stored as two parallel masks.
/// Bit `i` is encoded by bit `i` of `a` and bit `i` of `b`:
/// `(0,0)` is `0`, `(1,0)` is `1`, `(0,1)` is `x`, `(1,1)` is `z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Word {
  pub a: WordT,
  pub b: WordT,
}

impl Word {

  /// The number of bits in a word.
  pub const BITS: usize = WordT::BITS as usize;

  pub const ZERO: Word    = Word { a: 0, b: 0 };
  pub const UNKNOWN: Word = Word { a: 0, b: !0 };

  pub fn new(a: WordT, b: WordT) -> Word { Word { a, b } }

  /// A word with only known bits.
  pub fn known(a: WordT) -> Word { Word { a, b: 0 } }

  /// All 32 positions set to the given bit.
  pub fn splat(bit: Bit) -> Word {
    Word {
      a: if bit.a() { !0 } else { 0 },
      b: if bit.b() { !0 } else { 0 }
    }
  }

  /// Mask selecting the `n` least significant bits.
  pub fn low_mask(n: usize) -> WordT {
    if n >= Self::BITS { !0 } else { (1 << n) - 1 }
  }

  /// Keep only the `n` least significant bits.
  pub fn keep_low(self, n: usize) -> Word {
    let m = Self::low_mask(n);
    Word { a: self.a & m, b: self.b & m }
  }

  pub fn get(self, i: usize) -> Bit {
    Bit::from_ab(self.a >> i & 1 != 0, self.b >> i & 1 != 0)
  }

  pub fn set(&mut self, i: usize, bit: Bit) {
    let m = 1 << i;
    if bit.a() { self.a |= m } else { self.a &= !m }
    if bit.b() { self.b |= m } else { self.b &= !m }
  }

  /// Positions holding a known `0`.
  pub fn zeros(self) -> WordT { !self.a & !self.b }

  /// Positions holding a known `1`.
  pub fn ones(self) -> WordT { self.a & !self.b }

  pub fn is_known(self) -> bool { self.b == 0 }

  /// Collapse `x` to `0` and `z` to `1`.
  pub fn two_state(self) -> Word { Word { a: self.a, b: 0 } }

  // Results of the logic operations never contain `z`: every position that
  // is neither a known 0 nor a known 1 is `x`.
  fn from_known(ones: WordT, zeros: WordT) -> Word {
    Word { a: ones, b: !(ones | zeros) }
  }

  pub fn and(self, other: Word) -> Word {
    Self::from_known(self.ones() & other.ones(), self.zeros() | other.zeros())
  }

  pub fn or(self, other: Word) -> Word {
    Self::from_known(self.ones() | other.ones(), self.zeros() & other.zeros())
  }

  pub fn xor(self, other: Word) -> Word {
    let unknown = self.b | other.b;
    Word { a: (self.a ^ other.a) & !unknown, b: unknown }
  }

  pub fn not(self) -> Word {
    Word { a: self.zeros(), b: self.b }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  const ALL: [Bit; 4] = [Bit::Zero, Bit::One, Bit::X, Bit::Z];

  fn pair(x: Bit, y: Bit, f: fn(Word, Word) -> Word) -> Bit {
    f(Word::splat(x), Word::splat(y)).get(0)
  }

  #[test]
  fn truth_tables() {
    use Bit::*;
    for &x in ALL.iter() {
      for &y in ALL.iter() {
        let and = match (x, y) {
          (Zero, _) | (_, Zero) => Zero,
          (One, One) => One,
          _ => X
        };
        let or = match (x, y) {
          (One, _) | (_, One) => One,
          (Zero, Zero) => Zero,
          _ => X
        };
        let xor = if x.is_unknown() || y.is_unknown() { X }
                  else { Bit::from(x != y) };
        assert_eq!(pair(x, y, Word::and), and, "{} & {}", x, y);
        assert_eq!(pair(x, y, Word::or),  or,  "{} | {}", x, y);
        assert_eq!(pair(x, y, Word::xor), xor, "{} ^ {}", x, y);
      }
    }
    assert_eq!(Word::splat(Zero).not().get(5), One);
    assert_eq!(Word::splat(One).not().get(5), Zero);
    assert_eq!(Word::splat(X).not().get(5), X);
    assert_eq!(Word::splat(Z).not().get(5), X);
  }

  #[test]
  fn get_set() {
    let mut w = Word::ZERO;
    w.set(3, Bit::Z);
    w.set(31, Bit::One);
    assert_eq!(w.get(3), Bit::Z);
    assert_eq!(w.get(31), Bit::One);
    assert_eq!(w.get(0), Bit::Zero);
    w.set(3, Bit::Zero);
    assert_eq!(w, Word::known(1 << 31));
  }

  #[test]
  fn masks() {
    assert_eq!(Word::low_mask(0), 0);
    assert_eq!(Word::low_mask(5), 0x1f);
    assert_eq!(Word::low_mask(32), !0);
    assert_eq!(Word::UNKNOWN.keep_low(4), Word::new(0, 0xf));
    assert_eq!(Word::new(0b0110, 0b1100).two_state(), Word::known(0b0110));
    assert_eq!(Word::UNKNOWN.two_state(), Word::ZERO);
    assert_eq!(Word::splat(Bit::Z).two_state(), Word::known(!0));
  }
}
