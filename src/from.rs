use std::str::FromStr;
use num::BigUint;
use crate::BitVec4;
use crate::bit::Bit;
use crate::error::{BitVecError, Result};
use crate::word::{Word, WordT};

impl BitVec4 {

  /// A known value of the given width holding the low bits of `value`.
  pub fn from_u64(bits: usize, value: u64) -> BitVec4 {
    let words = vec![ Word::known(value as WordT)
                    , Word::known((value >> Word::BITS) as WordT) ];
    BitVec4::from_words(bits, words)
  }

  /// `n` copies of the same bit.
  pub fn repeat<B>(bit: B, n: i64) -> Result<BitVec4>
    where B: TryInto<Bit>, BitVecError: From<B::Error> {
    if n <= 0 { return Err(BitVecError::InvalidSize(n)) }
    Ok(BitVec4::filled(bit.try_into()?, n as usize))
  }

  /// Parse MSB-first text over `0`, `1`, `x`, `z`.
  /// The empty string is the default value.
  pub fn from_text(text: &str) -> Result<BitVec4> {
    if text.is_empty() { return Ok(BitVec4::default()) }

    let bits = text.chars().count();
    let mut result = BitVec4::zero(bits);
    let ws = result.as_slice_mut();
    for (i, c) in text.chars().rev().enumerate() {
      ws[i / Word::BITS].set(i % Word::BITS, Bit::from_char(c)?);
    }
    result.update_unknown();
    Ok(result)
  }

  /// A known value holding the low `bits` bits of `value`.
  pub fn from_biguint(bits: usize, value: &BigUint) -> Result<BitVec4> {
    if bits == 0 { return Err(BitVecError::InvalidSize(0)) }
    let words = value.to_u32_digits().into_iter().map(Word::known).collect();
    Ok(BitVec4::from_words(bits, words))
  }

  /// The value as a machine integer.
  /// Only for vectors of at most 64 bits with no unknown bits.
  pub fn to_u64(&self) -> Result<u64> {
    if self.bits() > u64::BITS as usize {
      return Err(BitVecError::InvalidSize(self.bits() as i64))
    }
    if self.has_unknown() { return Err(BitVecError::UnknownVector) }
    let lo = self.word_or_zero(0).a as u64;
    let hi = self.word_or_zero(1).a as u64;
    Ok(hi << Word::BITS | lo)
  }

  /// The bit pattern of `to_u64` read as two's complement.
  pub fn to_i64(&self) -> Result<i64> {
    self.to_u64().map(|x| x as i64)
  }

  /// The value as an index, if it is known and fits in `usize`.
  pub(crate) fn to_index(&self) -> Option<usize> {
    if self.has_unknown() { return None }
    if self.as_slice().iter().skip(2).any(|w| w.a != 0) { return None }
    let lo = self.word_or_zero(0).a as u64;
    let hi = self.word_or_zero(1).a as u64;
    usize::try_from(hi << Word::BITS | lo).ok()
  }
}

macro_rules! from_unsigned {
  ($t:ty) => {
    impl From<$t> for BitVec4 {
      fn from(x: $t) -> Self {
        BitVec4::from_u64(<$t>::BITS as usize, x as u64)
      }
    }
  };
}

// Signed values keep their two's complement pattern at their own width.
macro_rules! from_signed {
  ($t:ty, $u:ty) => {
    impl From<$t> for BitVec4 {
      fn from(x: $t) -> Self { BitVec4::from(x as $u) }
    }
  };
}

from_unsigned!(u8);
from_unsigned!(u16);
from_unsigned!(u32);
from_unsigned!(u64);
from_signed!(i8, u8);
from_signed!(i16, u16);
from_signed!(i32, u32);
from_signed!(i64, u64);

impl From<Bit> for BitVec4 {
  fn from(bit: Bit) -> Self { BitVec4::filled(bit, 1) }
}

impl From<bool> for BitVec4 {
  fn from(b: bool) -> Self { BitVec4::from(Bit::from(b)) }
}

impl FromStr for BitVec4 {
  type Err = BitVecError;
  fn from_str(s: &str) -> Result<Self> { BitVec4::from_text(s) }
}

impl TryFrom<&BitVec4> for u64 {
  type Error = BitVecError;
  fn try_from(x: &BitVec4) -> Result<u64> { x.to_u64() }
}

impl TryFrom<&BitVec4> for BigUint {
  type Error = BitVecError;
  fn try_from(x: &BitVec4) -> Result<BigUint> {
    if x.has_unknown() { return Err(BitVecError::UnknownVector) }
    Ok(BigUint::new(x.as_slice().iter().map(|w| w.a).collect()))
  }
}
