// Four-valued vectors of dynamic sizes

use crate::bit::Bit;
use crate::error::{BitVecError, Result};
use crate::word::Word;

/// An arbitrary sized vector of four-valued bits.
///
/// Invariants, re-established by every public operation:
///   * `bits >= 1` and `data.len() == words_for_size(bits)`
///   * positions past `bits` in the last word are 0 in both masks
///   * `unknown` is set exactly when some retained bit is `x` or `z`
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitVec4 {
  data:    Vec<Word>,
  bits:    usize,
  unknown: bool
}

pub fn words_for_size(bits: usize) -> usize {
  (bits + Word::BITS - 1) / Word::BITS
}

/// A single `x`.
impl Default for BitVec4 {
  fn default() -> Self {
    BitVec4 { data: vec![Word::new(0, 1)], bits: 1, unknown: true }
  }
}

impl BitVec4 {

  /// Build a vector from raw words, least significant first.
  /// Missing words are 0 and surplus words are dropped.
  /// A size of 0 gives the default value.
  pub fn from_words(bits: usize, mut data: Vec<Word>) -> BitVec4 {
    if bits == 0 { return BitVec4::default() }
    data.resize(words_for_size(bits), Word::ZERO);
    let mut result = BitVec4 { data, bits, unknown: false };
    result.normalize();
    result
  }

  /// Every bit set to `bit`.  A size of 0 gives the default value.
  pub fn filled(bit: Bit, bits: usize) -> BitVec4 {
    if bits == 0 { return BitVec4::default() }
    let mut result = BitVec4 {
      data:    vec![Word::splat(bit); words_for_size(bits)],
      bits:    bits,
      unknown: bit.is_unknown()
    };
    result.fix_tail();
    result
  }

  /// A 0 initialized vector of the given size.
  pub fn zero(bits: usize) -> BitVec4 { Self::filled(Bit::Zero, bits) }

  /// A vector of `x` of the given size.
  pub fn unknown(bits: usize) -> BitVec4 { Self::filled(Bit::X, bits) }

  /// The size of the vector in bits.
  pub fn bits(&self) -> usize { self.bits }

  /// How many words are used to store the vector.
  pub fn words(&self) -> usize { self.data.len() }

  /// Does any retained bit hold `x` or `z`.
  pub fn has_unknown(&self) -> bool { self.unknown }

  /// The underlying words, least significant first.
  pub fn as_slice(&self) -> &[Word] { &self.data }

  /// Mutable access to the words.  Callers must finish with `normalize`.
  pub(crate) fn as_slice_mut(&mut self) -> &mut [Word] { &mut self.data }

  /// The word at index `i`, or 0 past the end.
  /// This is how narrower operands are zero-extended.
  pub fn word_or_zero(&self, i: usize) -> Word {
    self.data.get(i).copied().unwrap_or(Word::ZERO)
  }

  /// The number of unused positions in the most significant word.
  pub fn padding(&self) -> usize {
    self.words() * Word::BITS - self.bits
  }

  /// The number of bits that are used in the most significant word.
  pub fn last_used_bits(&self) -> usize {
    Word::BITS - self.padding()
  }

  /// Clear the unused positions of the most significant word.
  pub fn fix_tail(&mut self) {
    let used = self.last_used_bits();
    if let Some(last) = self.data.last_mut() {
      *last = last.keep_low(used);
    }
  }

  /// Recompute the unknown flag from the stored words.
  pub fn update_unknown(&mut self) {
    self.unknown = self.data.iter().any(|w| !w.is_known())
  }

  /// Restore the invariants after writing to the words directly.
  pub fn normalize(&mut self) {
    self.fix_tail();
    self.update_unknown();
  }

  /// Change the width, zero extending or truncating as needed.
  /// A width of 0 turns the value into a single `x`.
  pub fn resize(&mut self, bits: usize) {
    if bits == self.bits { return }
    if bits == 0 {
      *self = BitVec4::default();
      return
    }
    self.data.resize(words_for_size(bits), Word::ZERO);
    self.bits = bits;
    self.normalize();
  }

  /// Like `resize` but for signed widths coming from the outside.
  pub fn set_width(&mut self, bits: i64) -> Result<()> {
    if bits < 0 { return Err(BitVecError::InvalidSize(bits)) }
    self.resize(bits as usize);
    Ok(())
  }

  /// A copy of the value at a different width.
  pub fn with_width(&self, bits: usize) -> BitVec4 {
    let mut result = self.clone();
    result.resize(bits);
    result
  }

  /// Copy the low bits of `value` into `self`, keeping the width of `self`.
  pub fn assign(&mut self, value: &BitVec4) {
    for (i, out) in self.data.iter_mut().enumerate() {
      *out = value.word_or_zero(i);
    }
    self.normalize();
  }

  /// Collapse to two states in place: `x` becomes 0 and `z` becomes 1.
  pub fn to_two_state(&mut self) {
    for w in self.data.iter_mut() { *w = w.two_state() }
    self.unknown = false;
  }

  /// Build a result with width `bits` from a function on word indexes.
  pub(crate) fn map_words<F>(bits: usize, f: F) -> BitVec4
    where F: FnMut(usize) -> Word {
    BitVec4::from_words(bits, (0 .. words_for_size(bits)).map(f).collect())
  }
}
