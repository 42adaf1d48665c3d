use std::marker::PhantomData;
use crate::BitVec4;
use crate::bit::Bit;
use crate::index::{IndexDir,FromLSB,FromMSB};
use crate::word::Word;

impl BitVec4 {

  /// Iterate over the bits.
  pub fn iter_bits<INDEX: IndexDir>(&self) -> TraverseBitsBorrowed<'_, INDEX> {
    TraverseBitsBorrowed { dir: PhantomData, vec: self, ix: 0 }
  }

  /// Iterate over the bits, starting at the most significant end.
  pub fn iter_bits_msb(&self) ->
    TraverseBitsBorrowed<'_, FromMSB> { self.iter_bits() }

  /// Iterate over the bits, starting at the least significant end.
  pub fn iter_bits_lsb(&self) ->
    TraverseBitsBorrowed<'_, FromLSB> { self.iter_bits() }

  /// Iterate over the bits.
  pub fn into_iter_bits<INDEX: IndexDir>(self) -> TraverseBitsOwned<INDEX> {
    TraverseBitsOwned { dir: PhantomData, vec: self, ix: 0 }
  }

  /// Iterate over the bits, starting at the most significant end.
  pub fn into_iter_bits_msb(self) -> TraverseBitsOwned<FromMSB>
    { self.into_iter_bits() }

  /// Iterate over the bits, starting at the least significant end.
  pub fn into_iter_bits_lsb(self) -> TraverseBitsOwned<FromLSB>
    { self.into_iter_bits() }
}

/// Traverse a borrowed vector as bits.
#[derive(Clone)]
pub struct TraverseBitsBorrowed<'a, INDEX: IndexDir> {
  dir: PhantomData<INDEX>,
  vec: &'a BitVec4,
  ix:  usize
}

impl<'a, INDEX: IndexDir> Iterator for TraverseBitsBorrowed<'a, INDEX> {
  type Item = Bit;
  fn next(&mut self) -> Option<Self::Item> {
    let b = self.vec.index::<INDEX>(self.ix)?;
    self.ix += 1;
    Some(b)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.vec.bits() - self.ix;
    (n, Some(n))
  }
}

impl<'a, INDEX: IndexDir> ExactSizeIterator for TraverseBitsBorrowed<'a, INDEX> {}


// -----------------------------------------------------------------------------


/// Traverse an owned vector as bits.
#[derive(Clone)]
pub struct TraverseBitsOwned<INDEX: IndexDir> {
  dir: PhantomData<INDEX>,
  vec: BitVec4,
  ix:  usize
}

impl<INDEX: IndexDir> Iterator for TraverseBitsOwned<INDEX> {
  type Item = Bit;
  fn next(&mut self) -> Option<Self::Item> {
    let b = self.vec.index::<INDEX>(self.ix)?;
    self.ix += 1;
    Some(b)
  }
}

/// Collect bits given least significant first.
/// An empty iterator gives the default value.
impl FromIterator<Bit> for BitVec4 {
  fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
    let mut words = Vec::<Word>::new();
    let mut bits  = 0;
    for b in iter {
      if bits % Word::BITS == 0 { words.push(Word::ZERO) }
      if let Some(w) = words.last_mut() { w.set(bits % Word::BITS, b) }
      bits += 1;
    }
    BitVec4::from_words(bits, words)
  }
}
