use crate::BitVec4;
use crate::bit::Bit;
use crate::error::{BitVecError, Result};
use crate::word::{Word, WordT};

/// Specify from which side of a vector are we indexing.
#[derive(Clone,Copy)]
pub enum IndexFrom {
  /// Index from the least significant side of the vector.
  Lsb,

  /// Index from the most significant side of the vector.
  Msb
}

/// Direction for indexing.
pub trait IndexDir {
  const DIR: IndexFrom;
}

/// Index from the least significant side of the vector.
#[derive(Clone,Copy)]
pub struct FromLSB;

/// Index from the most significant side of the vector.
#[derive(Clone,Copy)]
pub struct FromMSB;

impl IndexDir for FromLSB { const DIR: IndexFrom = IndexFrom::Lsb; }
impl IndexDir for FromMSB { const DIR: IndexFrom = IndexFrom::Msb; }

/// Positions `k` of a word starting at `lo` with `0 <= lo + k < bits`.
fn in_range_mask(lo: i128, bits: i128) -> WordT {
  let wbits = Word::BITS as i128;
  let from  = (-lo).clamp(0, wbits) as usize;
  let to    = (bits - lo).clamp(0, wbits) as usize;
  if to <= from { 0 } else { Word::low_mask(to) & !Word::low_mask(from) }
}

impl BitVec4 {

  /// Extract a bit at the given index, if it is in range.
  pub fn index<INDEX: IndexDir>(&self, index: usize) -> Option<Bit> {
    if index >= self.bits() { return None }

    // Turn into LSB index
    let i = match INDEX::DIR {
              IndexFrom::Msb => self.bits() - index - 1,
              IndexFrom::Lsb => index
            };
    Some(self.as_slice()[i / Word::BITS].get(i % Word::BITS))
  }

  pub fn bit(&self, i: usize) -> Option<Bit> { self.index::<FromLSB>(i) }
  pub fn bit_msb(&self, i: usize) -> Option<Bit> { self.index::<FromMSB>(i) }

  /// Overwrite one bit.  Indexes past the end are ignored.
  pub fn set_bit_value(&mut self, i: usize, bit: Bit) {
    if i >= self.bits() { return }
    self.as_slice_mut()[i / Word::BITS].set(i % Word::BITS, bit);
    self.update_unknown();
  }

  /// The 32 bits starting at position `lo`.
  /// Positions outside the vector read as 0.
  pub(crate) fn window(&self, lo: i128) -> Word {
    let wbits = Word::BITS as i128;
    if lo <= -wbits { return Word::ZERO }
    if lo < 0 {
      let w  = self.word_or_zero(0);
      let sh = (-lo) as usize;
      return Word::new(w.a << sh, w.b << sh)
    }
    let lo = match usize::try_from(lo) {
               Ok(lo) => lo,
               Err(_) => return Word::ZERO
             };
    let q  = lo / Word::BITS;
    let r  = lo % Word::BITS;
    let w0 = self.word_or_zero(q);
    if r == 0 { return w0 }
    let w1    = self.word_or_zero(q + 1);
    let other = Word::BITS - r;
    Word::new(w0.a >> r | w1.a << other, w0.b >> r | w1.b << other)
  }

  /// Part select `[end:start]`.  The result has `end - start + 1` bits and
  /// positions that fall outside the vector are `x`.
  pub fn part_select(&self, end: i64, start: i64) -> Result<BitVec4> {
    if end < start { return Err(BitVecError::InvalidRange { end, start }) }
    // A width the address space cannot hold is reported as a bad range.
    let width = usize::try_from(end as i128 - start as i128 + 1)
                  .map_err(|_| BitVecError::InvalidRange { end, start })?;
    let bits  = self.bits() as i128;

    Ok(BitVec4::map_words(width, |j| {
      let lo    = start as i128 + (j * Word::BITS) as i128;
      let valid = in_range_mask(lo, bits);
      let w     = self.window(lo);
      Word::new(w.a & valid, (w.b & valid) | !valid)
    }))
  }

  /// A single bit as a 1 bit vector, `x` when out of range.
  pub fn bit_select(&self, index: i64) -> BitVec4 {
    match usize::try_from(index).ok().and_then(|i| self.bit(i)) {
      Some(b) => BitVec4::from(b),
      None    => BitVec4::default()
    }
  }

  /// Bit select with a vector index.
  /// Unknown or unusable indexes give `x`.
  pub fn bit_select_by(&self, index: &BitVec4) -> BitVec4 {
    match index.to_index().and_then(|i| self.bit(i)) {
      Some(b) => BitVec4::from(b),
      None    => BitVec4::default()
    }
  }

  fn write_range(&mut self, end: i128, start: i128, value: &BitVec4) {
    let bits = self.bits() as i128;
    let lo   = start.max(0);
    let hi   = end.min(bits - 1);
    if lo > hi { return }

    let first = (lo as usize) / Word::BITS;
    let last  = (hi as usize) / Word::BITS;
    let ws    = self.as_slice_mut();
    for j in first ..= last {
      let base = (j * Word::BITS) as i128;
      let mask = in_range_mask(base - lo, hi - lo + 1);
      let src  = value.window(base - start);
      let w    = &mut ws[j];
      w.a = (w.a & !mask) | (src.a & mask);
      w.b = (w.b & !mask) | (src.b & mask);
    }
    self.normalize();
  }

  /// Part write `[end:start]`.  `value` is zero extended or truncated to
  /// `end - start + 1` bits, positions outside the vector are dropped.
  pub fn part_write(&mut self, end: i64, start: i64, value: &BitVec4)
    -> Result<()> {
    if end < start { return Err(BitVecError::InvalidRange { end, start }) }
    self.write_range(end as i128, start as i128, value);
    Ok(())
  }

  /// Write the low bit of `value` at `index`, ignoring bad indexes.
  pub fn bit_write(&mut self, index: i64, value: &BitVec4) {
    self.write_range(index as i128, index as i128, value)
  }

  /// Bit write with a vector index.  Unknown indexes leave `self` unchanged.
  pub fn bit_write_by(&mut self, index: &BitVec4, value: &BitVec4) {
    if let Some(i) = index.to_index() {
      if i < self.bits() { self.write_range(i as i128, i as i128, value) }
    }
  }
}
