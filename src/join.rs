use crate::BitVec4;
use crate::core::words_for_size;
use crate::error::{BitVecError, Result};
use crate::word::Word;

impl BitVec4 {

  /// `{self, lower}`: `self` ends up in the most significant bits.
  pub fn concat(&self, lower: &BitVec4) -> BitVec4 {
    let bits  = self.bits() + lower.bits();
    let shift = lower.bits() as i128;
    let ws    = lower.as_slice();
    let mut out = Vec::<Word>::with_capacity(words_for_size(bits));
    for j in 0 .. words_for_size(bits) {
      let base  = (j * Word::BITS) as i128;
      let upper = self.window(base - shift);
      let low   = ws.get(j).copied().unwrap_or(Word::ZERO);
      out.push(Word::new(upper.a | low.a, upper.b | low.b));
    }
    BitVec4::from_words(bits, out)
  }

  /// `{n{self}}`
  pub fn replicate(&self, n: usize) -> Result<BitVec4> {
    if n == 0 { return Err(BitVecError::InvalidSize(0)) }
    let mut result = self.clone();
    for _ in 1 .. n {
      result = result.concat(self);
    }
    Ok(result)
  }
}
