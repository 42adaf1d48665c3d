use std::fmt;
use crate::BitVec4;

impl BitVec4 {
  /// Render MSB-first over `0`, `1`, `x`, `z`, one character per bit.
  pub fn render(&self) -> String {
    self.iter_bits_msb().map(|b| b.to_char()).collect()
  }
}

impl fmt::Display for BitVec4 {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad(&self.render())
  }
}

impl fmt::Binary for BitVec4 {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0b", &self.render())
  }
}

/// Hardware style: `6'b01xz11`.
impl fmt::Debug for BitVec4 {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}'b{}", self.bits(), self.render())
  }
}
