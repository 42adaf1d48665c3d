use crate::BitVec4;
use crate::bit::Bit;

fn from_truth(t: Option<bool>) -> BitVec4 {
  match t {
    Some(b) => BitVec4::from(b),
    None    => BitVec4::unknown(1)
  }
}

impl BitVec4 {

  /// Three-valued truth: `Some(true)` if any bit is 1, `Some(false)` if all
  /// bits are 0, and `None` for a mix of 0s and unknowns.
  pub fn truth(&self) -> Option<bool> {
    if self.as_slice().iter().any(|w| w.ones() != 0) { return Some(true) }
    if self.has_unknown() { None } else { Some(false) }
  }

  /// Host boolean: only a true value maps to `true`.
  pub fn to_bool(&self) -> bool { self.truth() == Some(true) }

  /// `&&`
  pub fn logic_and(&self, other: &BitVec4) -> BitVec4 {
    from_truth(match (self.truth(), other.truth()) {
      (Some(false), _) | (_, Some(false)) => Some(false),
      (Some(true), Some(true))            => Some(true),
      _                                   => None
    })
  }

  /// `||`
  pub fn logic_or(&self, other: &BitVec4) -> BitVec4 {
    from_truth(match (self.truth(), other.truth()) {
      (Some(true), _) | (_, Some(true)) => Some(true),
      (Some(false), Some(false))        => Some(false),
      _                                 => None
    })
  }

  /// `!`
  pub fn logic_not(&self) -> BitVec4 {
    from_truth(self.truth().map(|b| !b))
  }

  /// The truth value as a single bit.
  pub fn truth_bit(&self) -> Bit {
    match self.truth() {
      Some(b) => Bit::from(b),
      None    => Bit::X
    }
  }
}

impl From<&BitVec4> for bool {
  fn from(x: &BitVec4) -> bool { x.to_bool() }
}
