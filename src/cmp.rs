use std::cmp::Ordering;
use crate::BitVec4;

impl BitVec4 {

  /// Do the two vectors hold the same four-valued bits once zero extended.
  pub fn identical(&self, other: &BitVec4) -> bool {
    let n = self.words().max(other.words());
    (0 .. n).all(|i| self.word_or_zero(i) == other.word_or_zero(i))
  }

  /// Unsigned comparison of the zero extended values.
  /// `None` if either side has unknown bits.
  pub fn compare(&self, other: &BitVec4) -> Option<Ordering> {
    if self.has_unknown() || other.has_unknown() { return None }
    let n = self.words().max(other.words());
    for i in (0 .. n).rev() {
      let lhs = self.word_or_zero(i).a;
      let rhs = other.word_or_zero(i).a;
      if lhs != rhs { return Some(lhs.cmp(&rhs)) }
    }
    Some(Ordering::Equal)
  }

  /// `==`: `x` if either side has unknown bits.
  pub fn logic_eq(&self, other: &BitVec4) -> BitVec4 {
    match self.compare(other) {
      Some(o) => BitVec4::from(o == Ordering::Equal),
      None    => BitVec4::unknown(1)
    }
  }

  /// `!=`
  pub fn logic_ne(&self, other: &BitVec4) -> BitVec4 {
    self.logic_eq(other).logic_not()
  }

  /// `===`: exact match of `0`, `1`, `x`, `z`.  Never `x`.
  pub fn case_eq(&self, other: &BitVec4) -> BitVec4 {
    BitVec4::from(self.identical(other))
  }

  /// `!==`
  pub fn case_ne(&self, other: &BitVec4) -> BitVec4 {
    BitVec4::from(!self.identical(other))
  }

  fn relation(&self, other: &BitVec4, f: fn(Ordering) -> bool) -> BitVec4 {
    match self.compare(other) {
      Some(o) => BitVec4::from(f(o)),
      None    => BitVec4::unknown(1)
    }
  }

  /// `<`
  pub fn less(&self, other: &BitVec4) -> BitVec4 {
    self.relation(other, Ordering::is_lt)
  }

  /// `>`
  pub fn greater(&self, other: &BitVec4) -> BitVec4 {
    other.less(self)
  }

  /// `<=`
  pub fn less_eq(&self, other: &BitVec4) -> BitVec4 {
    self.greater(other).logic_not()
  }

  /// `>=`
  pub fn greater_eq(&self, other: &BitVec4) -> BitVec4 {
    self.less(other).logic_not()
  }
}


#[cfg(test)]
mod test {
  use crate::BitVec4;
  use crate::proptest::*;

  fn v(s: &str) -> BitVec4 { s.parse().unwrap() }

  #[test]
  fn equality() {
    assert_eq!(v("11").logic_eq(&v("xx")).to_string(), "x");
    assert_eq!(v("11").case_eq(&v("xx")).to_string(), "0");
    assert_eq!(v("xz").case_eq(&v("xz")).to_string(), "1");
    assert_eq!(v("x").case_eq(&v("z")).to_string(), "0");
    assert_eq!(v("0101").logic_eq(&v("101")).to_string(), "1");
    assert_eq!(v("0101").logic_ne(&v("101")).to_string(), "0");
    assert_eq!(v("1101").logic_ne(&v("101")).to_string(), "1");
    assert_eq!(v("1x").logic_ne(&v("10")).to_string(), "x");
    assert_eq!(v("00z").case_eq(&v("z")).to_string(), "1");
    assert_eq!(v("00z").case_ne(&v("x")).to_string(), "1");
  }

  #[test]
  fn relational() {
    let three = BitVec4::from(3_u8);
    let five  = v("101");
    assert_eq!(three.less(&five).to_string(), "1");
    assert_eq!(three.greater(&five).to_string(), "0");
    assert_eq!(five.less_eq(&five).to_string(), "1");
    assert_eq!(five.greater_eq(&three).to_string(), "1");
    assert_eq!(three.greater_eq(&five).to_string(), "0");
    assert_eq!(three.less(&v("1x")).to_string(), "x");
    assert_eq!(v("z").less_eq(&three).to_string(), "x");
  }

  #[test]
  fn reflexive() {
    do_test(unary, |x: BitVec4| {
      let logic = if x.has_unknown() { "x" } else { "1" };
      Some(x.case_eq(&x).to_string() == "1"
           && x.logic_eq(&x).to_string() == logic)
    })
  }

  #[test]
  fn case_results_are_known() {
    do_test(uneven, |(x, y): (BitVec4, BitVec4)| {
      let eq = x.case_eq(&y);
      let ne = x.case_ne(&y);
      Some(!eq.has_unknown() && !ne.has_unknown() && eq.to_bool() != ne.to_bool())
    })
  }

  #[test]
  fn matches_biguint() {
    do_test(known_uneven, |(x, y): (Known, Known)| {
      let (xr, a) = x.sem();
      let (yr, b) = y.sem();
      Some(xr.less(yr).to_bool() == (a < b)
           && xr.greater(yr).to_bool() == (a > b)
           && xr.less_eq(yr).to_bool() == (a <= b)
           && xr.greater_eq(yr).to_bool() == (a >= b)
           && xr.logic_eq(yr).to_bool() == (a == b))
    })
  }

  #[test]
  fn unknown_relations() {
    do_test(binary, |(x, y): (BitVec4, BitVec4)| {
      if !x.has_unknown() && !y.has_unknown() { return None }
      Some(x.less(&y).has_unknown() && x.greater_eq(&y).has_unknown())
    })
  }
}
