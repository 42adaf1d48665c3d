// End to end checks of literal inputs against their expected rendering.

use crate::BitVec4;

fn v(s: &str) -> BitVec4 { s.parse().unwrap() }

fn check(x: BitVec4, bits: usize, text: &str) {
  assert_eq!(x.bits(), bits, "width of {}", text);
  assert_eq!(x.to_string(), text);
}

#[test]
fn default_value() {
  check(BitVec4::default(), 1, "x");
}

#[test]
fn from_u32() {
  check(BitVec4::from(0x12345678_u32), 32, "00010010001101000101011001111000");
}

#[test]
fn from_text() {
  check(v("01xz11"), 6, "01xz11");
}

#[test]
fn shift_left() {
  check(v("01xz1100") << 2_usize, 8, "xz110000");
}

#[test]
fn bitwise() {
  let x = v("01xz11");
  check(&x & &x, 6, "01xx11");
  check(&x | &x, 6, "01xx11");
  check(&x ^ &x, 6, "00xx00");
  check(!&x, 6, "10xx00");
}

#[test]
fn equalities() {
  check(v("11").logic_eq(&v("xx")), 1, "x");
  check(v("11").case_eq(&v("xx")), 1, "0");
}

#[test]
fn part_select() {
  let x = BitVec4::from(0x12345678_u32);
  check(x.part_select(5, -5).unwrap(), 11, "111000xxxxx");
}

#[test]
fn add_carry() {
  let r = BitVec4::from(0x12345678_u32) + BitVec4::from(0xFFFFFFFF_u32);
  check(r, 33, "100010010001101000101011001110111");
}

#[test]
fn logical() {
  check(v("1x").logic_and(&v("00")), 1, "0");
  check(v("xx").logic_not(), 1, "x");
}

#[test]
fn assign_into_wider() {
  let mut holder = BitVec4::zero(10);
  holder.assign(&v("01xz11"));
  check(holder, 10, "000001xz11");
}
