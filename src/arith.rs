use num::BigUint;
use crate::BitVec4;
use crate::core::words_for_size;
use crate::error::{BitVecError, Result};
use crate::word::{Word, WordT};

type BigWordT = u64;

/// The `a` masks of the first `n` words, zero extended.
fn limbs(x: &BitVec4, n: usize) -> impl Iterator<Item = WordT> + '_ {
  (0 .. n).map(move |i| x.word_or_zero(i).a)
}

fn known_words(xs: Vec<WordT>) -> Vec<Word> {
  xs.into_iter().map(Word::known).collect()
}

impl BitVec4 {

  /// Width of the result of a binary operation.
  fn result_bits(&self, other: &BitVec4) -> usize {
    self.bits().max(other.bits())
  }

  fn any_unknown(&self, other: &BitVec4) -> bool {
    self.has_unknown() || other.has_unknown()
  }

  /// `self * other` as an unbounded list of digits.
  fn full_product(&self, other: &BitVec4) -> Vec<WordT> {
    let xs = self.as_slice();
    let ys = other.as_slice();
    let mut out = vec![0 as WordT; xs.len() + ys.len()];
    for (i, x) in xs.iter().enumerate() {
      let mut carry: BigWordT = 0;
      for (j, y) in ys.iter().enumerate() {
        let t = (x.a as BigWordT) * (y.a as BigWordT)
              + out[i + j] as BigWordT
              + carry;
        out[i + j] = t as WordT;
        carry = t >> Word::BITS;
      }
      out[i + ys.len()] = carry as WordT;
    }
    out
  }

  /// Unsigned division.  Fails when `other` is 0.
  pub fn divide(&self, other: &BitVec4) -> Result<BitVec4> {
    self.div_rem(other, "division by zero", |x, y| x / y)
  }

  /// Unsigned remainder.  Fails when `other` is 0.
  pub fn modulo(&self, other: &BitVec4) -> Result<BitVec4> {
    self.div_rem(other, "modulus by zero", |x, y| x % y)
  }

  fn div_rem(&self, other: &BitVec4, what: &'static str,
             op: fn(BigUint, BigUint) -> BigUint) -> Result<BitVec4> {
    let bits = self.result_bits(other);
    if self.any_unknown(other) { return Ok(BitVec4::unknown(bits)) }
    if other.truth() == Some(false) {
      return Err(BitVecError::InvalidOperation(what))
    }
    let x = BigUint::try_from(self)?;
    let y = BigUint::try_from(other)?;
    BitVec4::from_biguint(bits, &op(x, y))
  }

  /// Raise to a power, keeping the width of `self`.
  pub fn pow(&self, exp: &BitVec4) -> BitVec4 {
    let bits = self.bits();
    if self.any_unknown(exp) { return BitVec4::unknown(bits) }

    let one = BitVec4::from_u64(bits, 1);
    if exp.truth() == Some(false) || *self == one { return one }

    match (BigUint::try_from(self), BigUint::try_from(exp)) {
      (Ok(x), Ok(e)) => {
        let lim = BigUint::from(1_u8) << bits;
        BitVec4::from_biguint(bits, &x.modpow(&e, &lim))
          .unwrap_or_else(|_| BitVec4::unknown(bits))
      }
      _ => BitVec4::unknown(bits)
    }
  }
}

/// The width grows by one bit exactly when the sum does not fit.
impl std::ops::Add<&BitVec4> for &BitVec4 {
  type Output = BitVec4;

  fn add(self, other: &BitVec4) -> Self::Output {
    let bits = self.result_bits(other);
    if self.any_unknown(other) { return BitVec4::unknown(bits) }

    let n = words_for_size(bits);
    let mut out = Vec::<WordT>::with_capacity(n + 1);
    let mut acc: BigWordT = 0;
    for (x, y) in limbs(self, n).zip(limbs(other, n)) {
      acc += x as BigWordT;
      acc += y as BigWordT;
      out.push(acc as WordT);
      acc = acc >> Word::BITS;
    }
    out.push(acc as WordT);

    let carry = out[bits / Word::BITS] >> (bits % Word::BITS) & 1 != 0;
    BitVec4::from_words(if carry { bits + 1 } else { bits }, known_words(out))
  }
}

/// Wraps around at the wider width.
impl std::ops::Sub<&BitVec4> for &BitVec4 {
  type Output = BitVec4;

  fn sub(self, other: &BitVec4) -> Self::Output {
    let bits = self.result_bits(other);
    if self.any_unknown(other) { return BitVec4::unknown(bits) }

    let n = words_for_size(bits);
    let mut out = Vec::<WordT>::with_capacity(n);
    let mut acc: BigWordT = 1;
    for (x, y) in limbs(self, n).zip(limbs(other, n)) {
      acc += x as BigWordT;
      acc += (!y) as BigWordT;
      out.push(acc as WordT);
      acc = acc >> Word::BITS;
    }
    BitVec4::from_words(bits, known_words(out))
  }
}

/// Keeps the wider width, plus one more word when the product overflows
/// the words of that width.
impl std::ops::Mul<&BitVec4> for &BitVec4 {
  type Output = BitVec4;

  fn mul(self, other: &BitVec4) -> Self::Output {
    let bits = self.result_bits(other);
    if self.any_unknown(other) { return BitVec4::unknown(bits) }

    let product = self.full_product(other);
    let n = words_for_size(bits);
    let overflow = product.iter().skip(n).any(|&d| d != 0);
    let width = if overflow { bits + Word::BITS } else { bits };
    BitVec4::from_words(width, known_words(product))
  }
}

impl std::ops::Neg for &BitVec4 {
  type Output = BitVec4;

  fn neg(self) -> Self::Output {
    if self.has_unknown() { return BitVec4::unknown(self.bits()) }

    let mut out = Vec::<WordT>::with_capacity(self.words());
    let mut acc: BigWordT = 1;
    for w in self.as_slice() {
      acc += (!w.a) as BigWordT;
      out.push(acc as WordT);
      acc = acc >> Word::BITS;
    }
    BitVec4::from_words(self.bits(), known_words(out))
  }
}

impl std::ops::Neg for BitVec4 {
  type Output = BitVec4;
  fn neg(self) -> Self::Output { -&self }
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

forward_assign!(AddAssign, add_assign, Add, add);
forward_assign!(SubAssign, sub_assign, Sub, sub);
forward_assign!(MulAssign, mul_assign, Mul, mul);
