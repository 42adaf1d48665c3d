use crate::BitVec4;
use crate::bit::Bit;
use crate::word::{Word, WordT};

// Operands are zero extended to the wider width.  Any `x` or `z` that
// does not get absorbed by a known 0 (and) or 1 (or) comes out as `x`.
macro_rules! do_logic_eval {
  ($trait:ident, $method:ident, $word_op:ident) => {
    impl std::ops::$trait<&BitVec4> for &BitVec4 {
      type Output = BitVec4;
      fn $method(self, rhs: &BitVec4) -> Self::Output {
        let bits = self.bits().max(rhs.bits());
        BitVec4::map_words(bits, |i| {
          self.word_or_zero(i).$word_op(rhs.word_or_zero(i))
        })
      }
    }
  };
}

do_logic_eval!(BitAnd, bitand, and);
do_logic_eval!(BitOr,  bitor,  or);
do_logic_eval!(BitXor, bitxor, xor);

forward_binop!(BitAnd, bitand);
forward_binop!(BitOr,  bitor);
forward_binop!(BitXor, bitxor);

forward_assign!(BitAndAssign, bitand_assign, BitAnd, bitand);
forward_assign!(BitOrAssign,  bitor_assign,  BitOr,  bitor);
forward_assign!(BitXorAssign, bitxor_assign, BitXor, bitxor);

impl std::ops::Not for &BitVec4 {
  type Output = BitVec4;
  fn not(self) -> Self::Output {
    let xs: Vec<Word> = self.as_slice().iter().map(|w| w.not()).collect();
    BitVec4::from_words(self.bits(), xs)
  }
}

impl std::ops::Not for BitVec4 {
  type Output = BitVec4;
  fn not(self) -> Self::Output { !&self }
}

impl BitVec4 {

  /// Words with the positions past the width cleared from `mask`.
  fn retained(&self, mask: fn(Word) -> WordT)
    -> impl Iterator<Item = WordT> + '_ {
    let last = self.words() - 1;
    let used = Word::low_mask(self.last_used_bits());
    self.as_slice().iter().enumerate().map(move |(i, &w)| {
      if i == last { mask(w) & used } else { mask(w) }
    })
  }

  /// `&` of all bits.
  pub fn reduce_and(&self) -> BitVec4 {
    let bit =
      if self.retained(Word::zeros).any(|m| m != 0) { Bit::Zero }
      else if self.has_unknown() { Bit::X }
      else { Bit::One };
    BitVec4::from(bit)
  }

  /// `|` of all bits.
  pub fn reduce_or(&self) -> BitVec4 {
    let bit =
      if self.retained(Word::ones).any(|m| m != 0) { Bit::One }
      else if self.has_unknown() { Bit::X }
      else { Bit::Zero };
    BitVec4::from(bit)
  }

  /// `^` of all bits.
  pub fn reduce_xor(&self) -> BitVec4 {
    if self.has_unknown() { return BitVec4::unknown(1) }
    let ones: u32 = self.as_slice().iter().map(|w| w.a.count_ones()).sum();
    BitVec4::from(ones % 2 == 1)
  }
}
