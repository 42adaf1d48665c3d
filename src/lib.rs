//! Four-valued (`0`, `1`, `x`, `z`) bit vectors of arbitrary width,
//! with the bitwise, logical, relational and arithmetic operations of
//! hardware description languages.

// Owned operand variants of a binary operator implemented on `&BitVec4`.
macro_rules! forward_binop {
  ($trait:ident, $method:ident) => {
    impl std::ops::$trait<BitVec4> for BitVec4 {
      type Output = BitVec4;
      fn $method(self, rhs: BitVec4) -> BitVec4 {
        std::ops::$trait::$method(&self, &rhs)
      }
    }

    impl std::ops::$trait<&BitVec4> for BitVec4 {
      type Output = BitVec4;
      fn $method(self, rhs: &BitVec4) -> BitVec4 {
        std::ops::$trait::$method(&self, rhs)
      }
    }

    impl std::ops::$trait<BitVec4> for &BitVec4 {
      type Output = BitVec4;
      fn $method(self, rhs: BitVec4) -> BitVec4 {
        std::ops::$trait::$method(self, &rhs)
      }
    }
  };
}

// `op=` in terms of the `&BitVec4` operator.
macro_rules! forward_assign {
  ($trait:ident, $method:ident, $op_trait:ident, $op:ident) => {
    impl std::ops::$trait<&BitVec4> for BitVec4 {
      fn $method(&mut self, rhs: &BitVec4) {
        *self = std::ops::$op_trait::$op(&*self, rhs)
      }
    }

    impl std::ops::$trait<BitVec4> for BitVec4 {
      fn $method(&mut self, rhs: BitVec4) {
        *self = std::ops::$op_trait::$op(&*self, &rhs)
      }
    }
  };
}

pub mod error;
pub mod bit;
pub mod word;
pub mod core;
pub mod from;
pub mod display;
pub mod index;
pub mod iter_bits;
pub mod logic;
pub mod boolean;
pub mod cmp;
pub mod shift;
pub mod arith;
pub mod join;

#[cfg(test)]
pub mod proptest;

#[cfg(test)]
mod scenarios;

pub use crate::core::BitVec4;
pub use crate::bit::Bit;
pub use crate::word::Word;
pub use crate::error::{BitVecError, Result};
pub use crate::index::{IndexDir,IndexFrom,FromLSB,FromMSB};
