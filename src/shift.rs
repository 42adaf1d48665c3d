use crate::BitVec4;
use crate::word::Word;

/// How far to shift, once the amount has been looked at.
enum Amount {
  By(usize),
  /// Everything is shifted out.
  TooLarge,
  /// The amount has unknown bits.
  Unknown
}

impl Amount {
  fn of_signed(amt: i64) -> Amount {
    match usize::try_from(amt) {
      Ok(n)  => Amount::By(n),
      Err(_) => Amount::TooLarge
    }
  }

  fn of_vector(amt: &BitVec4) -> Amount {
    if amt.has_unknown() { return Amount::Unknown }
    // Only the value matters: a wide vector holding a small amount is fine.
    // Values that do not fit in 64 bits count as too large.
    match amt.to_index() {
      Some(n) => Amount::By(n),
      None    => Amount::TooLarge
    }
  }
}

impl BitVec4 {

  /// Shift towards the most significant end, filling with 0.
  pub fn shift_left(&self, amt: usize) -> BitVec4 {
    if amt >= self.bits() { return BitVec4::zero(self.bits()) }
    if amt == 0 { return self.clone() }
    BitVec4::map_words(self.bits(), |j| {
      self.window((j * Word::BITS) as i128 - amt as i128)
    })
  }

  /// Shift towards the least significant end, filling with 0.
  pub fn shift_right(&self, amt: usize) -> BitVec4 {
    if amt >= self.bits() { return BitVec4::zero(self.bits()) }
    if amt == 0 { return self.clone() }
    BitVec4::map_words(self.bits(), |j| {
      self.window((j * Word::BITS + amt) as i128)
    })
  }

  fn shift_by(&self, amt: Amount, left: bool) -> BitVec4 {
    match amt {
      Amount::By(n) if left => self.shift_left(n),
      Amount::By(n)         => self.shift_right(n),
      Amount::TooLarge      => BitVec4::zero(self.bits()),
      Amount::Unknown       => BitVec4::unknown(self.bits())
    }
  }
}

macro_rules! do_shift {
  ($trait:ident, $method:ident, $assign:ident, $assign_method:ident, $left:expr) => {
    impl std::ops::$trait<usize> for &BitVec4 {
      type Output = BitVec4;
      fn $method(self, amt: usize) -> BitVec4 {
        self.shift_by(Amount::By(amt), $left)
      }
    }

    /// Negative amounts shift everything out.
    impl std::ops::$trait<i64> for &BitVec4 {
      type Output = BitVec4;
      fn $method(self, amt: i64) -> BitVec4 {
        self.shift_by(Amount::of_signed(amt), $left)
      }
    }

    impl std::ops::$trait<&BitVec4> for &BitVec4 {
      type Output = BitVec4;
      fn $method(self, amt: &BitVec4) -> BitVec4 {
        self.shift_by(Amount::of_vector(amt), $left)
      }
    }

    impl std::ops::$trait<usize> for BitVec4 {
      type Output = BitVec4;
      fn $method(self, amt: usize) -> BitVec4 {
        std::ops::$trait::$method(&self, amt)
      }
    }

    impl std::ops::$trait<i64> for BitVec4 {
      type Output = BitVec4;
      fn $method(self, amt: i64) -> BitVec4 {
        std::ops::$trait::$method(&self, amt)
      }
    }

    impl std::ops::$trait<&BitVec4> for BitVec4 {
      type Output = BitVec4;
      fn $method(self, amt: &BitVec4) -> BitVec4 {
        std::ops::$trait::$method(&self, amt)
      }
    }

    impl std::ops::$assign<usize> for BitVec4 {
      fn $assign_method(&mut self, amt: usize) {
        *self = std::ops::$trait::$method(&*self, amt)
      }
    }
  };
}

do_shift!(Shl, shl, ShlAssign, shl_assign, true);
do_shift!(Shr, shr, ShrAssign, shr_assign, false);
