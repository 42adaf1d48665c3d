use crate::BitVec4;
use crate::core::words_for_size;
use crate::word::Word;
use proptest::prelude::*;
use proptest::strategy::*;
use proptest::arbitrary::*;
use proptest::test_runner::*;

/// A vector with no `x` or `z` bits.
#[derive(Debug, Clone)]
pub struct Known(pub BitVec4);

impl ValueTree for BitVec4 {
  type Value = BitVec4;

  fn current(&self) -> BitVec4 { self.clone() }

  fn simplify(&mut self) -> bool { false }
  fn complicate(&mut self) -> bool { false }
}

impl ValueTree for Known {
  type Value = Known;

  fn current(&self) -> Known { self.clone() }

  fn simplify(&mut self) -> bool { false }
  fn complicate(&mut self) -> bool { false }
}

fn random_words(runner: &mut TestRunner, bits: usize, known: bool) -> BitVec4 {
  let n = words_for_size(bits);
  let mut words = Vec::<Word>::with_capacity(n);
  let rng = runner.rng();
  for _ in 0 .. n {
    let a = rng.next_u32();
    // About a quarter of the bits end up unknown.
    let b = if known { 0 } else { rng.next_u32() & rng.next_u32() };
    words.push(Word::new(a, b))
  }
  BitVec4::from_words(bits, words)
}

#[derive(Debug)]
pub struct BitVec4Strategy { pub bits: usize }

impl Strategy for BitVec4Strategy {
  type Tree  = BitVec4;
  type Value = BitVec4;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    Ok(random_words(runner, self.bits, false))
  }
}

#[derive(Debug)]
pub struct KnownStrategy { pub bits: usize }

impl Strategy for KnownStrategy {
  type Tree  = Known;
  type Value = Known;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    Ok(Known(random_words(runner, self.bits, true)))
  }
}

impl Arbitrary for BitVec4 {
  type Parameters = usize;
  type Strategy   = BitVec4Strategy;

  fn arbitrary_with(bits: usize) -> Self::Strategy {
    BitVec4Strategy { bits: bits }
  }
}

impl Arbitrary for Known {
  type Parameters = usize;
  type Strategy   = KnownStrategy;

  fn arbitrary_with(bits: usize) -> Self::Strategy {
    KnownStrategy { bits: bits }
  }
}


/// Run a property for every width from 1 to a bit over four words.
pub fn do_test<T: Arbitrary>
    ( s: fn (usize) -> StrategyFor<T>
    , p: fn(T)      -> Option<bool>
    ) {
  for bits in 1 .. 4 * Word::BITS + 3 {
    let mut cfg: Config = <_>::default();
    cfg.failure_persistence = None;
    cfg.cases = 32;
    let mut runner = TestRunner::new(cfg);
    let strategy = s(bits);
    runner.run(&strategy, |arg| {
      match p(arg) {
        Some(result) =>
          if result { Ok(()) }
          else {
            Err(TestCaseError::Fail(format!("unexpected result at {} bits", bits).into()))
          },
        None => Err(TestCaseError::Reject("invalid input".into()))
      }
    }).unwrap()
  }
}

impl Known {
  pub fn sem(&self) -> (&BitVec4, num::BigUint) {
    let Known(x) = self;
    (x, num::BigUint::try_from(x).unwrap())
  }
}

pub fn pow2(bits: usize) -> num::BigUint {
  num::BigUint::from(1_u8) << bits
}

/// Panic if any representation invariant is broken.
pub fn check_invariants(x: &BitVec4) {
  assert!(x.bits() >= 1);
  assert_eq!(x.words(), words_for_size(x.bits()));
  let last = x.as_slice()[x.words() - 1];
  let used = x.last_used_bits();
  assert_eq!(last.keep_low(used), last, "dirty tail");
  let unknown = x.as_slice().iter().any(|w| w.b != 0);
  assert_eq!(x.has_unknown(), unknown, "stale unknown flag");
}

pub fn unary(bits: usize) -> StrategyFor<BitVec4> {
  arbitrary_with(bits)
}

pub fn binary(bits: usize) -> StrategyFor<(BitVec4,BitVec4)> {
  arbitrary_with((bits,bits))
}

/// Two operands of different widths.
pub fn uneven(bits: usize) -> StrategyFor<(BitVec4,BitVec4)> {
  arbitrary_with((bits, bits / 3 + 1))
}

pub fn known_unary(bits: usize) -> StrategyFor<Known> {
  arbitrary_with(bits)
}

pub fn known_uneven(bits: usize) -> StrategyFor<(Known,Known)> {
  arbitrary_with((bits, bits / 3 + 1))
}

pub fn word_and<T>(bits: usize) -> StrategyFor<(BitVec4,T)>
  where T: Arbitrary<Parameters=()> {
  arbitrary_with((bits,()))
}

pub fn known_and<T>(bits: usize) -> StrategyFor<(Known,T)>
  where T: Arbitrary<Parameters=()> {
  arbitrary_with((bits,()))
}
