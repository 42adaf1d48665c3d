use thiserror::Error;

/// Things that can go wrong when building or inspecting a `BitVec4`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitVecError {
  /// A character or bit code that is not one of `0`, `1`, `x`, `z`.
  #[error("invalid four-valued bit: {0}")]
  InvalidInput(String),

  /// A width that cannot be used for the requested operation.
  #[error("invalid size: {0}")]
  InvalidSize(i64),

  /// A part select or part write whose end is below its start.
  #[error("invalid range: [{end}:{start}]")]
  InvalidRange { end: i64, start: i64 },

  /// An arithmetic operation without a defined result (division by 0).
  #[error("invalid operation: {0}")]
  InvalidOperation(&'static str),

  /// A machine integer was requested from a value with `x` or `z` bits.
  #[error("vector contains unknown bits")]
  UnknownVector,
}

pub type Result<T> = std::result::Result<T, BitVecError>;

impl From<std::convert::Infallible> for BitVecError {
  fn from(x: std::convert::Infallible) -> Self { match x {} }
}
