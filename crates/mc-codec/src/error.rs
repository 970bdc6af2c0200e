/// Error types for binary encoding and decoding.
///
/// Covers truncated input, decode budget exhaustion, and bytes that do not
/// form a valid value of the target type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The source buffer ended before the value was complete.
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    /// The value would consume more than the caller's remaining budget.
    #[error("decode budget exceeded: need {needed} bytes, budget {remaining}")]
    BudgetExceeded { needed: usize, remaining: usize },

    /// Bytes were read but do not encode a valid value.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Input remained after a complete value was decoded.
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
}
