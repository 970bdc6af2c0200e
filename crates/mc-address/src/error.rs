use mc_codec::CodecError;

/// Error types for address decoding.
///
/// Binary failures (short buffer, exhausted budget) arrive wrapped from the
/// codec; the remaining variants cover the textual and JSON forms.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    /// Binary decoding failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Text is not valid hexadecimal under the active `HexConfig`.
    #[error("invalid hex encoding: {0}")]
    InvalidEncoding(String),

    /// Decoded byte count differs from the address width.
    #[error("invalid address length: expected {expected} bytes, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// A structured-data value that is not a string.
    #[error("invalid type: expected hex string, got {0}")]
    TypeMismatch(String),

    /// Malformed JSON syntax or non-UTF8 input.
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<hex::FromHexError> for AddressError {
    fn from(e: hex::FromHexError) -> Self {
        AddressError::InvalidEncoding(e.to_string())
    }
}
