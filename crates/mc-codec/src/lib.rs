/// Multichain SDK - Binary codec primitives.
///
/// This crate provides the contract every wire-encodable type satisfies:
/// - `Encode`: exact size hint plus encoding into a `CodecWriter`
/// - `Decode`: decoding from a budget-aware `CodecReader`
/// - `to_binary` / `from_binary` helpers for whole-buffer conversion
///
/// Decoding is total over its input: short buffers and exhausted budgets
/// are reported as `CodecError` values, never as panics.

pub mod buffer;
pub mod codec;

mod error;
pub use error::CodecError;
pub use buffer::{CodecReader, CodecWriter};
pub use codec::{from_binary, from_binary_exact, to_binary, Decode, Encode, MAX_BYTES};
