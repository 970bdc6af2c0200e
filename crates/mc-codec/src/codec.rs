//! The size-hint / encode / decode contract.
//!
//! Implementors report their exact encoded length up front so composite
//! encoders can pre-allocate, and decode by pulling bytes from a
//! `CodecReader` whose budget bounds the total work.
//!
//! # Binary Format
//!
//! - Integers: little-endian, fixed width
//! - `bool`: one byte, 0 or 1
//! - `[u8; N]`: N raw bytes, no prefix
//! - `Vec<u8>` / `String`: u32 length prefix followed by the bytes, so at
//!   most `u32::MAX` bytes

use crate::{CodecError, CodecReader, CodecWriter};

/// Default decode budget: 64 MiB.
pub const MAX_BYTES: usize = 64 * 1024 * 1024;

/// Types with a binary encoding.
pub trait Encode {
    /// Exact number of bytes `encode` will write.
    fn size_hint(&self) -> usize;

    /// Append the binary representation to `w`.
    fn encode(&self, w: &mut CodecWriter);

    /// Encode into a new buffer allocated to exactly `size_hint()` bytes.
    fn to_binary(&self) -> Vec<u8> {
        let mut w = CodecWriter::with_capacity(self.size_hint());
        self.encode(&mut w);
        w.into_bytes()
    }
}

/// Types that can be decoded from their binary encoding.
pub trait Decode: Sized {
    /// Decode one value, advancing the reader past it.
    fn decode(r: &mut CodecReader<'_>) -> Result<Self, CodecError>;

    /// Decode from the start of `data` under the default budget.
    ///
    /// Bytes after the value are left unread.
    fn from_binary(data: &[u8]) -> Result<Self, CodecError> {
        Self::decode(&mut CodecReader::new(data))
    }
}

/// Encode `value` into a new buffer.
pub fn to_binary<T: Encode + ?Sized>(value: &T) -> Vec<u8> {
    value.to_binary()
}

/// Decode a `T` from the start of `data` under the default budget.
pub fn from_binary<T: Decode>(data: &[u8]) -> Result<T, CodecError> {
    T::from_binary(data)
}

/// Decode a `T` that must span all of `data`, consuming at most `budget`.
pub fn from_binary_exact<T: Decode>(data: &[u8], budget: usize) -> Result<T, CodecError> {
    let mut r = CodecReader::with_budget(data, budget);
    let value = T::decode(&mut r)?;
    match r.remaining() {
        0 => Ok(value),
        n => Err(CodecError::TrailingBytes(n)),
    }
}

// --- Primitives ---

impl Encode for u8 {
    fn size_hint(&self) -> usize {
        1
    }

    fn encode(&self, w: &mut CodecWriter) {
        w.write_u8(*self);
    }
}

impl Decode for u8 {
    fn decode(r: &mut CodecReader<'_>) -> Result<Self, CodecError> {
        r.read_u8()
    }
}

macro_rules! impl_int {
    ($($t:ty => $write:ident, $read:ident);* $(;)?) => {
        $(
            impl Encode for $t {
                fn size_hint(&self) -> usize {
                    std::mem::size_of::<$t>()
                }

                fn encode(&self, w: &mut CodecWriter) {
                    w.$write(*self);
                }
            }

            impl Decode for $t {
                fn decode(r: &mut CodecReader<'_>) -> Result<Self, CodecError> {
                    r.$read()
                }
            }
        )*
    };
}

impl_int! {
    u16 => write_u16_le, read_u16_le;
    u32 => write_u32_le, read_u32_le;
    u64 => write_u64_le, read_u64_le;
}

impl Encode for bool {
    fn size_hint(&self) -> usize {
        1
    }

    fn encode(&self, w: &mut CodecWriter) {
        w.write_u8(u8::from(*self));
    }
}

impl Decode for bool {
    fn decode(r: &mut CodecReader<'_>) -> Result<Self, CodecError> {
        match r.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            b => Err(CodecError::InvalidValue(format!("bool byte {:#04x}", b))),
        }
    }
}

// --- Byte containers ---

impl<const N: usize> Encode for [u8; N] {
    fn size_hint(&self) -> usize {
        N
    }

    fn encode(&self, w: &mut CodecWriter) {
        w.write_bytes(self);
    }
}

impl<const N: usize> Decode for [u8; N] {
    fn decode(r: &mut CodecReader<'_>) -> Result<Self, CodecError> {
        r.read_array()
    }
}

/// Length-prefixed with a u32, so slices are limited to `u32::MAX` bytes.
impl Encode for [u8] {
    fn size_hint(&self) -> usize {
        4 + self.len()
    }

    fn encode(&self, w: &mut CodecWriter) {
        debug_assert!(
            u32::try_from(self.len()).is_ok(),
            "byte slice of {} bytes overflows the u32 length prefix",
            self.len()
        );
        w.write_u32_le(self.len() as u32);
        w.write_bytes(self);
    }
}

impl Encode for Vec<u8> {
    fn size_hint(&self) -> usize {
        self.as_slice().size_hint()
    }

    fn encode(&self, w: &mut CodecWriter) {
        self.as_slice().encode(w);
    }
}

impl Decode for Vec<u8> {
    fn decode(r: &mut CodecReader<'_>) -> Result<Self, CodecError> {
        let len = r.read_u32_le()? as usize;
        // read_bytes checks the declared length against the budget before
        // anything is allocated.
        Ok(r.read_bytes(len)?.to_vec())
    }
}

impl Encode for String {
    fn size_hint(&self) -> usize {
        self.as_bytes().size_hint()
    }

    fn encode(&self, w: &mut CodecWriter) {
        self.as_bytes().encode(w);
    }
}

impl Decode for String {
    fn decode(r: &mut CodecReader<'_>) -> Result<Self, CodecError> {
        let bytes = Vec::<u8>::decode(r)?;
        String::from_utf8(bytes).map_err(|e| CodecError::InvalidValue(e.to_string()))
    }
}
