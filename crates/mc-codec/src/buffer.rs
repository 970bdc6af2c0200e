//! Cursor reader and growable writer for binary payloads.
//!
//! `CodecReader` tracks both a read position and a byte budget. The budget
//! bounds how much a single decode may consume, which keeps nested,
//! length-prefixed payloads from forcing unbounded allocations.

use crate::codec::MAX_BYTES;
use crate::CodecError;

// ---------------------------------------------------------------------------
// CodecReader
// ---------------------------------------------------------------------------

/// A cursor-based reader over a byte slice with a decode budget.
#[derive(Debug, Clone)]
pub struct CodecReader<'a> {
    data: &'a [u8],
    pos: usize,
    budget: usize,
}

impl<'a> CodecReader<'a> {
    /// Create a reader over `data` with the default `MAX_BYTES` budget.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_budget(data, MAX_BYTES)
    }

    /// Create a reader over `data` that may consume at most `budget` bytes.
    pub fn with_budget(data: &'a [u8], budget: usize) -> Self {
        CodecReader { data, pos: 0, budget }
    }

    /// Read `n` bytes and advance the position.
    ///
    /// The budget is checked before the buffer, so a request that could
    /// never be honored fails the same way whatever the input length.
    ///
    /// # Returns
    /// A byte slice of length `n`, `BudgetExceeded` if `n` is over the
    /// remaining budget, or `BufferTooSmall` if fewer than `n` bytes remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        if n > self.budget {
            return Err(CodecError::BudgetExceeded {
                needed: n,
                remaining: self.budget,
            });
        }
        let available = self.remaining();
        if n > available {
            return Err(CodecError::BufferTooSmall {
                needed: n,
                available,
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        self.budget -= n;
        Ok(slice)
    }

    /// Read exactly `N` bytes into a fixed-size array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    /// Read a little-endian u16.
    pub fn read_u16_le(&mut self) -> Result<u16, CodecError> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian u32.
    pub fn read_u32_le(&mut self) -> Result<u32, CodecError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian u64.
    pub fn read_u64_le(&mut self) -> Result<u64, CodecError> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// Number of unread bytes in the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Bytes this reader may still consume.
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }
}

// ---------------------------------------------------------------------------
// CodecWriter
// ---------------------------------------------------------------------------

/// A growable output buffer for encoded values.
#[derive(Debug, Clone, Default)]
pub struct CodecWriter {
    buf: Vec<u8>,
}

impl CodecWriter {
    /// Create a new empty writer.
    pub fn new() -> Self {
        CodecWriter { buf: Vec::new() }
    }

    /// Create a writer with a pre-allocated capacity.
    ///
    /// Pair with `Encode::size_hint` to encode without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        CodecWriter {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Append raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append a single byte.
    pub fn write_u8(&mut self, val: u8) {
        self.buf.push(val);
    }

    /// Append a little-endian u16.
    pub fn write_u16_le(&mut self, val: u16) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Append a little-endian u32.
    pub fn write_u32_le(&mut self, val: u32) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Append a little-endian u64.
    pub fn write_u64_le(&mut self, val: u64) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Consume the writer and return the accumulated bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// The bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- CodecReader / CodecWriter round-trip --

    #[test]
    fn test_reader_writer_roundtrip() {
        let mut writer = CodecWriter::new();
        writer.write_u8(0x42);
        writer.write_u16_le(0x1234);
        writer.write_u32_le(0xDEADBEEF);
        writer.write_u64_le(0x0102030405060708);
        writer.write_bytes(b"hello");
        assert_eq!(writer.len(), 1 + 2 + 4 + 8 + 5);

        let data = writer.into_bytes();
        let mut reader = CodecReader::new(&data);

        assert_eq!(reader.read_u8().unwrap(), 0x42);
        assert_eq!(reader.read_u16_le().unwrap(), 0x1234);
        assert_eq!(reader.read_u32_le().unwrap(), 0xDEADBEEF);
        assert_eq!(reader.read_u64_le().unwrap(), 0x0102030405060708);
        assert_eq!(reader.read_bytes(5).unwrap(), b"hello");
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.position(), data.len());
    }

    #[test]
    fn test_writer_little_endian_layout() {
        let mut writer = CodecWriter::with_capacity(4);
        writer.write_u32_le(0x12345678);
        assert_eq!(writer.as_bytes(), &[0x78, 0x56, 0x34, 0x12]);
    }

    // -- Failure modes --

    #[test]
    fn test_reader_eof() {
        let mut reader = CodecReader::new(&[0x01]);
        assert!(reader.read_u8().is_ok());
        assert_eq!(
            reader.read_u8(),
            Err(CodecError::BufferTooSmall { needed: 1, available: 0 })
        );
    }

    #[test]
    fn test_reader_empty_input() {
        let mut reader = CodecReader::new(&[]);
        assert_eq!(
            reader.read_array::<20>(),
            Err(CodecError::BufferTooSmall { needed: 20, available: 0 })
        );
    }

    #[test]
    fn test_reader_budget_exhausted() {
        let data = [0u8; 16];
        let mut reader = CodecReader::with_budget(&data, 10);
        assert!(reader.read_bytes(8).is_ok());
        assert_eq!(reader.budget(), 2);
        assert_eq!(
            reader.read_bytes(4),
            Err(CodecError::BudgetExceeded { needed: 4, remaining: 2 })
        );
    }

    #[test]
    fn test_reader_budget_checked_before_buffer() {
        let mut reader = CodecReader::with_budget(&[], 3);
        assert_eq!(
            reader.read_bytes(4),
            Err(CodecError::BudgetExceeded { needed: 4, remaining: 3 })
        );
    }

    #[test]
    fn test_failed_read_does_not_advance() {
        let data = [1u8, 2, 3];
        let mut reader = CodecReader::new(&data);
        assert!(reader.read_bytes(4).is_err());
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_bytes(3).unwrap(), &data);
    }

    #[test]
    fn test_huge_request_does_not_overflow() {
        let data = [0u8; 4];
        let mut reader = CodecReader::with_budget(&data, usize::MAX);
        assert_eq!(
            reader.read_bytes(usize::MAX),
            Err(CodecError::BufferTooSmall { needed: usize::MAX, available: 4 })
        );

        // Mid-buffer, the largest in-budget request still fails cleanly.
        reader.read_u8().unwrap();
        assert_eq!(
            reader.read_bytes(usize::MAX - 1),
            Err(CodecError::BufferTooSmall { needed: usize::MAX - 1, available: 3 })
        );
        assert_eq!(
            reader.read_bytes(usize::MAX),
            Err(CodecError::BudgetExceeded { needed: usize::MAX, remaining: usize::MAX - 1 })
        );
        assert_eq!(reader.position(), 1);
    }
}
