//! Fixed-width address type.
//!
//! Provides `FixedAddress<N>` — N opaque bytes identifying an account or
//! contract. The binary form is the N bytes unchanged with no length prefix
//! or tag; the JSON form is a string of 2N lowercase hex characters.
//!
//! Every decoder here is total: empty, short, exact and oversized inputs
//! each map to a value or an `AddressError`, never a panic.

use std::fmt;
use std::str::FromStr;

use mc_codec::{CodecError, CodecReader, CodecWriter, Decode, Encode};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{AddressError, HexConfig};

/// An immutable N-byte address.
///
/// Equality, ordering and hashing compare the raw bytes. No byte position
/// carries meaning at this level; checksums and casing rules belong to the
/// chain built on top.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedAddress<const N: usize>([u8; N]);

impl<const N: usize> FixedAddress<N> {
    /// Width of the address in bytes.
    pub const SIZE: usize = N;

    /// Wrap raw bytes, e.g. the tail of a public key hash.
    pub const fn new(bytes: [u8; N]) -> Self {
        FixedAddress(bytes)
    }

    /// The all-zero address.
    pub const fn zero() -> Self {
        FixedAddress([0u8; N])
    }

    /// Create an address from a byte slice.
    ///
    /// # Arguments
    /// * `bytes` - A slice that must be exactly N bytes.
    ///
    /// # Returns
    /// The address, or `LengthMismatch` for any other length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        let arr: [u8; N] = bytes.try_into().map_err(|_| AddressError::LengthMismatch {
            expected: N,
            got: bytes.len(),
        })?;
        Ok(FixedAddress(arr))
    }

    /// Parse bare hex under `HexConfig::standard()`.
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        Self::from_hex_with(s, HexConfig::standard())
    }

    /// Parse hex text under the given policy.
    ///
    /// Hex validity is judged before length: odd-length or non-hex input
    /// is `InvalidEncoding`, and well-formed hex of any width other than N
    /// bytes is `LengthMismatch`. No truncation, no padding.
    pub fn from_hex_with(s: &str, config: HexConfig) -> Result<Self, AddressError> {
        let digits = config.normalize(s).map_err(AddressError::InvalidEncoding)?;
        let decoded = hex::decode(digits)?;
        Self::from_slice(&decoded)
    }

    /// Decode a JSON document holding a single hex string.
    ///
    /// Malformed syntax and non-UTF8 bytes surface as `Json`; any non-string
    /// value as `TypeMismatch`.
    pub fn from_json(data: &[u8]) -> Result<Self, AddressError> {
        Self::from_json_with(data, HexConfig::standard())
    }

    /// Decode a JSON document, parsing the string under `config`.
    pub fn from_json_with(data: &[u8], config: HexConfig) -> Result<Self, AddressError> {
        let value: Value = serde_json::from_slice(data)?;
        Self::from_json_value_with(&value, config)
    }

    /// Decode an already-parsed JSON value.
    pub fn from_json_value(value: &Value) -> Result<Self, AddressError> {
        Self::from_json_value_with(value, HexConfig::standard())
    }

    /// Decode an already-parsed JSON value under `config`.
    pub fn from_json_value_with(value: &Value, config: HexConfig) -> Result<Self, AddressError> {
        match value {
            Value::String(s) => Self::from_hex_with(s, config),
            other => Err(AddressError::TypeMismatch(json_kind(other).to_string())),
        }
    }

    /// The JSON form: a quoted lowercase hex string.
    pub fn to_json(&self) -> String {
        // Hex digits never need escaping.
        format!("\"{}\"", self.to_hex())
    }

    /// Lowercase hex, exactly 2N characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Lowercase hex with a `0x` prefix.
    pub fn to_hex_prefixed(&self) -> String {
        format!("0x{}", self.to_hex())
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Copy out the raw bytes.
    pub fn to_bytes(&self) -> [u8; N] {
        self.0
    }

    /// Copy the raw bytes into a new `Vec<u8>`.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// `true` if every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<const N: usize> Default for FixedAddress<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> From<[u8; N]> for FixedAddress<N> {
    fn from(bytes: [u8; N]) -> Self {
        FixedAddress(bytes)
    }
}

impl<const N: usize> From<FixedAddress<N>> for [u8; N] {
    fn from(addr: FixedAddress<N>) -> Self {
        addr.0
    }
}

impl<const N: usize> TryFrom<&[u8]> for FixedAddress<N> {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl<const N: usize> AsRef<[u8]> for FixedAddress<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> fmt::Display for FixedAddress<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<const N: usize> fmt::LowerHex for FixedAddress<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&self.to_hex())
    }
}

impl<const N: usize> fmt::Debug for FixedAddress<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedAddress({})", self.to_hex_prefixed())
    }
}

impl<const N: usize> FromStr for FixedAddress<N> {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// --- Binary ---

impl<const N: usize> Encode for FixedAddress<N> {
    fn size_hint(&self) -> usize {
        N
    }

    fn encode(&self, w: &mut CodecWriter) {
        w.write_bytes(&self.0);
    }
}

impl<const N: usize> Decode for FixedAddress<N> {
    fn decode(r: &mut CodecReader<'_>) -> Result<Self, CodecError> {
        Ok(FixedAddress(r.read_array()?))
    }
}

// --- JSON ---

/// Serialize as a lowercase hex string.
impl<const N: usize> Serialize for FixedAddress<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

struct HexVisitor<const N: usize>;

impl<'de, const N: usize> Visitor<'de> for HexVisitor<N> {
    type Value = FixedAddress<N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a hex string of {} characters", N * 2)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        FixedAddress::from_hex(v).map_err(E::custom)
    }
}

/// Deserialize from a hex string; any other type is rejected.
impl<'de, const N: usize> Deserialize<'de> for FixedAddress<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(HexVisitor::<N>)
    }
}
