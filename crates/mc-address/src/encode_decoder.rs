//! Chain-agnostic address encoding.
//!
//! Key derivation produces a `RawAddress` (plain bytes); users and RPC
//! payloads carry an `EncodedAddress` (text). The `AddressEncoder` and
//! `AddressDecoder` traits convert between the two so callers can stay
//! generic over the chain.

use serde::{Deserialize, Serialize};

use crate::{AddressError, FixedAddress, HexConfig};

/// Address bytes as produced by key derivation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RawAddress(pub Vec<u8>);

/// Human-readable address text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedAddress(pub String);

impl From<Vec<u8>> for RawAddress {
    fn from(bytes: Vec<u8>) -> Self {
        RawAddress(bytes)
    }
}

impl AsRef<[u8]> for RawAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<String> for EncodedAddress {
    fn from(s: String) -> Self {
        EncodedAddress(s)
    }
}

impl From<&str> for EncodedAddress {
    fn from(s: &str) -> Self {
        EncodedAddress(s.to_string())
    }
}

impl std::fmt::Display for EncodedAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders raw address bytes as text.
pub trait AddressEncoder {
    /// Render `raw` as address text.
    fn encode_address(&self, raw: &RawAddress) -> Result<EncodedAddress, AddressError>;
}

/// Parses address text back to raw bytes.
pub trait AddressDecoder {
    /// Parse address text into raw bytes.
    fn decode_address(&self, addr: &EncodedAddress) -> Result<RawAddress, AddressError>;
}

/// Hex encoder/decoder for N-byte addresses.
///
/// Encoding emits bare lowercase hex. Decoding follows the configured
/// `HexConfig`, `lenient()` by default, since wallets and RPC nodes
/// commonly hand out `0x`-prefixed text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexAddressCodec<const N: usize> {
    config: HexConfig,
}

impl<const N: usize> HexAddressCodec<N> {
    /// Create a codec that decodes under `config`.
    pub fn new(config: HexConfig) -> Self {
        HexAddressCodec { config }
    }

    /// The policy used when decoding.
    pub fn config(&self) -> HexConfig {
        self.config
    }
}

impl<const N: usize> Default for HexAddressCodec<N> {
    fn default() -> Self {
        Self::new(HexConfig::lenient())
    }
}

impl<const N: usize> AddressEncoder for HexAddressCodec<N> {
    /// Fails with `LengthMismatch` unless `raw` is exactly N bytes.
    fn encode_address(&self, raw: &RawAddress) -> Result<EncodedAddress, AddressError> {
        let addr = FixedAddress::<N>::from_slice(&raw.0)?;
        Ok(EncodedAddress(addr.to_hex()))
    }
}

impl<const N: usize> AddressDecoder for HexAddressCodec<N> {
    fn decode_address(&self, addr: &EncodedAddress) -> Result<RawAddress, AddressError> {
        let addr = FixedAddress::<N>::from_hex_with(&addr.0, self.config)?;
        Ok(RawAddress(addr.to_vec()))
    }
}
