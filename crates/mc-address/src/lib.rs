/// Multichain SDK - Account and contract addresses.
///
/// Provides `FixedAddress<N>`, an immutable N-byte identifier with two
/// interchange forms: the raw N bytes on the wire (via `mc_codec`) and a
/// lowercase hex string in JSON. Also provides the `HexConfig` parsing
/// policy, a chain-agnostic address encoder/decoder pair, and the
/// 20-byte account address used by EVM chains.

pub mod address;
pub mod config;
pub mod encode_decoder;
pub mod evm;

mod error;
pub use error::AddressError;
pub use address::FixedAddress;
pub use config::HexConfig;
pub use encode_decoder::{AddressDecoder, AddressEncoder, EncodedAddress, HexAddressCodec, RawAddress};
