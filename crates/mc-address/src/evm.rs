//! Account-style addresses for EVM chains (Ethereum, Arbitrum and kin).
//!
//! These are the trailing 20 bytes of the Keccak-256 hash of a public key;
//! deriving them is up to the caller. EIP-55 checksum casing is not
//! enforced: text decodes under the same `HexConfig` rules as any other
//! `FixedAddress`.

use crate::{FixedAddress, HexAddressCodec};

/// Width of an EVM account address in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// A 20-byte EVM account or contract address.
pub type Address = FixedAddress<ADDRESS_LENGTH>;

/// Hex encoder/decoder for EVM addresses.
pub type AddressCodec = HexAddressCodec<ADDRESS_LENGTH>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AddressDecoder, EncodedAddress};
    use mc_codec::{from_binary, to_binary, Encode};

    #[test]
    fn test_trailing_one() {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[19] = 1;
        let addr = Address::new(bytes);

        assert_eq!(addr.size_hint(), ADDRESS_LENGTH);
        let wire = to_binary(&addr);
        assert_eq!(wire, bytes.to_vec());
        assert_eq!(from_binary::<Address>(&wire).unwrap(), addr);

        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0000000000000000000000000000000000000001\"");
        assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), addr);
    }

    #[test]
    fn test_checksummed_text_decodes() {
        // EIP-55 mixed case is accepted as plain hex.
        let text = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
        let raw = AddressCodec::default()
            .decode_address(&EncodedAddress::from(text))
            .unwrap();
        let addr = Address::from_slice(&raw.0).unwrap();
        assert_eq!(addr.to_hex(), text[2..].to_lowercase());
    }
}
