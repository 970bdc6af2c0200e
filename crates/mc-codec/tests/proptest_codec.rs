use proptest::prelude::*;

use mc_codec::{from_binary, to_binary, CodecError, CodecReader, Decode, Encode};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn u64_roundtrip(val in any::<u64>()) {
        let bytes = to_binary(&val);
        prop_assert_eq!(bytes.len(), val.size_hint());
        prop_assert_eq!(from_binary::<u64>(&bytes).unwrap(), val);
    }

    #[test]
    fn byte_vec_roundtrip(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let bytes = data.to_binary();
        prop_assert_eq!(bytes.len(), data.size_hint());
        prop_assert_eq!(from_binary::<Vec<u8>>(&bytes).unwrap(), data);
    }

    #[test]
    fn arbitrary_bytes_never_panic(
        data in prop::collection::vec(any::<u8>(), 0..256),
        budget in 0usize..512,
    ) {
        let mut r = CodecReader::with_budget(&data, budget);
        let _ = Vec::<u8>::decode(&mut r);
        let mut r = CodecReader::with_budget(&data, budget);
        let _ = String::decode(&mut r);
        let mut r = CodecReader::with_budget(&data, budget);
        let _ = <[u8; 32]>::decode(&mut r);
    }

    #[test]
    fn budget_bounds_consumption(
        data in prop::collection::vec(any::<u8>(), 0..128),
        budget in 0usize..64,
        n in 0usize..128,
    ) {
        let mut r = CodecReader::with_budget(&data, budget);
        match r.read_bytes(n) {
            Ok(bytes) => {
                prop_assert_eq!(bytes.len(), n);
                prop_assert!(n <= budget);
                prop_assert_eq!(r.budget(), budget - n);
            }
            Err(CodecError::BudgetExceeded { needed, remaining }) => {
                prop_assert_eq!(needed, n);
                prop_assert_eq!(remaining, budget);
            }
            Err(CodecError::BufferTooSmall { needed, available }) => {
                prop_assert_eq!(needed, n);
                prop_assert_eq!(available, data.len());
            }
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }
}
