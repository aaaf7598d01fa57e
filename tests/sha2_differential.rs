use proptest::prelude::*;
use sha256::sha256::{BLOCK_LEN, Sha256, block_count, digest, pad_message};

fn sha2_ref(data: &[u8]) -> [u8; 32] {
    use sha2::Digest as _;
    let out = sha2::Sha256::digest(data);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&out);
    bytes
}

proptest! {
    #[test]
    fn sha256_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
        prop_assert_eq!(digest(&data).into_bytes(), sha2_ref(&data));
    }

    #[test]
    fn sha256_is_deterministic(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
        prop_assert_eq!(digest(&data), digest(&data));
    }

    #[test]
    fn engine_reuse_matches_fresh_engine(
        first in proptest::collection::vec(any::<u8>(), 0..512),
        second in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        let mut engine = Sha256::new();
        let _ = engine.hash(&first);
        prop_assert_eq!(engine.hash(&second).into_bytes(), sha2_ref(&second));
    }

    #[test]
    fn padding_is_block_aligned(len in 0usize..2048) {
        let padded = pad_message(&vec![0x5Au8; len]);
        prop_assert_eq!(padded.len() % BLOCK_LEN, 0);
        prop_assert_eq!(padded.len() as u64 / BLOCK_LEN as u64, block_count(len as u64));
        prop_assert!(padded.len() >= len + 9);
        prop_assert!(padded.len() < len + 9 + BLOCK_LEN);
    }
}
