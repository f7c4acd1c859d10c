//! Property tests for the MD5 engine.

use checksums::strong::{Md5, padding};
use proptest::prelude::*;

fn reference_digest(data: &[u8]) -> [u8; 16] {
    use md5::Digest as _;
    md5::Md5::digest(data).into()
}

/// Arbitrary input together with a list of split points.
fn data_and_splits() -> impl Strategy<Value = (Vec<u8>, Vec<usize>)> {
    prop::collection::vec(any::<u8>(), 0..=1024).prop_flat_map(|data| {
        let len = data.len();
        (Just(data), prop::collection::vec(0..=len, 0..8))
    })
}

proptest! {
    #[test]
    fn matches_reference_implementation(data in prop::collection::vec(any::<u8>(), 0..=2048)) {
        prop_assert_eq!(Md5::digest(&data), reference_digest(&data));
    }

    #[test]
    fn streaming_is_split_invariant((data, mut splits) in data_and_splits()) {
        splits.sort_unstable();

        let mut hasher = Md5::new();
        let mut start = 0;
        for split in splits {
            hasher.update(&data[start..split]);
            start = split;
        }
        hasher.update(&data[start..]);

        prop_assert_eq!(hasher.finalize(), Md5::digest(&data));
    }

    #[test]
    fn padded_buffer_is_well_formed(len in 0_usize..=512) {
        let data = vec![0xa5_u8; len];
        let padded = padding::pad_message(&data, len as u64);

        prop_assert_eq!(padded.len() % padding::BLOCK_LEN, 0);
        prop_assert_eq!(padded.len(), len + 1 + padding::padding_len(len) + padding::LENGTH_FIELD_LEN);
        prop_assert_eq!((len + 1 + padding::padding_len(len)) % 64, 56);
        prop_assert!(padding::padding_len(len) < 64);
        prop_assert_eq!(padded[len], padding::PADDING_MARKER);
    }

    #[test]
    fn single_bit_flip_changes_digest(
        data in prop::collection::vec(any::<u8>(), 1..=256),
        position in any::<prop::sample::Index>(),
        bit in 0_u8..8,
    ) {
        let index = position.index(data.len());
        let mut flipped = data.clone();
        flipped[index] ^= 1 << bit;
        prop_assert_ne!(Md5::digest(&flipped), Md5::digest(&data));
    }
}
