//! Message padding for the MD5 engine.
//!
//! A message is extended with a single `0x80` byte, the minimum number of zero
//! bytes that leaves the length congruent to 56 modulo 64, and finally the
//! message length in bits as a 64-bit little-endian integer. The resulting
//! buffer is always a whole number of [`BLOCK_LEN`] chunks.

/// Size of one MD5 chunk in bytes.
pub const BLOCK_LEN: usize = 64;

/// Size of the trailing bit-length field in bytes.
pub const LENGTH_FIELD_LEN: usize = 8;

/// Marker byte appended immediately after the message.
pub const PADDING_MARKER: u8 = 0x80;

/// Offset within a chunk at which the length field begins.
const LENGTH_OFFSET: usize = BLOCK_LEN - LENGTH_FIELD_LEN;

/// Returns the number of zero bytes inserted between the marker and the length field.
///
/// This is the smallest value `p` such that `(len + 1 + p) % 64 == 56`.
#[must_use]
pub const fn padding_len(len: usize) -> usize {
    (BLOCK_LEN + LENGTH_OFFSET - 1 - len % BLOCK_LEN) % BLOCK_LEN
}

/// Returns the total length of the padded buffer for a message of `len` bytes.
#[must_use]
pub const fn padded_len(len: usize) -> usize {
    len + 1 + padding_len(len) + LENGTH_FIELD_LEN
}

/// Encodes the length field for a message of `declared_len` bytes.
///
/// The bit length is computed modulo 2^64. The low word holds the bit length
/// modulo 2^32 and the high word holds `floor(bit_len / 2^32)`, both little-endian.
#[must_use]
pub const fn length_field(declared_len: u64) -> [u8; LENGTH_FIELD_LEN] {
    declared_len.wrapping_mul(8).to_le_bytes()
}

/// Builds the padded buffer for `data`, recording `declared_len` bytes in the length field.
///
/// Passing `data.len() as u64` yields the standard MD5 padding. Any other value
/// overrides the recorded length, which lets tests reach the high word of the
/// length field without materialising multi-gigabyte inputs.
#[must_use]
pub fn pad_message(data: &[u8], declared_len: u64) -> Vec<u8> {
    let mut padded = Vec::with_capacity(padded_len(data.len()));
    padded.extend_from_slice(data);
    padded.push(PADDING_MARKER);
    padded.resize(padded.len() + padding_len(data.len()), 0);
    padded.extend_from_slice(&length_field(declared_len));

    debug_assert_eq!(padded.len() % BLOCK_LEN, 0);
    padded
}

/// Writes the padding for a trailing partial chunk into `tail`.
///
/// `tail[..buffered]` must already hold the unprocessed message bytes. Returns
/// the number of bytes of `tail` that form the final one or two chunks.
pub(super) fn pad_tail(tail: &mut [u8; 2 * BLOCK_LEN], buffered: usize, declared_len: u64) -> usize {
    debug_assert!(buffered < BLOCK_LEN);

    let end = buffered + 1 + padding_len(buffered);
    tail[buffered] = PADDING_MARKER;
    tail[buffered + 1..end].fill(0);
    tail[end..end + LENGTH_FIELD_LEN].copy_from_slice(&length_field(declared_len));
    end + LENGTH_FIELD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_padding_shape(len: usize) {
        let data = vec![0x61_u8; len];
        let padded = pad_message(&data, len as u64);

        assert_eq!(padded.len() % BLOCK_LEN, 0, "length {len}");
        assert_eq!(padded.len(), padded_len(len));
        assert_eq!(&padded[..len], data.as_slice());
        assert_eq!(padded[len], PADDING_MARKER);

        let zeros_end = padded.len() - LENGTH_FIELD_LEN;
        assert!(padded[len + 1..zeros_end].iter().all(|&byte| byte == 0));
        assert_eq!(zeros_end - (len + 1), padding_len(len));
        assert_eq!(
            u64::from_le_bytes(padded[zeros_end..].try_into().unwrap()),
            len as u64 * 8
        );
    }

    #[test]
    fn boundary_lengths_pad_to_whole_chunks() {
        for len in [55, 56, 63] {
            assert_padding_shape(len);
        }
    }

    #[test]
    fn every_residue_pads_correctly() {
        for len in 0..=3 * BLOCK_LEN {
            assert_padding_shape(len);
        }
    }

    #[test]
    fn padding_len_examples() {
        assert_eq!(padding_len(0), 55);
        assert_eq!(padding_len(55), 0);
        assert_eq!(padding_len(56), 63);
        assert_eq!(padding_len(63), 56);
        assert_eq!(padding_len(64), 55);
    }

    #[test]
    fn fifty_five_bytes_fit_in_one_chunk() {
        assert_eq!(padded_len(55), 64);
        assert_eq!(padded_len(56), 128);
        assert_eq!(padded_len(63), 128);
        assert_eq!(padded_len(64), 128);
    }

    #[test]
    fn length_field_splits_high_word() {
        // 2^29 bytes is exactly 2^32 bits: low word zero, high word one.
        let field = length_field(1 << 29);
        assert_eq!(&field[..4], &[0, 0, 0, 0]);
        assert_eq!(&field[4..], &1_u32.to_le_bytes());

        let field = length_field(0x1_2345_6789);
        let bits = 0x1_2345_6789_u64 * 8;
        assert_eq!(&field[..4], &(bits as u32).to_le_bytes());
        assert_eq!(&field[4..], &((bits / (1 << 32)) as u32).to_le_bytes());
    }

    #[test]
    fn length_field_wraps_beyond_sixty_four_bits() {
        assert_eq!(length_field(1 << 61), [0; LENGTH_FIELD_LEN]);
    }

    #[test]
    fn declared_length_overrides_field_only() {
        let padded = pad_message(b"abc", 1 << 32);
        assert_eq!(padded.len(), 64);
        assert_eq!(&padded[56..], &length_field(1 << 32));
        assert_eq!(&padded[..4], &[b'a', b'b', b'c', PADDING_MARKER]);
    }

    #[test]
    fn pad_tail_matches_pad_message() {
        for buffered in 0..BLOCK_LEN {
            let data: Vec<u8> = (0..buffered as u8).collect();
            let mut tail = [0xff_u8; 2 * BLOCK_LEN];
            tail[..buffered].copy_from_slice(&data);
            let end = pad_tail(&mut tail, buffered, buffered as u64);
            assert_eq!(&tail[..end], pad_message(&data, buffered as u64).as_slice());
        }
    }
}
