use std::fmt;

use super::StrongDigest;

mod compress;
pub mod padding;

use compress::{INITIAL_STATE, compress, state_to_digest};
use padding::{BLOCK_LEN, pad_tail};

/// Streaming MD5 hasher (RFC 1321).
///
/// The hasher buffers at most one partial chunk between [`update`](Self::update)
/// calls, so the output is the same regardless of how the input is split. It
/// holds no shared state and is cheap to clone.
///
/// # Examples
///
/// ```
/// use checksums::strong::Md5;
///
/// let mut hasher = Md5::new();
/// hasher.update(b"message ");
/// hasher.update(b"digest");
/// assert_eq!(hasher.finalize(), Md5::digest(b"message digest"));
/// ```
#[derive(Clone)]
pub struct Md5 {
    state: [u32; 4],
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
    /// Total bytes consumed, modulo 2^64.
    length: u64,
}

impl fmt::Debug for Md5 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Md5")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5 {
    /// Creates a hasher with an empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0; BLOCK_LEN],
            buffered: 0,
            length: 0,
        }
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, data: &[u8]) {
        self.length = self.length.wrapping_add(data.len() as u64);

        let mut input = data;
        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(input.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&input[..take]);
            self.buffered += take;
            input = &input[take..];

            if self.buffered < BLOCK_LEN {
                return;
            }
            compress(&mut self.state, &self.buffer);
            self.buffered = 0;
        }

        let (blocks, rest) = input.as_chunks::<BLOCK_LEN>();
        for block in blocks {
            compress(&mut self.state, block);
        }

        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Finalises the digest and returns the 128-bit MD5 output.
    #[must_use]
    pub fn finalize(self) -> [u8; 16] {
        let length = self.length;
        self.finish(length)
    }

    /// Finalises the digest, recording `declared_len` bytes in the length field.
    ///
    /// The bytes already fed to the hasher are padded as usual; only the
    /// trailing length field differs from [`finalize`](Self::finalize).
    #[must_use]
    pub fn finalize_with_length(self, declared_len: u64) -> [u8; 16] {
        self.finish(declared_len)
    }

    fn finish(mut self, declared_len: u64) -> [u8; 16] {
        let mut tail = [0_u8; 2 * BLOCK_LEN];
        tail[..self.buffered].copy_from_slice(&self.buffer[..self.buffered]);
        let end = pad_tail(&mut tail, self.buffered, declared_len);

        let (blocks, _) = tail[..end].as_chunks::<BLOCK_LEN>();
        for block in blocks {
            compress(&mut self.state, block);
        }

        state_to_digest(&self.state)
    }

    /// Convenience helper that computes the MD5 digest for `data` in one shot.
    #[must_use]
    pub fn digest(data: &[u8]) -> [u8; 16] {
        <Self as StrongDigest>::digest(data)
    }

    /// Computes the digest of `data` as if the message were `declared_len` bytes long.
    ///
    /// Only the padding length field is affected. With `declared_len ==
    /// data.len()` this is identical to [`digest`](Self::digest).
    #[must_use]
    pub fn digest_with_length(data: &[u8], declared_len: u64) -> [u8; 16] {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize_with_length(declared_len)
    }
}

impl StrongDigest for Md5 {
    type Digest = [u8; 16];
    const DIGEST_LEN: usize = 16;
    const BLOCK_LEN: usize = BLOCK_LEN;

    fn new() -> Self {
        Self::new()
    }

    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }

    fn finalize(self) -> Self::Digest {
        self.finalize()
    }
}
