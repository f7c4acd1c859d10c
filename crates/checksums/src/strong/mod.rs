//! Strong (cryptographic) digests.
//!
//! Every digest exposes the same streaming surface through [`StrongDigest`], which
//! lets keyed constructions such as HMAC be written once and instantiated for any
//! algorithm. [`Md5`] is implemented in this crate; the SHA family wraps the
//! RustCrypto implementations.

mod md5;
mod sha;

pub use md5::{Md5, padding};
pub use sha::{Sha1, Sha256, Sha384, Sha512};

/// Streaming interface shared by all strong digests.
///
/// Implementors must produce the same output for any partitioning of the input
/// across [`update`](Self::update) calls.
pub trait StrongDigest: Sized {
    /// Fixed-size digest output.
    type Digest: AsRef<[u8]> + Copy + Eq + std::fmt::Debug;

    /// Length of [`Self::Digest`] in bytes.
    const DIGEST_LEN: usize;

    /// Internal block size in bytes. HMAC pads keys to this length.
    const BLOCK_LEN: usize;

    /// Creates a hasher with an empty state.
    fn new() -> Self;

    /// Feeds additional bytes into the digest state.
    fn update(&mut self, data: &[u8]);

    /// Consumes the hasher and returns the digest.
    fn finalize(self) -> Self::Digest;

    /// Computes the digest of `data` in one shot.
    fn digest(data: &[u8]) -> Self::Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}
