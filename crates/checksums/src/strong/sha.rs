use digest::Digest;
use std::fmt;

use super::StrongDigest;

macro_rules! sha_wrapper {
    ($(#[$meta:meta])* $name:ident, $inner:ty, $digest_len:expr, $block_len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Default)]
        pub struct $name {
            inner: $inner,
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name)).finish_non_exhaustive()
            }
        }

        impl $name {
            /// Creates a hasher with an empty state.
            #[must_use]
            pub fn new() -> Self {
                Self {
                    inner: <$inner>::new(),
                }
            }

            /// Feeds additional bytes into the digest state.
            pub fn update(&mut self, data: &[u8]) {
                Digest::update(&mut self.inner, data);
            }

            /// Finalises the digest.
            #[must_use]
            pub fn finalize(self) -> [u8; $digest_len] {
                let mut output = [0_u8; $digest_len];
                output.copy_from_slice(&self.inner.finalize());
                output
            }

            /// Convenience helper that computes the digest for `data` in one shot.
            #[must_use]
            pub fn digest(data: &[u8]) -> [u8; $digest_len] {
                <Self as StrongDigest>::digest(data)
            }
        }

        impl StrongDigest for $name {
            type Digest = [u8; $digest_len];
            const DIGEST_LEN: usize = $digest_len;
            const BLOCK_LEN: usize = $block_len;

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
    };
}

sha_wrapper!(
    /// Streaming SHA-1 hasher backed by the RustCrypto `sha1` crate.
    Sha1,
    sha1::Sha1,
    20,
    64
);

sha_wrapper!(
    /// Streaming SHA-256 hasher backed by the RustCrypto `sha2` crate.
    Sha256,
    sha2::Sha256,
    32,
    64
);

sha_wrapper!(
    /// Streaming SHA-384 hasher backed by the RustCrypto `sha2` crate.
    Sha384,
    sha2::Sha384,
    48,
    128
);

sha_wrapper!(
    /// Streaming SHA-512 hasher backed by the RustCrypto `sha2` crate.
    Sha512,
    sha2::Sha512,
    64,
    128
);
