//! RFC 2104 keyed-hash construction.
//!
//! HMAC(K, m) = H((K' ^ opad) || H((K' ^ ipad) || m)) where K' is the key
//! zero-padded to the hash block length, or the hash of the key when the key
//! is longer than one block.

use std::fmt;

use checksums::strong::{Md5, StrongDigest};
use zeroize::Zeroizing;

/// Inner padding byte.
const IPAD: u8 = 0x36;
/// Outer padding byte.
const OPAD: u8 = 0x5c;

/// Streaming HMAC over any [`StrongDigest`].
///
/// Key material derived from the secret is wiped when the value is dropped.
#[derive(Clone)]
pub struct Hmac<D: StrongDigest> {
    inner: D,
    outer_pad: Zeroizing<Vec<u8>>,
}

impl<D: StrongDigest> fmt::Debug for Hmac<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hmac")
            .field("block_len", &D::BLOCK_LEN)
            .finish_non_exhaustive()
    }
}

impl<D: StrongDigest> Hmac<D> {
    /// Keys a new MAC. Any key length is accepted, including empty.
    #[must_use]
    pub fn new(key: &[u8]) -> Self {
        let mut block = Zeroizing::new(vec![0_u8; D::BLOCK_LEN]);
        if key.len() > D::BLOCK_LEN {
            let hashed = D::digest(key);
            block[..D::DIGEST_LEN].copy_from_slice(hashed.as_ref());
        } else {
            block[..key.len()].copy_from_slice(key);
        }

        let inner_pad = Zeroizing::new(xor_pad(&block, IPAD));
        let mut inner = D::new();
        inner.update(&inner_pad);

        Self {
            inner,
            outer_pad: Zeroizing::new(xor_pad(&block, OPAD)),
        }
    }

    /// Feeds message bytes into the MAC.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Consumes the MAC and returns the authentication tag.
    #[must_use]
    pub fn finalize(self) -> D::Digest {
        let inner_digest = self.inner.finalize();
        let mut outer = D::new();
        outer.update(&self.outer_pad);
        outer.update(inner_digest.as_ref());
        outer.finalize()
    }

    /// Computes the MAC of `message` under `key` in one shot.
    #[must_use]
    pub fn mac(key: &[u8], message: &[u8]) -> D::Digest {
        let mut mac = Self::new(key);
        mac.update(message);
        mac.finalize()
    }
}

fn xor_pad(block: &[u8], pad: u8) -> Vec<u8> {
    block.iter().map(|byte| byte ^ pad).collect()
}

/// HMAC-MD5 over the in-tree MD5 engine.
#[must_use]
pub fn hmac_md5(key: &[u8], message: &[u8]) -> [u8; 16] {
    Hmac::<Md5>::mac(key, message)
}
