//! crates/signature/src/algorithm.rs
//!
//! Keyed-hash algorithm definitions.

use std::fmt;
use std::str::FromStr;

use checksums::strong::{Md5, Sha1, Sha256, Sha384, Sha512, StrongDigest};

use crate::SignatureError;

/// Hash functions that can key an HMAC.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum HmacAlgorithm {
    /// HMAC-SHA-1.
    Sha1,
    /// HMAC-SHA-256, the default.
    #[default]
    Sha256,
    /// HMAC-SHA-384.
    Sha384,
    /// HMAC-SHA-512.
    Sha512,
    /// HMAC-MD5, always computed by the in-tree MD5 engine.
    Md5,
}

/// Every supported algorithm, strongest first.
pub const SUPPORTED_ALGORITHMS: &[HmacAlgorithm; 5] = &[
    HmacAlgorithm::Sha512,
    HmacAlgorithm::Sha384,
    HmacAlgorithm::Sha256,
    HmacAlgorithm::Sha1,
    HmacAlgorithm::Md5,
];

impl HmacAlgorithm {
    /// Returns the canonical display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Md5 => "MD5",
        }
    }

    /// Returns the MAC length in bytes.
    #[inline]
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => Sha1::DIGEST_LEN,
            Self::Sha256 => Sha256::DIGEST_LEN,
            Self::Sha384 => Sha384::DIGEST_LEN,
            Self::Sha512 => Sha512::DIGEST_LEN,
            Self::Md5 => Md5::DIGEST_LEN,
        }
    }

    /// Returns the block length used to pad the HMAC key.
    #[inline]
    #[must_use]
    pub const fn block_len(self) -> usize {
        match self {
            Self::Sha1 => Sha1::BLOCK_LEN,
            Self::Sha256 => Sha256::BLOCK_LEN,
            Self::Sha384 => Sha384::BLOCK_LEN,
            Self::Sha512 => Sha512::BLOCK_LEN,
            Self::Md5 => Md5::BLOCK_LEN,
        }
    }
}

impl fmt::Display for HmacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HmacAlgorithm {
    type Err = SignatureError;

    /// Parses `sha256`, `SHA-256`, `Sha_256` and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '-' | '_'))
            .map(|ch| ch.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            "md5" => Ok(Self::Md5),
            _ => Err(SignatureError::UnknownAlgorithm(s.to_owned())),
        }
    }
}
