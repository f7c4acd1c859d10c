//! Backend selection for HMAC computation.
//!
//! The SHA family is signed through the RustCrypto `hmac` crate when the
//! `rustcrypto` feature is compiled in. HMAC-MD5 always runs through
//! [`hmac_md5`](crate::hmac::hmac_md5), the RFC 2104 construction over the
//! in-tree MD5 engine. When the primary backend is absent a SHA request either
//! fails or, if the caller opted in, is downgraded to HMAC-MD5.

use std::fmt;

use crate::hmac::hmac_md5;
use crate::{HmacAlgorithm, SignatureError};

/// Implementation that produced (or will produce) a MAC.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SigningBackend {
    /// RustCrypto `hmac` with the `sha1`/`sha2` digests.
    #[cfg(feature = "rustcrypto")]
    RustCrypto,
    /// RFC 2104 over the in-tree MD5 engine.
    Md5Fallback,
}

impl SigningBackend {
    /// Reports whether the primary backend is compiled into this build.
    #[must_use]
    pub const fn primary_available() -> bool {
        cfg!(feature = "rustcrypto")
    }

    /// Chooses the backend for `algorithm`.
    ///
    /// MD5 always selects [`SigningBackend::Md5Fallback`]. SHA algorithms need
    /// the primary backend; without it the call fails unless
    /// `allow_md5_fallback` is set.
    pub fn select(
        algorithm: HmacAlgorithm,
        allow_md5_fallback: bool,
    ) -> Result<Self, SignatureError> {
        if algorithm == HmacAlgorithm::Md5 {
            return Ok(Self::Md5Fallback);
        }
        Self::select_for_sha(algorithm, allow_md5_fallback)
    }

    #[cfg(feature = "rustcrypto")]
    #[allow(clippy::unnecessary_wraps)]
    fn select_for_sha(
        _algorithm: HmacAlgorithm,
        _allow_md5_fallback: bool,
    ) -> Result<Self, SignatureError> {
        Ok(Self::RustCrypto)
    }

    #[cfg(not(feature = "rustcrypto"))]
    fn select_for_sha(
        algorithm: HmacAlgorithm,
        allow_md5_fallback: bool,
    ) -> Result<Self, SignatureError> {
        if !allow_md5_fallback {
            return Err(SignatureError::BackendUnavailable { algorithm });
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(
            target: "signature::backend",
            requested = %algorithm,
            "primary HMAC backend unavailable, downgrading to HMAC-MD5"
        );
        Ok(Self::Md5Fallback)
    }

    /// Returns the algorithm this backend actually computes for a request.
    #[must_use]
    #[cfg_attr(not(feature = "rustcrypto"), allow(unused_variables))]
    pub const fn effective_algorithm(self, requested: HmacAlgorithm) -> HmacAlgorithm {
        match self {
            #[cfg(feature = "rustcrypto")]
            Self::RustCrypto => requested,
            Self::Md5Fallback => HmacAlgorithm::Md5,
        }
    }

    /// Computes the raw MAC bytes.
    pub(crate) fn compute(
        self,
        algorithm: HmacAlgorithm,
        key: &[u8],
        message: &[u8],
    ) -> Result<Vec<u8>, SignatureError> {
        match self {
            #[cfg(feature = "rustcrypto")]
            Self::RustCrypto => rustcrypto::compute(algorithm, key, message),
            Self::Md5Fallback => {
                debug_assert_eq!(algorithm, HmacAlgorithm::Md5);
                Ok(hmac_md5(key, message).to_vec())
            }
        }
    }

    /// Short label used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            #[cfg(feature = "rustcrypto")]
            Self::RustCrypto => "rustcrypto",
            Self::Md5Fallback => "md5-fallback",
        }
    }
}

impl fmt::Display for SigningBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "rustcrypto")]
mod rustcrypto {
    use hmac::digest::KeyInit;
    use hmac::{Hmac, Mac};

    use crate::{HmacAlgorithm, SignatureError};

    fn mac_bytes<M>(key: &[u8], message: &[u8]) -> Result<Vec<u8>, SignatureError>
    where
        M: Mac + KeyInit,
    {
        let mut mac = <M as Mac>::new_from_slice(key)
            .map_err(|error| SignatureError::KeyRejected(error.to_string()))?;
        mac.update(message);
        Ok(mac.finalize().into_bytes().to_vec())
    }

    pub(super) fn compute(
        algorithm: HmacAlgorithm,
        key: &[u8],
        message: &[u8],
    ) -> Result<Vec<u8>, SignatureError> {
        match algorithm {
            HmacAlgorithm::Sha1 => mac_bytes::<Hmac<sha1::Sha1>>(key, message),
            HmacAlgorithm::Sha256 => mac_bytes::<Hmac<sha2::Sha256>>(key, message),
            HmacAlgorithm::Sha384 => mac_bytes::<Hmac<sha2::Sha384>>(key, message),
            HmacAlgorithm::Sha512 => mac_bytes::<Hmac<sha2::Sha512>>(key, message),
            HmacAlgorithm::Md5 => mac_bytes::<Hmac<md5::Md5>>(key, message),
        }
    }
}
