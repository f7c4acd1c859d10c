//! Error taxonomy for signing and verification.

use thiserror::Error;

use crate::{HmacAlgorithm, OutputEncoding};

/// Failures surfaced while preparing, computing or checking a signature.
///
/// The digest engines themselves are total; every variant describes an input
/// that the caller must correct.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SignatureError {
    /// The secret key is empty.
    #[error("secret key must not be empty")]
    EmptyKey,
    /// The algorithm name is not recognised.
    #[error("unknown HMAC algorithm '{0}' (expected SHA-1, SHA-256, SHA-384, SHA-512 or MD5)")]
    UnknownAlgorithm(String),
    /// The output encoding name is not recognised.
    #[error("unknown output encoding '{0}' (expected hex or base64)")]
    UnknownEncoding(String),
    /// The requested algorithm needs a backend that is not compiled in.
    #[error(
        "HMAC-{algorithm} is unavailable in this build; rebuild with the `rustcrypto` feature or allow the MD5 fallback"
    )]
    BackendUnavailable {
        /// Algorithm that was requested.
        algorithm: HmacAlgorithm,
    },
    /// The backend refused the key.
    #[error("HMAC backend rejected the key: {0}")]
    KeyRejected(String),
    /// A signature supplied for verification could not be decoded.
    #[error("signature is not valid {encoding}: {reason}")]
    InvalidEncodedSignature {
        /// Encoding the signature was expected to use.
        encoding: OutputEncoding,
        /// Decoder diagnostic.
        reason: String,
    },
}
