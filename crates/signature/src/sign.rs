//! Signing and verification entry points.

use crate::{HmacAlgorithm, OutputEncoding, SignatureError, SigningBackend};

/// Inputs for a single signing or verification call.
#[derive(Clone, Copy, Debug)]
pub struct SignRequest<'a> {
    message: &'a [u8],
    key: &'a [u8],
    algorithm: HmacAlgorithm,
    allow_md5_fallback: bool,
}

impl<'a> SignRequest<'a> {
    /// Creates a request that signs `message` under `key`.
    #[must_use]
    pub const fn new(message: &'a [u8], key: &'a [u8], algorithm: HmacAlgorithm) -> Self {
        Self {
            message,
            key,
            algorithm,
            allow_md5_fallback: false,
        }
    }

    /// Permits downgrading a SHA request to HMAC-MD5 when the primary backend
    /// is not compiled in.
    #[must_use]
    pub const fn allow_md5_fallback(mut self, allow: bool) -> Self {
        self.allow_md5_fallback = allow;
        self
    }

    /// Message bytes.
    #[must_use]
    pub const fn message(&self) -> &'a [u8] {
        self.message
    }

    /// Requested algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> HmacAlgorithm {
        self.algorithm
    }
}

/// A computed MAC together with how it was produced.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signature {
    algorithm: HmacAlgorithm,
    backend: SigningBackend,
    bytes: Vec<u8>,
}

impl Signature {
    /// Algorithm that was actually computed. Differs from the request only
    /// after an MD5 fallback downgrade.
    #[must_use]
    pub const fn algorithm(&self) -> HmacAlgorithm {
        self.algorithm
    }

    /// Backend that computed the MAC.
    #[must_use]
    pub const fn backend(&self) -> SigningBackend {
        self.backend
    }

    /// Raw MAC bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Renders the MAC in `encoding`.
    #[must_use]
    pub fn encode(&self, encoding: OutputEncoding) -> String {
        encoding.encode(&self.bytes)
    }
}

/// Signs the request.
///
/// An empty key is rejected; an empty message is valid.
pub fn sign(request: &SignRequest<'_>) -> Result<Signature, SignatureError> {
    if request.key.is_empty() {
        return Err(SignatureError::EmptyKey);
    }

    let backend = SigningBackend::select(request.algorithm, request.allow_md5_fallback)?;
    let algorithm = backend.effective_algorithm(request.algorithm);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "signature::sign",
        %algorithm,
        %backend,
        message_len = request.message.len(),
        key_len = request.key.len(),
        "computing HMAC"
    );

    let bytes = backend.compute(algorithm, request.key, request.message)?;
    debug_assert_eq!(bytes.len(), algorithm.digest_len());

    Ok(Signature {
        algorithm,
        backend,
        bytes,
    })
}

/// Recomputes the MAC and compares it with `expected`, decoded from `encoding`.
///
/// The comparison runs in time independent of where the values differ.
pub fn verify(
    request: &SignRequest<'_>,
    expected: &str,
    encoding: OutputEncoding,
) -> Result<bool, SignatureError> {
    let expected = encoding.decode(expected)?;
    let signature = sign(request)?;
    let matched = constant_time_eq(signature.as_bytes(), &expected);

    #[cfg(feature = "tracing")]
    tracing::debug!(target: "signature::verify", matched, "verified HMAC");

    Ok(matched)
}

/// Compares two byte strings without short-circuiting on the first difference.
///
/// Slices of different lengths compare unequal immediately.
#[must_use]
pub fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    left.iter()
        .zip(right)
        .fold(0_u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_rejected() {
        let request = SignRequest::new(b"message", b"", HmacAlgorithm::Md5);
        assert_eq!(sign(&request), Err(SignatureError::EmptyKey));
    }

    #[test]
    fn empty_message_is_signed() {
        let request = SignRequest::new(b"", b"key", HmacAlgorithm::Md5);
        let signature = sign(&request).unwrap();
        assert_eq!(
            signature.encode(OutputEncoding::Hex),
            "63530468a04e386459855da0063b6596"
        );
    }

    #[test]
    fn md5_request_reports_fallback_backend() {
        let request = SignRequest::new(b"abc", b"key", HmacAlgorithm::Md5);
        let signature = sign(&request).unwrap();
        assert_eq!(signature.backend(), SigningBackend::Md5Fallback);
        assert_eq!(signature.algorithm(), HmacAlgorithm::Md5);
        assert_eq!(signature.as_bytes().len(), 16);
    }

    #[test]
    fn verify_accepts_matching_signature_in_both_encodings() {
        let request = SignRequest::new(b"payload", b"secret", HmacAlgorithm::Md5);
        let signature = sign(&request).unwrap();
        for encoding in [OutputEncoding::Hex, OutputEncoding::Base64] {
            assert_eq!(
                verify(&request, &signature.encode(encoding), encoding),
                Ok(true)
            );
        }
    }

    #[test]
    fn verify_rejects_wrong_or_truncated_signature() {
        let request = SignRequest::new(b"payload", b"secret", HmacAlgorithm::Md5);
        let hex = sign(&request).unwrap().encode(OutputEncoding::Hex);
        let truncated = &hex[..hex.len() - 2];
        assert_eq!(verify(&request, truncated, OutputEncoding::Hex), Ok(false));

        let other = SignRequest::new(b"payload", b"other", HmacAlgorithm::Md5);
        assert_eq!(verify(&other, &hex, OutputEncoding::Hex), Ok(false));
    }

    #[test]
    fn verify_surfaces_decoding_errors() {
        let request = SignRequest::new(b"payload", b"secret", HmacAlgorithm::Md5);
        assert!(matches!(
            verify(&request, "xyz", OutputEncoding::Hex),
            Err(SignatureError::InvalidEncodedSignature { .. })
        ));
    }

    #[test]
    fn constant_time_eq_handles_lengths() {
        assert!(constant_time_eq(b"", b""));
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
    }
}
