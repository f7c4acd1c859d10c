//! crates/signature/src/encoding.rs
//!
//! Textual renderings of raw MAC bytes.

use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::SignatureError;

/// Presentation formats for a signature.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum OutputEncoding {
    /// Lowercase hexadecimal, two digits per byte.
    #[default]
    Hex,
    /// Standard base64 alphabet with `=` padding.
    Base64,
}

impl OutputEncoding {
    /// Returns the canonical name accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base64 => "base64",
        }
    }

    /// Renders `bytes` in this encoding.
    #[must_use]
    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Self::Hex => to_hex(bytes),
            Self::Base64 => STANDARD.encode(bytes),
        }
    }

    /// Decodes `text` produced by [`encode`](Self::encode).
    ///
    /// Surrounding whitespace is ignored and hexadecimal input may use either case.
    pub fn decode(self, text: &str) -> Result<Vec<u8>, SignatureError> {
        let trimmed = text.trim();
        match self {
            Self::Hex => hex::decode(trimmed).map_err(|error| self.invalid(error.to_string())),
            Self::Base64 => STANDARD
                .decode(trimmed)
                .map_err(|error| self.invalid(error.to_string())),
        }
    }

    fn invalid(self, reason: String) -> SignatureError {
        SignatureError::InvalidEncodedSignature {
            encoding: self,
            reason,
        }
    }
}

impl fmt::Display for OutputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputEncoding {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "base64" | "b64" => Ok(Self::Base64),
            _ => Err(SignatureError::UnknownEncoding(s.to_owned())),
        }
    }
}

/// Converts a byte slice to a lowercase hex string.
#[must_use]
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
