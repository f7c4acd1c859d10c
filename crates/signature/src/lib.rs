#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! HMAC signing over the SHA family and MD5.
//!
//! [`sign`] computes a keyed-hash signature for a [`SignRequest`]. SHA
//! algorithms run through the RustCrypto `hmac` backend when the `rustcrypto`
//! feature is enabled. HMAC-MD5 is always computed by the RFC 2104
//! construction in [`hmac`] on top of [`checksums::strong::Md5`].
//!
//! # Examples
//!
//! ```
//! use signature::{HmacAlgorithm, OutputEncoding, SignRequest, sign};
//!
//! let request = SignRequest::new(b"what do ya want for nothing?", b"Jefe", HmacAlgorithm::Md5);
//! let signature = sign(&request).unwrap();
//! assert_eq!(
//!     signature.encode(OutputEncoding::Hex),
//!     "750c783e6ab0b503eaa86e310a5db738"
//! );
//! ```

mod algorithm;
mod backend;
mod encoding;
mod error;
pub mod hmac;
mod sign;

pub use algorithm::{HmacAlgorithm, SUPPORTED_ALGORITHMS};
pub use backend::SigningBackend;
pub use encoding::{OutputEncoding, to_hex};
pub use error::SignatureError;
pub use sign::{SignRequest, Signature, constant_time_eq, sign, verify};
