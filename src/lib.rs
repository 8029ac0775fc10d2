//! API key extraction from HTTP `Authorization` headers.
//!
//! This crate provides functionality for:
//! - Locating the `Authorization` header in a request's header collection
//! - Checking its value against the `ApiKey <token>` scheme convention
//! - Surfacing the embedded key, or exactly one typed error, to the caller
//!
//! # Header Format
//!
//! Values follow the format: `ApiKey <token>`
//!
//! Example: `Authorization: ApiKey my-secret-key`
//!
//! The scheme keyword is matched case-sensitively, and anything past the
//! second whitespace-delimited token is ignored. A missing header and an
//! empty header value are the same condition ([`AuthHeaderError::NoAuthHeader`]);
//! every other deviation from the format is [`AuthHeaderError::MalformedHeader`].
//!
//! The extracted key is an opaque, untrusted string. Nothing here decides
//! whether a request is authorized - the calling layer looks the key up and
//! maps the two error kinds onto its own 401/400-style rejections.
//!
//! # Example
//!
//! ```rust
//! use header_auth::{AuthHeaderError, extract_api_key};
//! use http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(AUTHORIZATION, HeaderValue::from_static("ApiKey my-secret-key"));
//! assert_eq!(extract_api_key(&headers), Ok("my-secret-key"));
//!
//! let empty = HeaderMap::new();
//! assert_eq!(extract_api_key(&empty), Err(AuthHeaderError::NoAuthHeader));
//! ```

mod error;
mod extract;

// Public re-exports
pub use error::{AuthHeaderError, Result};
pub use extract::{AUTH_SCHEME, extract_api_key, parse_authorization};
