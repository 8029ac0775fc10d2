//! API key extraction from request headers.

use http::HeaderMap;
use http::header::AUTHORIZATION;

use crate::error::{AuthHeaderError, Result};

/// Authorization scheme expected in the header value.
///
/// Matched case-sensitively: `apikey` and `APIKEY` are rejected.
pub const AUTH_SCHEME: &str = "ApiKey";

/// Extract the API key from a request's `Authorization` header.
///
/// Looks up the header (name matching is case-insensitive; the first value
/// wins when the header repeats) and checks its value against the
/// `ApiKey <token>` shape.
///
/// # Arguments
/// * `headers` - The full header collection of the incoming request
///
/// # Returns
/// * The key on success, borrowed from `headers`
/// * `NoAuthHeader` if the header is absent or its value is empty
/// * `MalformedHeader` if the value does not match `ApiKey <token>`
pub fn extract_api_key(headers: &HeaderMap) -> Result<&str> {
    let value = match headers.get(AUTHORIZATION) {
        Some(v) => v.to_str().map_err(|_| AuthHeaderError::MalformedHeader)?,
        None => return Err(AuthHeaderError::NoAuthHeader),
    };

    parse_authorization(value)
}

/// Check a raw `Authorization` value for the `ApiKey <token>` shape.
///
/// An empty value reads the same as a missing header, not as a malformed
/// one. Tokens past the second are ignored; the key is whatever sits in the
/// second position.
pub fn parse_authorization(value: &str) -> Result<&str> {
    if value.is_empty() {
        return Err(AuthHeaderError::NoAuthHeader);
    }

    // Any run of whitespace separates tokens, so a value of only spaces
    // yields no tokens at all.
    let mut tokens = value.split_whitespace();
    let scheme = tokens.next().ok_or(AuthHeaderError::MalformedHeader)?;
    let key = tokens.next().ok_or(AuthHeaderError::MalformedHeader)?;

    if scheme != AUTH_SCHEME {
        return Err(AuthHeaderError::MalformedHeader);
    }

    Ok(key)
}
