// SPDX-License-Identifier: MPL-2.0
//! Self-contained `data:` URI encoding for images.
//!
//! The handoff slot stores images in this form so the stored value is a
//! single string that carries both the content type and the payload.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Encodes bytes as `data:<content_type>;base64,<payload>`.
#[must_use]
pub fn encode(content_type: &str, bytes: &[u8]) -> String {
    let payload = STANDARD.encode(bytes);
    let mut uri =
        String::with_capacity(SCHEME.len() + content_type.len() + BASE64_MARKER.len() + payload.len());
    uri.push_str(SCHEME);
    uri.push_str(content_type);
    uri.push_str(BASE64_MARKER);
    uri.push_str(&payload);
    uri
}

/// Splits a base64 data URI back into its content type and bytes.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the string is not a base64 `data:` URI or the
/// payload is not valid base64.
pub fn decode(uri: &str) -> Result<(String, Vec<u8>)> {
    let rest = uri
        .strip_prefix(SCHEME)
        .ok_or_else(|| Error::Decode("missing data: scheme".into()))?;
    let (content_type, payload) = rest
        .split_once(BASE64_MARKER)
        .ok_or_else(|| Error::Decode("data URI is not base64 encoded".into()))?;
    if content_type.is_empty() {
        return Err(Error::Decode("data URI has no content type".into()));
    }
    let bytes = STANDARD.decode(payload)?;
    Ok((content_type.to_string(), bytes))
}
