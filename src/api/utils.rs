//! API utility functions
//!
//! Pure, stateless helpers for request processing, kept apart from
//! services.rs so they can be unit tested.

use crate::api::error::ApiError;

const MAX_FILE_NAME_LEN: usize = 100;
const FALLBACK_FILE_NAME: &str = "collection.json";

/// Parses and validates Content-Type header for application/json
///
/// Accepts `application/json` with or without a charset parameter. Rejects
/// `application/jsonp`, `application/json-patch+json`, `text/json` and
/// malformed media types.
pub fn parse_content_type(content_type: &str) -> Result<mime::Mime, ApiError> {
    let media_type: mime::Mime = content_type.parse().map_err(|_| {
        ApiError::InvalidPayload(format!("invalid Content-Type: {}", content_type))
    })?;

    if media_type.type_() != mime::APPLICATION || media_type.subtype() != mime::JSON {
        return Err(ApiError::InvalidPayload(format!(
            "Content-Type must be application/json, got: {}/{}",
            media_type.type_(),
            media_type.subtype()
        )));
    }

    Ok(media_type)
}

/// Validates that body size does not exceed the maximum allowed size
pub fn validate_body_size(data: &[u8], max_size: usize) -> Result<(), ApiError> {
    if data.len() > max_size {
        return Err(ApiError::PayloadTooLarge(max_size));
    }
    Ok(())
}

/// Reduce a client-supplied file name to a safe temp file suffix.
///
/// Directory components are dropped and anything outside `[A-Za-z0-9._-]`
/// becomes `_`.
pub fn sanitize_file_name(original: Option<&str>) -> String {
    let base = original
        .and_then(|name| name.rsplit(|c: char| c == '/' || c == '\\').next())
        .unwrap_or_default()
        .trim();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .take(MAX_FILE_NAME_LEN)
        .collect();

    if cleaned.trim_matches('.').is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        cleaned
    }
}
