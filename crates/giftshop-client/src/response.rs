//! Response body decoding.
//!
//! Some backend builds serialize their JSON twice, so `GET /products` can
//! arrive as a JSON string whose content is the real array.

use serde_json::Value;

use crate::error::ClientError;

/// Parses `body` as JSON, unwrapping one level of string encoding.
///
/// # Errors
///
/// Returns [`ClientError::InvalidResponse`] if the body, or the string it
/// wraps, is not valid JSON.
pub fn decode_json_body(body: &str, context: &str) -> Result<Value, ClientError> {
    let invalid = |source| ClientError::InvalidResponse {
        context: context.to_owned(),
        source,
    };

    let parsed: Value = serde_json::from_str(body).map_err(invalid)?;
    match parsed {
        Value::String(inner) => serde_json::from_str(&inner).map_err(invalid),
        other => Ok(other),
    }
}
