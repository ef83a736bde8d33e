use base64::{Engine as _, engine::general_purpose};

use crate::domain::common::entities::app_errors::CoreError;

/// Extract and decode the base64 payload of a data URI
/// (`<prefix>,<base64>`). The prefix is not inspected.
pub fn decode_data_uri(value: &str) -> Result<Vec<u8>, CoreError> {
    let (_, payload) = value.split_once(',').ok_or_else(|| {
        CoreError::InvalidImagePayload("missing ',' separator in data URI".to_string())
    })?;

    general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| CoreError::InvalidImagePayload(format!("invalid base64 payload: {e}")))
}

/// Unwrap a markdown code fence from a classifier response.
///
/// Some model replies wrap their JSON output in a ```` ```json ```` fence
/// despite being told not to. If the text mentions `json` at all, a leading
/// fence marker, a trailing fence marker, and surrounding whitespace are
/// removed; any other text passes through unmodified.
pub fn strip_json_fences(text: &str) -> String {
    if !text.contains("json") {
        return text.to_string();
    }

    let unwrapped = text.strip_prefix("```json").unwrap_or(text);
    let unwrapped = unwrapped.strip_suffix("```").unwrap_or(unwrapped);
    unwrapped.trim().to_string()
}
