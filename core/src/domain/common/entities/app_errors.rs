use thiserror::Error;

/// Errors surfaced by domain services and infrastructure adapters.
///
/// Display output is embedded verbatim in relay failure replies, so
/// messages carry the detail and nothing else.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The service input was malformed or incomplete.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The supplied image payload could not be decoded.
    #[error("invalid image payload: {0}")]
    InvalidImagePayload(String),

    /// The external classification service failed.
    #[error("{0}")]
    ExternalServiceError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_service_error_displays_detail_only() {
        let err = CoreError::ExternalServiceError("LLM API error: timeout".to_string());
        assert_eq!(err.to_string(), "LLM API error: timeout");
    }

    #[test]
    fn invalid_image_payload_mentions_detail() {
        let err = CoreError::InvalidImagePayload("missing ',' separator".to_string());
        assert!(err.to_string().contains("missing ',' separator"));
    }
}
