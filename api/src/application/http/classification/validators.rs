use serde::{Deserialize, Serialize};

/// One inbound relay frame, decoded from JSON.
///
/// Exactly one of the two fields drives processing; `ingredients` takes
/// priority when both are present. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    pub ingredients: Option<String>,
    /// Data URI of the form `<prefix>,<base64>`.
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Success,
    Failed,
}

/// One outbound relay frame, serialized to JSON text.
///
/// `prompt` is present only on image-path success replies, which echo the
/// instruction template for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingMessage {
    pub status: ReplyStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl OutgoingMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Success,
            message: message.into(),
            prompt: None,
        }
    }

    pub fn success_with_prompt(message: impl Into<String>, prompt: Option<String>) -> Self {
        Self {
            status: ReplyStatus::Success,
            message: message.into(),
            prompt,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Failed,
            message: message.into(),
            prompt: None,
        }
    }
}
