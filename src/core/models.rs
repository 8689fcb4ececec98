//! Wire types for the webhook payload and the reply messages.

use serde::{Deserialize, Serialize};

/// Top-level webhook body: `{"events": [...]}`.
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

/// One inbound event. Only text-message events carry `message.text`;
/// everything else is skipped by the handler.
#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "replyToken")]
    pub reply_token: Option<String>,
    pub message: Option<EventMessage>,
    pub source: Option<EventSource>,
}

#[derive(Debug, Deserialize)]
pub struct EventMessage {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EventSource {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Subset of the platform profile we care about.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// Reply message in the platform's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutgoingMessage {
    Text {
        text: String,
    },
    Image {
        #[serde(rename = "originalContentUrl")]
        original_content_url: String,
        #[serde(rename = "previewImageUrl")]
        preview_image_url: String,
    },
}

impl OutgoingMessage {
    pub fn text(text: impl Into<String>) -> Self {
        OutgoingMessage::Text { text: text.into() }
    }
}

/// Body of the `200` callback response: what was delivered for the first
/// processed event.
#[derive(Debug, Serialize)]
pub struct CallbackResponse {
    #[serde(rename = "replyToken")]
    pub reply_token: String,
    pub messages: Vec<OutgoingMessage>,
}
