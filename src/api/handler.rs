//! Webhook endpoint handler.
//!
//! This module handles:
//! - Signature extraction and verification over the raw body
//! - Event payload parsing
//! - Per-event classification and reply delivery

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{AppState, signature};
use crate::core::conversation::ANONYMOUS_SESSION;
use crate::core::models::{CallbackResponse, WebhookPayload};
use crate::errors::RelayError;

pub const SIGNATURE_HEADER: &str = "x-line-signature";

/// Handle `POST /callback`.
///
/// Verifies the request signature, then classifies and answers every text
/// message in the event batch. Replies are delivered through the platform
/// reply API; the `200` body reports what was sent for the first processed
/// event.
///
/// # Errors
///
/// `Unauthorized` for a missing or invalid signature, `Malformed` for an
/// unparseable or empty event payload, and an upstream error when the
/// completion service or the reply delivery fails.
#[tracing::instrument(level = "info", skip(state, headers, body))]
pub async fn callback_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<CallbackResponse>, RelayError> {
    let request_id = Uuid::new_v4();

    // ========================================================================
    // Extract and verify signature
    // ========================================================================

    let Some(sig) = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok()) else {
        error!(%request_id, "Missing {} header", SIGNATURE_HEADER);
        return Err(RelayError::Unauthorized(
            "missing signature header".to_string(),
        ));
    };

    if !signature::verify_signature(&state.config.line_channel_secret, sig, body.as_bytes()) {
        error!(%request_id, "Signature verification failed");
        return Err(RelayError::Unauthorized("invalid signature".to_string()));
    }

    info!(%request_id, "Signature verified");

    // ========================================================================
    // Parse event payload
    // ========================================================================

    let payload: WebhookPayload = serde_json::from_str(&body)
        .map_err(|e| RelayError::Malformed(format!("invalid event payload: {}", e)))?;

    if payload.events.is_empty() {
        return Err(RelayError::Malformed("empty event list".to_string()));
    }

    // ========================================================================
    // Classify and answer each text message
    // ========================================================================

    let mut receipt: Option<CallbackResponse> = None;

    for event in &payload.events {
        let Some(text) = event.message.as_ref().and_then(|m| m.text.as_deref()) else {
            info!(%request_id, "Skipping event without message text");
            continue;
        };
        let Some(reply_token) = event.reply_token.as_deref() else {
            info!(%request_id, "Skipping event without reply token");
            continue;
        };

        let user_id = event.source.as_ref().and_then(|s| s.user_id.as_deref());
        let session_key = user_id.unwrap_or(ANONYMOUS_SESSION);

        // Display-name lookup is a side effect; the reply must not depend on it.
        let mut display_name = None;
        if let Some(id) = user_id {
            match state.bot.messaging().get_profile(id).await {
                Ok(profile) => display_name = Some(profile.display_name),
                Err(e) => warn!(%request_id, "Profile lookup failed: {}", e),
            }
        }

        let messages = state
            .bot
            .respond(session_key, display_name.as_deref(), text)
            .await?;

        state.bot.deliver(reply_token, &messages).await?;

        if receipt.is_none() {
            receipt = Some(CallbackResponse {
                reply_token: reply_token.to_string(),
                messages,
            });
        }
    }

    receipt
        .map(Json)
        .ok_or_else(|| RelayError::Malformed("no text message events".to_string()))
}
