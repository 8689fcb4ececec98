//! LINE Messaging API client
//!
//! Encapsulates the profile lookup and reply delivery calls.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

use super::MessagingPort;
use crate::core::models::{OutgoingMessage, UserProfile};
use crate::errors::RelayError;

const LINE_API_BASE: &str = "https://api.line.me";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});

/// Messaging API client authenticated with the channel access token.
pub struct LineClient {
    access_token: String,
}

impl LineClient {
    pub fn new(access_token: String) -> Self {
        Self { access_token }
    }
}

#[async_trait]
impl MessagingPort for LineClient {
    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, RelayError> {
        let url = format!("{LINE_API_BASE}/v2/bot/profile/{user_id}");

        let response = HTTP_CLIENT
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(RelayError::PlatformApi(format!(
                "Profile lookup failed: {} - {}",
                status, text
            )));
        }

        let profile: UserProfile = response.json().await.map_err(|e| {
            RelayError::PlatformApi(format!("Failed to parse profile response: {}", e))
        })?;

        Ok(profile)
    }

    async fn reply(
        &self,
        reply_token: &str,
        messages: &[OutgoingMessage],
    ) -> Result<(), RelayError> {
        let payload = json!({
            "replyToken": reply_token,
            "messages": messages,
        });

        let response = HTTP_CLIENT
            .post(format!("{LINE_API_BASE}/v2/bot/message/reply"))
            .bearer_auth(&self.access_token)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(RelayError::PlatformApi(format!(
                "Reply delivery failed: {} - {}",
                status, text
            )));
        }

        Ok(())
    }
}
