//! Azure OpenAI chat-completions client
//!
//! Sends the accumulated turn sequence with fixed generation parameters and
//! extracts the reply text from the first choice.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use super::CompletionPort;
use crate::core::conversation::ChatTurn;
use crate::errors::RelayError;

const MAX_REPLY_TOKENS: u32 = 100;
const TEMPERATURE: f32 = 0.5;
const FREQUENCY_PENALTY: f32 = 0.0;
const PRESENCE_PENALTY: f32 = 0.0;
const STOP_SEQUENCES: &[&str] = &["\n"];
const REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct AzureCompletionClient {
    endpoint: String,
    api_key: String,
    api_version: String,
    model: String,
}

impl AzureCompletionClient {
    pub fn new(endpoint: String, api_key: String, api_version: String, model: String) -> Self {
        Self {
            endpoint,
            api_key,
            api_version,
            model,
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            self.api_version
        )
    }
}

#[async_trait]
impl CompletionPort for AzureCompletionClient {
    async fn complete(&self, turns: &[ChatTurn]) -> Result<String, RelayError> {
        #[cfg(feature = "debug-logs")]
        info!("Using completion prompt:\n{:?}", turns);

        #[cfg(not(feature = "debug-logs"))]
        info!("Requesting completion with {} turns", turns.len());

        let request_body = json!({
            "messages": turns,
            "max_tokens": MAX_REPLY_TOKENS,
            "temperature": TEMPERATURE,
            "frequency_penalty": FREQUENCY_PENALTY,
            "presence_penalty": PRESENCE_PENALTY,
            "stop": STOP_SEQUENCES,
            "stream": false,
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        let response = client
            .post(self.completions_url())
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| RelayError::Http(format!("Completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RelayError::Completion(format!(
                "Completion API error: {}",
                error_text
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            RelayError::Completion(format!("Failed to parse completion response: {}", e))
        })?;

        let text_opt = response_json
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|t| t.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        text_opt.ok_or_else(|| RelayError::Completion("No text in response".to_string()))
    }
}
