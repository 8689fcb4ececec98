//! HTTP surface: the callback route and error-to-response mapping.

pub mod handler;
pub mod signature;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use tracing::error;

use crate::bot::RelayBot;
use crate::clients::{AzureCompletionClient, LineClient};
use crate::core::config::AppConfig;
use crate::core::conversation::ConversationStore;
use crate::errors::RelayError;

pub struct AppState {
    pub config: AppConfig,
    pub bot: RelayBot,
}

impl AppState {
    /// Wire the live API clients from configuration.
    pub fn from_config(config: AppConfig) -> Self {
        let messaging = Arc::new(LineClient::new(config.line_channel_access_token.clone()));
        let completion = Arc::new(AzureCompletionClient::new(
            config.azure_openai_endpoint.clone(),
            config.azure_openai_api_key.clone(),
            config.azure_openai_api_version.clone(),
            config.azure_openai_model.clone(),
        ));
        let conversations = ConversationStore::new(config.persona.clone());
        let bot = RelayBot::new(messaging, completion, conversations);

        Self { config, bot }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/callback", post(handler::callback_handler))
        .with_state(state)
}

impl RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            RelayError::Malformed(_) => StatusCode::BAD_REQUEST,
            RelayError::PlatformApi(_) | RelayError::Completion(_) | RelayError::Http(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
