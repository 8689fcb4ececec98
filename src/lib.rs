/// bingobot - a LINE chatbot that answers with canned replies or an Azure
/// OpenAI completion, in the voice of a sweets-loving truck driver from Bingo.
///
/// The crate is a single webhook relay:
/// 1. `POST /callback` receives signed LINE events
/// 2. Each text message is classified against the reset/canned tables
/// 3. Everything else goes to the Azure OpenAI deployment with the session's
///    accumulated conversation turns
///
/// # Architecture
///
/// The system uses:
/// - axum for the HTTP surface
/// - reqwest for the LINE and Azure OpenAI REST calls
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
///
/// use bingobot::api::{self, AppState};
/// use bingobot::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     bingobot::setup_logging();
///
///     // Create a dummy AppConfig for the example
///     let config = AppConfig {
///         line_channel_access_token: "dummy_token".to_string(),
///         line_channel_secret: "dummy_secret".to_string(),
///         azure_openai_endpoint: "https://example.openai.azure.com".to_string(),
///         azure_openai_api_key: "dummy_key".to_string(),
///         azure_openai_api_version: "2024-02-01".to_string(),
///         azure_openai_model: "gpt-4o-mini".to_string(),
///         persona: bingobot::replies::DEFAULT_PERSONA.to_string(),
///         bind_address: "127.0.0.1:8000".to_string(),
///     };
///
///     let state = Arc::new(AppState::from_config(config));
///     let app = api::router(state);
///
///     let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
///     axum::serve(listener, app).await?;
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod bot;
pub mod clients;
pub mod core;
pub mod errors;
pub mod replies;

/// Configure structured logging.
///
/// Installs a tracing-subscriber registry with an env-filter (`RUST_LOG`,
/// defaulting to `info`) and a fmt layer. Call once at process start.
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
