use std::env;

use crate::replies::DEFAULT_PERSONA;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub line_channel_access_token: String,
    pub line_channel_secret: String,
    pub azure_openai_endpoint: String,
    pub azure_openai_api_key: String,
    pub azure_openai_api_version: String,
    pub azure_openai_model: String,
    pub persona: String,
    pub bind_address: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            line_channel_access_token: env::var("LINE_CHANNEL_ACCESS_TOKEN")
                .map_err(|e| format!("LINE_CHANNEL_ACCESS_TOKEN: {}", e))?,
            line_channel_secret: env::var("LINE_CHANNEL_SECRET")
                .map_err(|e| format!("LINE_CHANNEL_SECRET: {}", e))?,
            azure_openai_endpoint: env::var("AZURE_OPENAI_ENDPOINT")
                .map_err(|e| format!("AZURE_OPENAI_ENDPOINT: {}", e))?,
            azure_openai_api_key: env::var("AZURE_OPENAI_API_KEY")
                .map_err(|e| format!("AZURE_OPENAI_API_KEY: {}", e))?,
            azure_openai_api_version: env::var("AZURE_OPENAI_API_VERSION")
                .map_err(|e| format!("AZURE_OPENAI_API_VERSION: {}", e))?,
            azure_openai_model: env::var("AZURE_OPENAI_MODEL")
                .map_err(|e| format!("AZURE_OPENAI_MODEL: {}", e))?,
            persona: env::var("BOT_PERSONA").unwrap_or_else(|_| DEFAULT_PERSONA.to_string()),
            bind_address: env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}
