//! Outbound API clients and the ports they implement.
//!
//! The handler talks to the platform and the completion service through the
//! two traits below so that tests can substitute fakes for the live APIs.

pub mod completion_client;
pub mod line_client;

pub use completion_client::AzureCompletionClient;
pub use line_client::LineClient;

use async_trait::async_trait;

use crate::core::conversation::ChatTurn;
use crate::core::models::{OutgoingMessage, UserProfile};
use crate::errors::RelayError;

/// Messaging-platform operations the relay consumes.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, RelayError>;

    async fn reply(
        &self,
        reply_token: &str,
        messages: &[OutgoingMessage],
    ) -> Result<(), RelayError>;
}

/// Completion-service operations the relay consumes.
#[async_trait]
pub trait CompletionPort: Send + Sync {
    async fn complete(&self, turns: &[ChatTurn]) -> Result<String, RelayError>;
}
