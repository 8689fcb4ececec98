use std::sync::Arc;

use tracing::info;

use crate::clients::{CompletionPort, MessagingPort};
use crate::core::conversation::ConversationStore;
use crate::core::models::OutgoingMessage;
use crate::errors::RelayError;
use crate::replies::{self, Classification};

/// The relay core: one classify-and-respond pass per inbound text message.
pub struct RelayBot {
    messaging: Arc<dyn MessagingPort>,
    completion: Arc<dyn CompletionPort>,
    conversations: ConversationStore,
}

impl RelayBot {
    pub fn new(
        messaging: Arc<dyn MessagingPort>,
        completion: Arc<dyn CompletionPort>,
        conversations: ConversationStore,
    ) -> Self {
        Self {
            messaging,
            completion,
            conversations,
        }
    }

    #[must_use]
    pub fn messaging(&self) -> &dyn MessagingPort {
        self.messaging.as_ref()
    }

    #[must_use]
    pub fn conversations(&self) -> &ConversationStore {
        &self.conversations
    }

    /// Produce the reply messages for one inbound text.
    ///
    /// Reset and canned replies never touch the completion service; only the
    /// chat path appends to the session history.
    pub async fn respond(
        &self,
        session_key: &str,
        display_name: Option<&str>,
        text: &str,
    ) -> Result<Vec<OutgoingMessage>, RelayError> {
        match replies::classify(text) {
            Classification::Reset => {
                self.conversations.reset(session_key).await;
                info!(session = %session_key, "Conversation reset");
                Ok(vec![OutgoingMessage::text(replies::RESET_CONFIRMATION)])
            }

            Classification::Canned(rule) => {
                info!(session = %session_key, rule = rule.name, "Canned reply");
                Ok(rule.messages())
            }

            Classification::Chat => {
                let turns = self.conversations.push_user(session_key, text).await;
                let reply = self.completion.complete(&turns).await?;
                self.conversations.push_assistant(session_key, &reply).await;
                info!(
                    session = %session_key,
                    user = display_name.unwrap_or("unknown"),
                    "Completion reply"
                );
                Ok(vec![OutgoingMessage::text(reply)])
            }
        }
    }

    /// Deliver reply messages through the platform reply API.
    pub async fn deliver(
        &self,
        reply_token: &str,
        messages: &[OutgoingMessage],
    ) -> Result<(), RelayError> {
        self.messaging.reply(reply_token, messages).await
    }
}
