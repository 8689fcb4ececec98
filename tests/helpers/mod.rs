//! Shared test fixtures: fake ports, app construction, and body helpers.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use serde_json::json;

use bingobot::api::signature::compute_signature;
use bingobot::api::{self, AppState};
use bingobot::bot::RelayBot;
use bingobot::clients::{CompletionPort, MessagingPort};
use bingobot::core::config::AppConfig;
use bingobot::core::conversation::{ChatTurn, ConversationStore};
use bingobot::core::models::{OutgoingMessage, UserProfile};
use bingobot::errors::RelayError;
use bingobot::replies::DEFAULT_PERSONA;

pub const TEST_SECRET: &str = "test-channel-secret";

pub fn test_config() -> AppConfig {
    AppConfig {
        line_channel_access_token: "test-access-token".to_string(),
        line_channel_secret: TEST_SECRET.to_string(),
        azure_openai_endpoint: "https://example.openai.azure.com".to_string(),
        azure_openai_api_key: "test-api-key".to_string(),
        azure_openai_api_version: "2024-02-01".to_string(),
        azure_openai_model: "gpt-4o-mini".to_string(),
        persona: DEFAULT_PERSONA.to_string(),
        bind_address: "127.0.0.1:0".to_string(),
    }
}

// ============================================================================
// Fake ports
// ============================================================================

/// Messaging fake. Records delivered replies; `fail_reply` makes delivery
/// return an upstream error.
#[derive(Default)]
pub struct FakeMessaging {
    pub fail_reply: bool,
    pub replies: Mutex<Vec<(String, Vec<OutgoingMessage>)>>,
}

impl FakeMessaging {
    pub fn failing() -> Self {
        Self {
            fail_reply: true,
            replies: Mutex::new(Vec::new()),
        }
    }

    pub fn delivered(&self) -> Vec<(String, Vec<OutgoingMessage>)> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagingPort for FakeMessaging {
    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, RelayError> {
        Ok(UserProfile {
            display_name: format!("User {user_id}"),
        })
    }

    async fn reply(
        &self,
        reply_token: &str,
        messages: &[OutgoingMessage],
    ) -> Result<(), RelayError> {
        if self.fail_reply {
            return Err(RelayError::PlatformApi(
                "reply delivery refused".to_string(),
            ));
        }
        self.replies
            .lock()
            .unwrap()
            .push((reply_token.to_string(), messages.to_vec()));
        Ok(())
    }
}

/// Completion fake. Records each call's input turns and answers with a
/// numbered reply (`ans-1`, `ans-2`, ...) so tests can trace ordering.
pub struct FakeCompletion {
    pub fail: bool,
    pub calls: Mutex<Vec<Vec<ChatTurn>>>,
}

impl FakeCompletion {
    pub fn answering() -> Self {
        Self {
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_inputs(&self) -> Vec<Vec<ChatTurn>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionPort for FakeCompletion {
    async fn complete(&self, turns: &[ChatTurn]) -> Result<String, RelayError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(turns.to_vec());
        if self.fail {
            return Err(RelayError::Completion(
                "completion service unavailable".to_string(),
            ));
        }
        Ok(format!("ans-{}", calls.len()))
    }
}

// ============================================================================
// App construction
// ============================================================================

pub struct TestContext {
    pub app: Router,
    pub state: Arc<AppState>,
    pub messaging: Arc<FakeMessaging>,
    pub completion: Arc<FakeCompletion>,
}

pub fn test_app(completion: FakeCompletion) -> TestContext {
    test_app_with(FakeMessaging::default(), completion)
}

pub fn test_app_with(messaging: FakeMessaging, completion: FakeCompletion) -> TestContext {
    let messaging = Arc::new(messaging);
    let completion = Arc::new(completion);
    let bot = RelayBot::new(
        messaging.clone(),
        completion.clone(),
        ConversationStore::new(DEFAULT_PERSONA),
    );
    let state = Arc::new(AppState {
        config: test_config(),
        bot,
    });
    let app = api::router(state.clone());

    TestContext {
        app,
        state,
        messaging,
        completion,
    }
}

// ============================================================================
// Request and body helpers
// ============================================================================

/// Single-text-message webhook body.
pub fn event_body(text: &str, reply_token: &str, user_id: Option<&str>) -> String {
    let mut event = json!({
        "message": { "text": text },
        "replyToken": reply_token,
    });
    if let Some(id) = user_id {
        event["source"] = json!({ "type": "user", "userId": id });
    }
    json!({ "events": [event] }).to_string()
}

/// POST /callback request carrying a valid signature for `body`.
pub fn signed_request(body: &str) -> Request<Body> {
    let sig = compute_signature(TEST_SECRET, body.as_bytes());
    Request::builder()
        .method("POST")
        .uri("/callback")
        .header("content-type", "application/json")
        .header("x-line-signature", sig)
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// POST /callback request with an arbitrary (usually wrong) signature header.
pub fn request_with_signature(body: &str, signature: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/callback")
        .header("content-type", "application/json")
        .header("x-line-signature", signature)
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

pub async fn body_to_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to collect response body")
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        let preview = String::from_utf8_lossy(&bytes);
        panic!("Failed to parse response as JSON: {e}\nBody: {preview}")
    })
}
