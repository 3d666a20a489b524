//! HTTP client for the SME Assistant service.
//!
//! One struct, two calls: [`AssistantClient::probe`] against `/api/health`
//! and [`AssistantClient::chat`] against `/api/chat`. All wire types are
//! private to this module — callers never see them.
//!
//! The underlying `reqwest::Client` is supplied by the host (shared
//! connection pool); this module only sets per-request timeouts.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Hard timeout for health probes, in both setup and activation.
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for a chat exchange. Generous because the assistant may run a
/// long model inference before answering.
const CHAT_TIMEOUT: Duration = Duration::from_secs(120);

// ── Errors ────────────────────────────────────────────────────────────────────

/// Why a health probe did not succeed.
///
/// The two variants carry different lifecycle policies: a `Status` failure
/// aborts entry activation, a `Transport` failure is tolerated (the service
/// may start after the platform does). See [`crate::lifecycle::activate`].
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("health endpoint returned status {0}")]
    Status(u16),
    #[error("health endpoint unreachable: {0}")]
    Transport(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat request failed: {0}")]
    Transport(String),
    #[error("chat reply was not valid JSON: {0}")]
    Decode(String),
}

// ── Client ────────────────────────────────────────────────────────────────────

/// Reply from a successful chat exchange.
///
/// Both fields are optional on the wire; `response` defaults to empty and
/// a missing `conversation_id` is surfaced as `None` so the caller can fall
/// back to the id it sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
    pub conversation_id: Option<String>,
}

/// Client bound to one configured assistant endpoint.
///
/// `base_url` must carry no trailing slash (the setup flow normalizes it
/// before an entry is ever created). Cheap to clone — `reqwest::Client` is
/// an `Arc` internally.
#[derive(Debug, Clone)]
pub struct AssistantClient {
    http: Client,
    base_url: String,
}

impl AssistantClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe `/api/health`. Succeeds only on an exact 200 status.
    ///
    /// The body (`{"status": "ok"}` in practice) is ignored; the contract is
    /// status-code-only.
    pub async fn probe(&self) -> Result<(), ProbeError> {
        let url = format!("{}/api/health", self.base_url);
        let resp = self
            .http
            .get(&url)
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
            .map_err(|e| ProbeError::Transport(e.to_string()))?;

        match resp.status() {
            StatusCode::OK => Ok(()),
            status => Err(ProbeError::Status(status.as_u16())),
        }
    }

    /// One chat round-trip: send `message` (plus the continuation id, `null`
    /// when absent) and parse the JSON reply.
    ///
    /// The status code is deliberately not checked: the service answers
    /// errors with JSON bodies that simply lack a `response` field, and the
    /// conversation UI treats an empty reply as such. Only transport
    /// failures and non-JSON bodies are errors here.
    pub async fn chat(
        &self,
        message: &str,
        conversation_id: Option<&str>,
    ) -> Result<ChatReply, ChatError> {
        let url = format!("{}/api/chat", self.base_url);
        let payload = ChatRequest { message, conversation_id };

        debug!(
            url = %url,
            conversation_id = ?conversation_id,
            message_len = message.len(),
            "sending chat request"
        );

        let resp = self
            .http
            .post(&url)
            .json(&payload)
            .timeout(CHAT_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "chat request failed (transport)");
                ChatError::Transport(e.to_string())
            })?;

        let wire = resp.json::<ChatReplyWire>().await.map_err(|e| {
            error!(url = %url, error = %e, "failed to decode chat reply");
            ChatError::Decode(e.to_string())
        })?;

        Ok(ChatReply {
            response: wire.response,
            conversation_id: wire.conversation_id,
        })
    }
}

// ── Private wire types ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    conversation_id: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ChatReplyWire {
    #[serde(default)]
    response: String,
    #[serde(default)]
    conversation_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> AssistantClient {
        AssistantClient::new(Client::new(), server.uri())
    }

    #[tokio::test]
    async fn probe_succeeds_on_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .mount(&server)
            .await;

        assert!(client_for(&server).probe().await.is_ok());
    }

    #[tokio::test]
    async fn probe_reports_non_200_as_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        match client_for(&server).probe().await {
            Err(ProbeError::Status(503)) => {}
            other => panic!("expected Status(503), got {other:?}"),
        }
    }

    #[tokio::test]
    async fn probe_reports_unreachable_as_transport_error() {
        // Nothing listens here; connection is refused immediately.
        let client = AssistantClient::new(Client::new(), "http://127.0.0.1:9".to_string());
        match client.probe().await {
            Err(ProbeError::Transport(_)) => {}
            other => panic!("expected Transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn chat_sends_null_conversation_id_when_absent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_json(json!({"message": "hi", "conversation_id": null})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "hello",
                "conversation_id": "abc",
            })))
            .mount(&server)
            .await;

        let reply = client_for(&server).chat("hi", None).await.unwrap();
        assert_eq!(reply.response, "hello");
        assert_eq!(reply.conversation_id.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn chat_sends_string_conversation_id_when_present() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_json(json!({"message": "hi", "conversation_id": "abc"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "again",
                "conversation_id": "abc",
            })))
            .mount(&server)
            .await;

        let reply = client_for(&server).chat("hi", Some("abc")).await.unwrap();
        assert_eq!(reply.response, "again");
    }

    #[tokio::test]
    async fn chat_parses_json_body_even_on_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({"error": "server busy"})))
            .mount(&server)
            .await;

        let reply = client_for(&server).chat("hi", None).await.unwrap();
        assert_eq!(reply.response, "");
        assert_eq!(reply.conversation_id, None);
    }

    #[tokio::test]
    async fn chat_non_json_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        match client_for(&server).chat("hi", None).await {
            Err(ChatError::Decode(_)) => {}
            other => panic!("expected Decode error, got {other:?}"),
        }
    }
}
