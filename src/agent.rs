//! Conversation forwarding agent.
//!
//! [`ConversationAgent`] is the seam the host platform drives: one
//! capability, utterance in, response out. [`AssistantAgent`] is the concrete
//! implementation that forwards to the remote chat endpoint.
//!
//! Failure policy: `handle` never errors. Transport failures, timeouts and
//! undecodable bodies all come back as a normally-shaped
//! [`ConversationResult`] whose speech is an error message — the UI is chat,
//! so errors are spoken. The last-known conversation id is only advanced on
//! a successful exchange, preserving continuity across failures.

use async_trait::async_trait;
use tracing::error;

use crate::client::AssistantClient;

/// Locale tag applied when the caller supplies none.
pub const DEFAULT_LANGUAGE: &str = "en";

// ── Platform-facing types ─────────────────────────────────────────────────────

/// One user utterance as delivered by the host conversation subsystem.
#[derive(Debug, Clone)]
pub struct ConversationInput {
    pub text: String,
    /// Continuation id from the host's chat log, if it has one.
    pub conversation_id: Option<String>,
    pub language: Option<String>,
}

/// Response handed back to the host's chat log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationResult {
    pub speech: String,
    pub conversation_id: String,
    pub language: String,
}

/// Languages an agent advertises to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSupport {
    /// Wildcard — the agent accepts any language.
    All,
    List(Vec<String>),
}

/// A conversation agent the host platform can drive.
#[async_trait]
pub trait ConversationAgent: Send + Sync {
    fn supported_languages(&self) -> LanguageSupport;

    /// Handle one utterance to completion. Must not fail; failures are
    /// expressed inside the returned result.
    async fn handle(&mut self, input: ConversationInput) -> ConversationResult;
}

// ── Assistant-backed implementation ───────────────────────────────────────────

/// Forwards utterances to the SME Assistant chat endpoint.
///
/// The endpoint is fixed at construction; the only mutable state is the
/// last-known conversation id, written by this instance's own exchanges.
pub struct AssistantAgent {
    client: AssistantClient,
    entry_id: String,
    last_conversation_id: Option<String>,
}

impl AssistantAgent {
    pub fn new(client: AssistantClient, entry_id: String) -> Self {
        Self {
            client,
            entry_id,
            last_conversation_id: None,
        }
    }

    pub fn entry_id(&self) -> &str {
        &self.entry_id
    }

    /// Conversation id remembered from the most recent successful exchange.
    pub fn last_conversation_id(&self) -> Option<&str> {
        self.last_conversation_id.as_deref()
    }
}

#[async_trait]
impl ConversationAgent for AssistantAgent {
    /// Routing and translation are delegated entirely to the remote service.
    fn supported_languages(&self) -> LanguageSupport {
        LanguageSupport::All
    }

    async fn handle(&mut self, input: ConversationInput) -> ConversationResult {
        let resolved = input
            .conversation_id
            .or_else(|| self.last_conversation_id.clone())
            .unwrap_or_default();
        let language = input
            .language
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        // Empty id goes out as JSON null; the service picks its own default.
        let request_id = if resolved.is_empty() {
            None
        } else {
            Some(resolved.as_str())
        };

        match self.client.chat(&input.text, request_id).await {
            Ok(reply) => {
                let conversation_id = reply
                    .conversation_id
                    .unwrap_or_else(|| resolved.clone());
                self.last_conversation_id = Some(conversation_id.clone());
                ConversationResult {
                    speech: reply.response,
                    conversation_id,
                    language,
                }
            }
            Err(err) => {
                error!(entry_id = %self.entry_id, error = %err, "assistant exchange failed");
                ConversationResult {
                    speech: format!("Error communicating with SME Assistant: {err}"),
                    conversation_id: resolved,
                    language,
                }
            }
        }
    }
}
