//! Bridge between a home-automation platform and the SME Assistant service.
//!
//! The assistant runs as a standalone HTTP service with two endpoints:
//! `GET /api/health` (readiness) and `POST /api/chat` (one utterance in, one
//! reply plus a conversation-continuation id out). This crate exposes it to
//! the host platform as a conversation agent:
//!
//! - [`setup`] — interactive flow that validates a user-entered base URL
//!   against the health endpoint before an entry is created.
//! - [`lifecycle`] — activates/deactivates a configured entry, maintaining
//!   the entry-id → endpoint registry and delegating entity management to
//!   the host through the [`lifecycle::Platform`] seam.
//! - [`agent`] — the conversation entity itself: forwards utterances to the
//!   chat endpoint and maps every outcome (including failures) into a
//!   normally-shaped [`agent::ConversationResult`].
//!
//! The HTTP connection pool belongs to the host; every constructor here
//! takes a shared [`reqwest::Client`].

pub mod agent;
pub mod client;
pub mod entry;
pub mod error;
pub mod lifecycle;
pub mod logger;
pub mod setup;
