//! Entry activation and deactivation.
//!
//! [`Platform`] is the capability boundary toward the host automation
//! platform: this crate decides *when* a conversation entity exists, the
//! host decides *how* it is registered and driven. The raw platform handle
//! never leaks into agents.
//!
//! Activation failure policy (kept exactly as the integration has always
//! behaved): a health probe answering with a non-200 status aborts, while a
//! transport-level failure is tolerated because the assistant may start
//! after the platform does.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

use crate::agent::AssistantAgent;
use crate::client::{AssistantClient, ProbeError};
use crate::entry::{BridgeState, ConfigEntry, EndpointRecord};
use crate::error::BridgeError;

/// Host-platform operations the lifecycle delegates to.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Instantiate the conversation entity for `entry`.
    async fn add_conversation_entity(
        &self,
        entry: &ConfigEntry,
        agent: AssistantAgent,
    ) -> Result<(), BridgeError>;

    /// Tear down the entity for `entry_id`, reporting whether that worked.
    async fn remove_conversation_entity(&self, entry_id: &str) -> bool;
}

/// Activate a configured entry: probe, record the endpoint, hand the agent
/// to the host.
///
/// The endpoint record is inserted before the host is asked to instantiate
/// the entity, so a failed instantiation leaves the record in place for a
/// later retry.
pub async fn activate(
    state: &mut BridgeState,
    platform: &dyn Platform,
    http: &Client,
    entry: &ConfigEntry,
) -> Result<(), BridgeError> {
    let client = AssistantClient::new(http.clone(), entry.data.url.clone());

    match client.probe().await {
        Ok(()) => {}
        Err(ProbeError::Status(code)) => {
            return Err(BridgeError::Health(format!(
                "assistant at {} answered status {code}",
                entry.data.url
            )));
        }
        Err(err @ ProbeError::Transport(_)) => {
            warn!(
                entry_id = %entry.entry_id,
                error = %err,
                "assistant unreachable during activation, continuing"
            );
        }
    }

    state.insert(&entry.entry_id, EndpointRecord { url: entry.data.url.clone() });

    let agent = AssistantAgent::new(client, entry.entry_id.clone());
    platform.add_conversation_entity(entry, agent).await?;

    info!(entry_id = %entry.entry_id, url = %entry.data.url, "entry activated");
    Ok(())
}

/// Deactivate an entry. The endpoint record is removed only when the host
/// reports a successful teardown, so a failed unload can be retried.
pub async fn deactivate(
    state: &mut BridgeState,
    platform: &dyn Platform,
    entry_id: &str,
) -> bool {
    let unloaded = platform.remove_conversation_entity(entry_id).await;
    if unloaded {
        state.remove(entry_id);
        info!(entry_id, "entry deactivated");
    } else {
        warn!(entry_id, "platform teardown failed, keeping endpoint record");
    }
    unloaded
}
