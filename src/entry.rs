//! Configured-endpoint data model and the per-process registry.
//!
//! The host platform persists [`ConfigEntry`] records; [`BridgeState`] is the
//! in-memory map from entry id to endpoint data, rebuilt from scratch each
//! process start as entries are activated. It is an owned struct the host
//! threads through lifecycle calls, not a module-level global.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title shown for every entry of this integration.
pub const INTEGRATION_TITLE: &str = "SME Assistant";

/// The data the host persists for one entry. Only the validated base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryData {
    /// Base URL with no trailing slash.
    pub url: String,
}

/// One configured instance of the integration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    /// Opaque unique id; minted once at creation.
    pub entry_id: String,
    pub title: String,
    pub data: EntryData,
}

impl ConfigEntry {
    /// Create an entry for a URL that has already been validated and
    /// normalized by the setup flow.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            entry_id: Uuid::new_v4().to_string(),
            title: INTEGRATION_TITLE.to_string(),
            data: EntryData { url: url.into() },
        }
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// Endpoint data recorded for an active entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRecord {
    pub url: String,
}

/// Map of active entries, keyed by entry id.
///
/// Inserted on activation, removed on successful deactivation. URLs in here
/// were confirmed reachable at entry-creation time (later probe failures
/// during activation are tolerated).
#[derive(Debug, Default)]
pub struct BridgeState {
    endpoints: HashMap<String, EndpointRecord>,
}

impl BridgeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry_id: &str, record: EndpointRecord) {
        self.endpoints.insert(entry_id.to_string(), record);
    }

    pub fn remove(&mut self, entry_id: &str) -> Option<EndpointRecord> {
        self.endpoints.remove(entry_id)
    }

    pub fn endpoint(&self, entry_id: &str) -> Option<&EndpointRecord> {
        self.endpoints.get(entry_id)
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_gets_a_unique_id_and_title() {
        let a = ConfigEntry::new("http://localhost:8080");
        let b = ConfigEntry::new("http://localhost:8080");
        assert_ne!(a.entry_id, b.entry_id);
        assert_eq!(a.title, INTEGRATION_TITLE);
        assert_eq!(a.data.url, "http://localhost:8080");
    }

    #[test]
    fn entry_data_round_trips_through_json() {
        let data = EntryData { url: "http://assistant.local:8080".to_string() };
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(serde_json::from_str::<EntryData>(&json).unwrap(), data);
    }

    #[test]
    fn registry_insert_lookup_remove() {
        let mut state = BridgeState::new();
        assert!(state.is_empty());

        state.insert("e1", EndpointRecord { url: "http://a".into() });
        assert_eq!(state.endpoint("e1").map(|r| r.url.as_str()), Some("http://a"));
        assert!(state.endpoint("e2").is_none());

        assert!(state.remove("e1").is_some());
        assert!(state.remove("e1").is_none());
        assert!(state.is_empty());
    }
}
