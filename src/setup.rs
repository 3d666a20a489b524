//! Interactive setup flow: collect a base URL, validate it, create an entry.
//!
//! Single step, no terminal failure state: any probe failure re-presents the
//! form with the `cannot_connect` error code until the user supplies a
//! reachable URL or abandons the flow.

use reqwest::Client;
use tracing::info;

use crate::client::AssistantClient;
use crate::entry::ConfigEntry;

/// Pre-filled URL in the setup form — the assistant's default listen address.
pub const DEFAULT_URL: &str = "http://localhost:8080";

/// Error code shown on the re-displayed form when the probe fails.
pub const ERR_CANNOT_CONNECT: &str = "cannot_connect";

/// The form presented to the user, possibly annotated with an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupForm {
    pub default_url: &'static str,
    pub error: Option<&'static str>,
}

/// Outcome of one form submission.
#[derive(Debug)]
pub enum FlowOutcome {
    /// Terminal: the URL answered the health probe and an entry was created.
    Created(ConfigEntry),
    /// Same step again, annotated with an error code.
    Retry(SetupForm),
}

/// The setup wizard. Stateless between submissions — the only state machine
/// step is "collect URL".
pub struct SetupFlow {
    http: Client,
}

impl SetupFlow {
    pub fn new(http: Client) -> Self {
        Self { http }
    }

    /// Initial form, no error annotation.
    pub fn form(&self) -> SetupForm {
        SetupForm { default_url: DEFAULT_URL, error: None }
    }

    /// Validate the submitted URL and create the entry on success.
    pub async fn submit(&self, url: &str) -> FlowOutcome {
        let url = normalize_url(url);
        let client = AssistantClient::new(self.http.clone(), url.clone());

        match client.probe().await {
            Ok(()) => {
                info!(url = %url, "assistant reachable, creating entry");
                FlowOutcome::Created(ConfigEntry::new(url))
            }
            Err(err) => {
                info!(url = %url, error = %err, "setup probe failed");
                FlowOutcome::Retry(SetupForm {
                    default_url: DEFAULT_URL,
                    error: Some(ERR_CANNOT_CONNECT),
                })
            }
        }
    }
}

/// Strip trailing slashes so endpoint paths concatenate cleanly.
pub fn normalize_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
