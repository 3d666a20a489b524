//! Crate-wide error types.
//!
//! HTTP-boundary errors (`ProbeError`, `ChatError`) live in [`crate::client`]
//! next to the calls that produce them; `BridgeError` covers everything the
//! host platform sees.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    /// Health endpoint answered with a non-200 status during activation.
    #[error("health check failed: {0}")]
    Health(String),

    /// The host platform refused to instantiate or tear down an entity.
    #[error("platform error: {0}")]
    Platform(String),

    #[error("logger error: {0}")]
    Logger(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn health_error_display() {
        let e = BridgeError::Health("status 503".into());
        assert!(e.to_string().contains("status 503"));
        assert!(e.to_string().contains("health check"));
    }

    #[test]
    fn platform_error_display() {
        let e = BridgeError::Platform("entity rejected".into());
        assert!(e.to_string().contains("entity rejected"));
    }

    #[test]
    fn implements_std_error() {
        let e = BridgeError::Logger("already initialized".into());
        let _: &dyn Error = &e;
    }
}
