//! Logging initialisation via tracing-subscriber.
//!
//! Hosts embedding the bridge in a larger process will usually have their
//! own subscriber; [`init`] is for standalone use and tests.

use tracing_subscriber::EnvFilter;

use crate::error::BridgeError;

/// Initialise the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence; `level` is the fallback. `level` accepts
/// standard level strings: `"error"`, `"warn"`, `"info"`, `"debug"`,
/// `"trace"`.
pub fn init(level: &str) -> Result<(), BridgeError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| BridgeError::Logger(format!("invalid log level '{level}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| BridgeError::Logger(format!("failed to set subscriber: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_info_succeeds_or_already_init() {
        // A prior test in the same process may have installed a subscriber —
        // both outcomes are fine.
        match init("info") {
            Ok(()) => {}
            Err(BridgeError::Logger(msg)) if msg.contains("set subscriber") => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn invalid_fallback_level_fails_to_parse() {
        // Exercise the fallback parse directly; `init` itself may short-circuit
        // through RUST_LOG depending on the test environment.
        assert!(EnvFilter::try_new("not a level !").is_err());
    }
}
