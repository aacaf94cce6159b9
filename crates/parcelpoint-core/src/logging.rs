//! Logging initialization facility
//!
//! Installs the global `tracing` subscriber once per process. Library code
//! only emits events; whichever binary hosts the workspace picks the profile
//! and calls [`init`] at startup. `RUST_LOG` overrides the profile default.

use std::sync::Once;

use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

static INIT_ONCE: Once = Once::new();

/// Logging profile selected by the hosting binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output, default level `debug`
    Development,
    /// JSON output for log collectors, default level `warn`
    Production,
    /// No output; a bare registry so instrumented code still runs
    Test,
}

/// Install the global subscriber for the given profile
///
/// Safe to call more than once; only the first call installs anything.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
                )
                .with_writer(std::io::stderr)
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
