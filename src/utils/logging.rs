// src/utils/logging.rs
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::bridge::RegistryLayer;

/// Routes `tracing` events into the process-wide logging registry.
/// Reads filters from the `RUST_LOG` environment variable.
/// Defaults to "debug" if `RUST_LOG` is not set, leaving the final say to
/// the registry's own levels.
///
/// Returns `false` if a global subscriber was already installed.
pub fn install_tracing_bridge() -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("debug"));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(RegistryLayer::new())
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Tracing bridge installed.");
    }
    installed
}
