//! Tracing setup for the application shell.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::mode::RuntimeMode;

/// Install the global subscriber. Filtering comes from `RUST_LOG` when set;
/// otherwise development builds log at debug and production at info.
pub fn init(mode: RuntimeMode) -> Result<()> {
    let default_directive = if mode.is_development() {
        "colloquy_ipc=debug,info"
    } else {
        "colloquy_ipc=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
