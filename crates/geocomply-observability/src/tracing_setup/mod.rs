//! Global subscriber installation.

pub mod events;
pub mod spans;

use std::sync::Once;

use geocomply_core::config::ObservabilityConfig;
use geocomply_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the global subscriber. `GEOCOMPLY_LOG` overrides the configured
/// level. Only the first call has any effect; later calls and calls after
/// another subscriber was installed are ignored.
pub fn init_tracing(config: &ObservabilityConfig) {
    if !config.tracing_enabled {
        return;
    }
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let installed = if config.json_logs {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_current_span(true)
                .try_init()
        } else {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .try_init()
        };
        if installed.is_ok() {
            tracing::info!(
                json = config.json_logs,
                level = %config.log_level,
                "tracing initialized"
            );
        }
    });
}
