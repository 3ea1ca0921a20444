//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "ETA_LOG";

/// Initialize the eta tracing/logging system.
///
/// Reads `ETA_LOG` for per-target log levels, e.g.
/// `ETA_LOG=eta_poller=debug,eta_source=trace,info`.
/// Falls back to `config.log_level` if `ETA_LOG` is unset or invalid.
///
/// Idempotent: later calls are no-ops, and an already-installed global
/// subscriber is left in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(filter);
        if config.json_logs {
            let _ = registry
                .with(fmt::layer().json().with_target(true).with_current_span(true))
                .try_init();
        } else {
            let _ = registry
                .with(fmt::layer().with_target(true).with_thread_ids(true))
                .try_init();
        }
    });
}
