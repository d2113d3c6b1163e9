//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, ENV_LOG};

static INIT: Once = Once::new();

/// Initialize the branchgate logging system.
///
/// Reads `BRANCHGATE_LOG` for per-target log levels, e.g.
/// `BRANCHGATE_LOG=branchgate=debug`. Falls back to `branchgate=info` if the
/// variable is not set or is invalid.
///
/// Idempotent. If the host process already installed a global subscriber,
/// that subscriber is kept and this call does nothing.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_names(true)
                    .with_test_writer(),
            )
            .with(filter)
            .try_init();
    });
}
