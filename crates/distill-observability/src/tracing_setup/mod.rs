//! Tracing setup: `EnvFilter`-driven subscriber with optional JSON output.

pub mod spans;

use std::sync::Once;

use distill_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding a filter directive, e.g. `distill_targets=debug`.
pub const LOG_ENV_VAR: &str = "DISTILL_LOG";

/// Initialize the global tracing subscriber.
///
/// `DISTILL_LOG` takes precedence over `config.log_level`. Idempotent, and a
/// no-op when the host process already installed a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json_logs);
}

/// Initialize tracing with an explicit filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let result = if json {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
        };
        if let Err(err) = result {
            tracing::debug!(error = %err, "tracing subscriber already installed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing(&ObservabilityConfig::default());
        init_tracing(&ObservabilityConfig {
            log_level: "debug".to_string(),
            json_logs: true,
        });
        init_tracing_with_filter("warn");
        tracing::info!("still logging after repeated init");
    }
}
