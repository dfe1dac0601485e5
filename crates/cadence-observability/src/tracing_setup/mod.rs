//! Subscriber configuration driven by [`ObservabilityConfig`].

pub mod events;
pub mod spans;

use std::sync::OnceLock;

use cadence_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

static INITIALISED: OnceLock<bool> = OnceLock::new();

/// Install the global subscriber. `RUST_LOG` wins over `config.log_level`.
///
/// Only the first call attempts installation; later calls return its outcome.
/// `false` means another global subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    *INITIALISED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
        if config.json {
            builder.json().try_init().is_ok()
        } else {
            builder.try_init().is_ok()
        }
    })
}
