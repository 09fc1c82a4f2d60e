use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ClientConfig;

/// Initialize the global tracing subscriber from the client configuration.
///
/// `RUST_LOG` wins over the configured level when set. Safe to call more than
/// once; later calls are no-ops.
pub fn init_tracing(config: &ClientConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_json {
        let _ = fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .try_init();
    } else {
        let _ = fmt().with_env_filter(filter).try_init();
    }
}
