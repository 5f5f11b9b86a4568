use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LOG_ENV_VAR;

static TRACING_INIT: Once = Once::new();

/// initialize the global tracing subscriber once, writing to stderr
///
/// `LOAN_CALC_LOG` wins over `default_directive`; an unparsable value falls
/// back to the default.
pub fn init_tracing(default_directive: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(default_directive))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();

        tracing::debug!("tracing initialized");
    });
}
