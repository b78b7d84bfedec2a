//! Diagnostic output setup.
//!
//! Diagnostics are `tracing` events written to stderr, one line per event.
//! `PYXPLOD_LOG` takes any `EnvFilter` directive and overrides `-v`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "PYXPLOD_LOG";

/// Filter used when `PYXPLOD_LOG` is unset or invalid.
fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A subscriber may already be installed when running under tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
