//! Logging initialization.
//!
//! Uses `tracing` with `tracing-subscriber`. The level is controlled with
//! `RUST_LOG`, e.g. `RUST_LOG=injection_demo=debug,tower_http=debug`.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "injection_demo=info,tower_http=info";

pub fn init_logging() {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
