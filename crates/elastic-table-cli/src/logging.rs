//! Logging initialization for `etable`.
//!
//! Events go to stderr so they never mix with the rendered table. `RUST_LOG`
//! wins when set; otherwise `-v` raises the level:
//!
//! ```bash
//! etable data.csv           # warnings only
//! etable -v data.csv        # plan decisions (debug)
//! etable -vv data.csv       # every narrowing step (trace)
//! RUST_LOG=elastic_table=trace etable data.csv
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter directives for a `-v` count.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "elastic_table=debug,etable=debug,warn",
        _ => "elastic_table=trace,etable=trace,warn",
    }
}

/// Install the global subscriber. Call once, before any rendering.
pub fn init_logging(verbose: u8) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
