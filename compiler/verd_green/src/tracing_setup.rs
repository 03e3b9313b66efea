//! Opt-in log output for tree building and diagnostic walks.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber, once per process.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=verd_walk=trace,verd_green=debug`. If another subscriber is
/// already installed, that one is kept.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
