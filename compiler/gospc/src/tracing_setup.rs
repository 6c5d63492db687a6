//! Subscriber setup for the `gosp` binary.
//!
//! Nothing is installed unless `GOSP_LOG` or `RUST_LOG` is set, so the CLI is
//! silent by default:
//!
//! - `GOSP_LOG=debug`: sessions, function definitions, failed expressions
//! - `GOSP_LOG=gosp_parse=trace`: every grammar attempt and rollback
//! - `GOSP_LOG_TREE=1`: indented span tree instead of flat lines

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(filter) = filter_from_env() else {
            return;
        };
        let registry = tracing_subscriber::registry().with(filter);
        if std::env::var_os("GOSP_LOG_TREE").is_some() {
            registry
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}

fn filter_from_env() -> Option<EnvFilter> {
    for var in ["GOSP_LOG", "RUST_LOG"] {
        if let Ok(directives) = std::env::var(var) {
            return Some(EnvFilter::new(directives));
        }
    }
    None
}
