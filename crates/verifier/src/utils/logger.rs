use std::sync::Once;

use tracing_forest::ForestLayer;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

static INIT: Once = Once::new();

/// Targets that stay quiet below `info` whatever `RUST_LOG` asks for.
const QUIET_TARGETS: &[&str] = &["qdiv_simulator=info"];

/// A simple logger.
///
/// Set the `RUST_LOG` environment variable to `info` or `debug`, and `RUST_LOGGER` to `flat`
/// (the default) or `forest`.
pub fn setup_logger() {
    INIT.call_once(|| {
        let directives = std::env::var("RUST_LOG").unwrap_or_else(|_| "off".to_string());
        let directives = std::iter::once(directives.as_str())
            .chain(QUIET_TARGETS.iter().copied())
            .collect::<Vec<_>>()
            .join(",");
        let env_filter =
            EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("off"));

        let logger_type = std::env::var("RUST_LOGGER").unwrap_or_else(|_| "flat".to_string());
        match logger_type.as_str() {
            "forest" => {
                Registry::default().with(env_filter).with(ForestLayer::default()).init();
            }
            "flat" => {
                tracing_subscriber::fmt::Subscriber::builder()
                    .compact()
                    .with_file(false)
                    .with_target(false)
                    .with_thread_names(false)
                    .with_env_filter(env_filter)
                    .with_span_events(FmtSpan::CLOSE)
                    .finish()
                    .init();
            }
            _ => {
                panic!("Invalid logger type: {logger_type}");
            }
        }
    });
}
