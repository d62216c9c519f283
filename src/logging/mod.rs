use crate::cli::Args;
use crate::logging::consts::DEFAULT_LOG_DIRECTIVE;
use crate::logging::quickwit::QuickwitLoggingLayerBuilder;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub mod consts;
pub mod quickwit;

/// Must run inside the tokio runtime: the Quickwit layer spawns its shipping task.
pub fn init(args: &Args) {
    let quickwit_logging_layer = args.quickwit_url.as_ref().map(|quickwit_url| {
        QuickwitLoggingLayerBuilder::new(quickwit_url.clone())
            .marker_field("task")
            .map_marker_to_index("http_request", "http_requests")
            .map_marker_to_index("guess_checked", "guess_checks")
            .map_marker_to_index("score_updated", "score_updates")
            .with_batch_size(args.logging_batch_size)
            .build()
    });
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));
    tracing_subscriber::registry()
        .with(quickwit_logging_layer)
        .with(env_filter)
        .with(fmt::layer())
        .init();
}
