use std::path::Path;
use std::sync::Once;

use clap::ValueEnum;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "wordbook_server=info,wordbook_core=info,tower_http=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// With `log_dir`, events are written as JSON lines to
/// `<log_dir>/wordbook-server.jsonl` and the returned guard must be held
/// until shutdown so buffered lines are flushed. Only the first call has any
/// effect.
pub fn init_tracing(format: LogFormat, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let mut guard = None;
    INIT.call_once(|| match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(dir, "wordbook-server.jsonl");
            let (non_blocking, g) = tracing_appender::non_blocking(file_appender);
            guard = Some(g);

            tracing_subscriber::fmt()
                .json()
                .with_writer(non_blocking)
                .with_target(true)
                .with_env_filter(env_filter())
                .init();
        }
        None => match format {
            LogFormat::Json => tracing_subscriber::fmt()
                .json()
                .with_target(true)
                .with_env_filter(env_filter())
                .init(),
            LogFormat::Text => tracing_subscriber::fmt()
                .with_target(true)
                .with_env_filter(env_filter())
                .init(),
        },
    });
    guard
}
