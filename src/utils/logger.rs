use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output shape of the stderr log stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    /// One JSON object per line, for log shippers.
    Json,
}

impl LogFormat {
    pub fn from_json_flag(json_logs: bool) -> Self {
        if json_logs {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "arcadia_client=debug,arcadia=debug,info"
    } else {
        "arcadia_client=info,warn"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Installs the global subscriber. `RUST_LOG` wins over `verbose`.
/// A second call is ignored.
pub fn init_logger(format: LogFormat, verbose: bool) {
    // stdout carries the JSON responses, so logs go to stderr
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(env_filter(verbose));
    let installed = match format {
        LogFormat::Compact => registry.with(layer.with_target(false).compact()).try_init(),
        LogFormat::Json => registry
            .with(layer.with_target(true).json().flatten_event(true))
            .try_init(),
    };

    if installed.is_err() {
        tracing::debug!("Logger already initialised, keeping the existing one");
    }
}
