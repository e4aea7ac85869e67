use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Settings;
use crate::runner::RunSummary;

/// Initialize structured logging on stderr based on verbosity level.
///
/// Output is kept quiet by default so that log lines never mix with the
/// extracted fields; `RUST_LOG` takes precedence over both levels.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pk=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pk=warn"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log the resolved settings
pub fn log_settings(settings: &Settings) {
    let fields: Vec<String> = settings.fields.iter().map(ToString::to_string).collect();
    tracing::debug!(
        delimiters = ?settings.delimiters,
        separator = ?settings.separator,
        null_text = ?settings.null_text,
        excludes = ?settings.excludes,
        empty = settings.allow_empty_tokens,
        backslash = settings.strip_escapes,
        trim = settings.trim,
        fields = ?fields,
        "Resolved settings"
    );
}

/// Log where input is read from
pub fn log_input_source(path: Option<&std::path::Path>) {
    match path {
        Some(path) => tracing::debug!(path = %path.display(), "Reading input file"),
        None => tracing::debug!("Reading standard input"),
    }
}

/// Log the end of a run
pub fn log_run_summary(summary: &RunSummary) {
    if summary.broken_pipe {
        tracing::debug!(lines = summary.lines, "Output closed early");
    } else {
        tracing::debug!(lines = summary.lines, "Input exhausted");
    }
}

/// Log performance metrics
pub fn log_performance(operation: &str, duration_ms: u64) {
    tracing::debug!(
        operation = operation,
        duration_ms = duration_ms,
        "Operation performance"
    );
}
