//! Opt-in JSON trace log for debugging transcriptions.

use std::path::Path;

use crate::EngineError;

/// File written inside the log directory.
pub const TRACE_FILE: &str = "tengwar-trace.jsonl";

/// Environment variable holding an `EnvFilter` directive that replaces
/// [`DEFAULT_FILTER`].
pub const LOG_ENV: &str = "TENGWAR_LOG";

pub const DEFAULT_FILTER: &str = "tengwar_engine=debug,tengwar_core=debug";

#[cfg(feature = "trace")]
static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

/// Write spans and events to [`TRACE_FILE`] in `log_dir`, creating the
/// directory if needed. Later calls only check the directory.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Result<(), EngineError> {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    std::fs::create_dir_all(log_dir).map_err(|e| EngineError::Io {
        msg: format!("{}: {e}", log_dir.display()),
    })?;
    if GUARD.get().is_some() {
        return Ok(());
    }

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, TRACE_FILE));
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| EngineError::Tracing { msg: e.to_string() })?;

    // The guard flushes the writer when dropped; statics never are.
    let _ = GUARD.set(guard);
    tracing::debug!(dir = %log_dir.display(), "trace log started");
    Ok(())
}

/// Without the `trace` feature there is nothing to install.
#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> Result<(), EngineError> {
    Ok(())
}
