//! JSON-lines trace output for hosts embedding the C library.
//!
//! Only the scan span and pass-through events of `kana-core` are recorded,
//! and only when built with the `trace` feature.

use std::io;
use std::path::{Path, PathBuf};

/// File created inside the log directory.
pub const TRACE_FILE: &str = "kana-trace.jsonl";

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "kana_engine=debug,kana_core=debug";

#[derive(Debug, thiserror::Error)]
pub enum TraceInitError {
    #[error("built without the `trace` feature")]
    Disabled,
    #[error("cannot create log directory {}: {source}", path.display())]
    LogDir { path: PathBuf, source: io::Error },
    #[error("a global subscriber is already installed")]
    AlreadyInstalled,
}

/// Install a subscriber writing `TRACE_FILE` under `log_dir`, creating the
/// directory if needed. Each `transliterate` call closes one span carrying
/// its char count and timing.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Result<(), TraceInitError> {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    std::fs::create_dir_all(log_dir).map_err(|source| TraceInitError::LogDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .try_init()
        .map_err(|_| TraceInitError::AlreadyInstalled)?;

    // The writer thread must outlive every caller of the C API.
    std::mem::forget(guard);
    Ok(())
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> Result<(), TraceInitError> {
    Err(TraceInitError::Disabled)
}
