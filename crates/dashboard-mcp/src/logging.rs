//! Tracing setup: console logs on stderr plus a debug log file.
//!
//! stderr keeps stdout free for the stdio transport. The file layer always
//! records at debug level so request/response bodies land in it regardless of
//! `RUST_LOG`.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Default console filter when `RUST_LOG` is unset.
pub const DEFAULT_CONSOLE_FILTER: &str = "dashboard_mcp=info,dashboard_client=info";

/// Filter applied to the debug log file.
pub const FILE_FILTER: &str = "dashboard_mcp=debug,dashboard_client=debug";

/// Default debug log file name.
pub const DEFAULT_LOG_FILE: &str = "mcp_debug.log";

/// Install the global subscriber.
///
/// Returns the appender guard when a log file is configured; hold it for the
/// life of the process or buffered lines are lost on exit.
pub fn init_logging(log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_CONSOLE_FILTER));
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(console_filter);

    let Some(path) = log_file else {
        tracing_subscriber::registry().with(console_layer).try_init()?;
        return Ok(None);
    };

    let directory = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir)?;
            dir
        }
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log file path has no file name: {}", path.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_filter(EnvFilter::new(FILE_FILTER));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Installs the process-wide subscriber, so it must stay the only test
    // in this binary that calls `init_logging`.
    #[test]
    fn test_file_layer_records_debug_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join(DEFAULT_LOG_FILE);

        let guard = init_logging(Some(&path)).unwrap().expect("file layer guard");
        tracing::debug!(report = "sales", "debug line for the log file");
        tracing::trace!("trace line below the file filter");
        drop(guard);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("debug line for the log file"), "{contents}");
        assert!(contents.contains("report=\"sales\""), "{contents}");
        assert!(!contents.contains("trace line below the file filter"));
        assert!(!contents.contains('\u{1b}'), "file output must not carry ANSI codes");
    }
}
