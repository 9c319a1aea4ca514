use std::path::Path;

use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};

/// Installs the global logger. `RUST_LOG` overrides `base_level`.
///
/// With `log_dir`, records go to rotating files there and are duplicated to
/// stdout, with warnings also on stderr. Without it, records go to stdout.
/// The returned handle must be kept alive for file output to be flushed.
pub fn setup_logging(base_level: &str, log_dir: Option<&Path>) -> anyhow::Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(base_level)?;

    let logger = match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .duplicate_to_stderr(Duplicate::Warn)
            .duplicate_to_stdout(Duplicate::All)
            .rotate(
                Criterion::Size(1024 * 1024), //1MB
                Naming::Timestamps,
                Cleanup::KeepLogFiles(5),
            ),
        None => logger.log_to_stdout(),
    };

    Ok(logger.start()?)
}
