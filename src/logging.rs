// src/logging.rs

use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// Sets up file-backed logging. The TUI owns stdout, so everything goes to
/// `decorai.log` in the working directory. `RUST_LOG` overrides the level.
/// The returned handle must stay alive for the duration of the program.
pub fn init() -> anyhow::Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str("info")?
        .log_to_file(FileSpec::default().basename("decorai").suppress_timestamp())
        .start()?;
    Ok(handle)
}
