use flexi_logger::{opt_format, FlexiLoggerError, Logger, LoggerHandle};

/// Start stderr logging at `level` (e.g. "info", "sim_2048=debug").
///
/// `RUST_LOG` takes precedence when set. Keep the returned handle alive for
/// the lifetime of the program.
pub fn init_logging(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .format(opt_format)
        .start()
}
