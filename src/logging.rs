//! Diagnostic logging bootstrap. User-facing output goes through
//! `output`; the `log` macros carry storage diagnostics only.

use std::env;

use flexi_logger::{Logger, LoggerHandle};

/// Start stderr logging at `$FLOWDECK_LOG` (default `warn`). Failure to
/// initialize must never take the app down; diagnostics are best-effort.
pub fn init() -> Option<LoggerHandle> {
    let spec = env::var("FLOWDECK_LOG").unwrap_or_else(|_| "warn".to_string());
    Logger::try_with_str(&spec)
        .or_else(|_| Logger::try_with_str("warn"))
        .ok()?
        .log_to_stderr()
        .start()
        .ok()
}
