#![deny(missing_docs)]
//! Shared logging utilities for the portal workspace.
//!
//! This crate provides the `portal_*` logging macros used across the codebase,
//! a helper for keeping secrets out of log lines, and a minimal test
//! initializer for the global logger.

#[doc(hidden)]
pub use log;

/// Number of leading characters of a secret that are kept when redacting.
const REDACT_VISIBLE_PREFIX: usize = 4;

/// Logs at trace level through the `log` facade; callers need no `log` dependency.
#[macro_export]
macro_rules! portal_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!($($arg)*);
    }};
}

/// Logs at info level.
#[macro_export]
macro_rules! portal_info {
    ($($arg:tt)*) => {{
        $crate::log::info!($($arg)*);
    }};
}

/// Logs at debug level.
#[macro_export]
macro_rules! portal_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!($($arg)*);
    }};
}

/// Logs at warn level.
#[macro_export]
macro_rules! portal_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!($($arg)*);
    }};
}

/// Logs at error level.
#[macro_export]
macro_rules! portal_error {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
    }};
}

/// Masks a secret for log output, keeping only a short prefix.
///
/// Short secrets are masked entirely so the prefix never reveals most of them.
pub fn redact(secret: &str) -> String {
    let visible: String = secret.chars().take(REDACT_VISIBLE_PREFIX).collect();
    if secret.chars().count() <= REDACT_VISIBLE_PREFIX * 2 {
        "****".to_string()
    } else {
        format!("{visible}****")
    }
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::redact;

    #[test]
    fn long_secret_keeps_prefix_only() {
        assert_eq!(redact("v1.abcdefghijklmnop"), "v1.a****");
    }

    #[test]
    fn short_secret_is_fully_masked() {
        assert_eq!(redact("abc"), "****");
        assert_eq!(redact(""), "****");
    }
}
