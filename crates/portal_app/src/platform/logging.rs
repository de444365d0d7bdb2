//! Logger setup for the portal binary.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Where log records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogDestination {
    File,
    /// Warnings and errors on stderr, the rest on stdout.
    #[default]
    Terminal,
    Both,
}

impl LogDestination {
    fn wants_terminal(self) -> bool {
        matches!(self, Self::Terminal | Self::Both)
    }

    fn wants_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }
}

/// Most verbose level that is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Installs the global logger. Later calls are ignored.
///
/// A log file that cannot be created is reported on stderr and skipped; the
/// terminal logger still comes up when requested.
pub fn initialize(destination: LogDestination, level: LogLevel, log_file: &Path) {
    let filter = LevelFilter::from(level);
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if destination.wants_terminal() {
        loggers.push(TermLogger::new(
            filter,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if destination.wants_file() {
        if let Some(logger) = file_logger(filter, config, log_file) {
            loggers.push(logger);
        }
    }
    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

fn file_logger(filter: LevelFilter, config: Config, path: &Path) -> Option<Box<dyn SharedLogger>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(filter, config, file)),
        Err(err) => {
            eprintln!("Warning: could not create log file {}: {err}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::{LogDestination, LogLevel};

    #[test]
    fn destinations_select_sinks() {
        assert!(LogDestination::Terminal.wants_terminal());
        assert!(!LogDestination::Terminal.wants_file());
        assert!(LogDestination::File.wants_file());
        assert!(LogDestination::Both.wants_terminal() && LogDestination::Both.wants_file());
    }

    #[test]
    fn levels_map_to_filters() {
        assert_eq!(LevelFilter::from(LogLevel::default()), LevelFilter::Info);
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::Trace);
    }
}
