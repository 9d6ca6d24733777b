use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::{DEFAULT_LOG_LEVEL, PROGRAM_LOG_LEVEL};

pub struct Logger {
    level: Level,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        eprintln!(
            "{timestamp} {:<5} [{}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

fn level_from_env() -> Level {
    std::env::var(PROGRAM_LOG_LEVEL)
        .ok()
        .and_then(|raw| raw.parse::<LevelFilter>().ok())
        .and_then(|lvl| lvl.to_level())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Install the stderr logger, reading the threshold from the environment.
pub fn init() -> Result<(), SetLoggerError> {
    install(level_from_env())
}

/// Install the stderr logger with an explicit threshold.
///
/// Only the first call installs anything; the threshold of that call
/// stays in effect for the rest of the process.
pub fn install(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    let first_call = LOGGER.get().is_none();
    let logger = LOGGER.get_or_init(|| Logger { level });

    if first_call {
        log::set_logger(logger)?;
        log::set_max_level(level.to_level_filter());
    }

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
