#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`error`, `warn`, `info`,
/// `debug`, `trace` or `off`).
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        // stdout belongs to the game prompts.
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Initialize logging. The level is `level` when given, else taken from
/// `BATTLESHIP_LOG`, else `warn`. Calling this twice keeps the first logger.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = level
        .or_else(|| env::var(LOG_ENV).ok().and_then(|lvl| lvl.parse().ok()))
        .unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
