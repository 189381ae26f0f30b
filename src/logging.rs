#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Level named by the `CHECKERS_LOG` environment variable, `info` if unset or invalid.
pub fn level_from_env() -> LevelFilter {
    env::var("CHECKERS_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the logger. An explicit `level` overrides `CHECKERS_LOG`.
/// Calling it again only adjusts the level.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = level.unwrap_or_else(level_from_env);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
