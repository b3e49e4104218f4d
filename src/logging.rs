use std::env;
use std::io::Write;

use log::{LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // stdout belongs to the board display
            let _ = writeln!(std::io::stderr(), "{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Initialize logging with a level taken from the `SEABATTLE_LOG` environment variable.
/// Falls back to `default` if the variable is not set or invalid.
pub fn init_logging(default: LevelFilter) {
    let level = env::var("SEABATTLE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(default);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
