//! Routes `log` records to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use zoon::{eprintln, println};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Error | Level::Warn => {
                eprintln!("[{}] {}: {}", record.level(), record.target(), record.args())
            }
            _ => println!("[{}] {}: {}", record.level(), record.target(), record.args()),
        }
    }

    fn flush(&self) {}
}

/// Debug output in dev builds, info and above in release builds.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
