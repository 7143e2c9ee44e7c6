//! Console Logger
//!
//! A `log` backend for the browser. Each record goes to the `console.*`
//! method matching its level, prefixed with a local timestamp and the
//! record target. Off wasm32 the same lines go to stderr.

use std::fmt;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

const TIME_FORMAT: &str = "%H:%M:%S%.3f";

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger with the given maximum level.
///
/// Fails if another logger was installed first.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// `Debug` for debug builds, `Info` for release builds
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let now = chrono::Local::now().format(TIME_FORMAT).to_string();
        let line = format_line(&now, record.level(), record.target(), record.args());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

fn format_line(time: &str, level: Level, target: &str, args: &fmt::Arguments<'_>) -> String {
    format!("[{}] {:<5} {}: {}", time, level, target, args)
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line("12:30:05.042", Level::Error, "user_manager_core::reducer", &format_args!("Error adding user: {}", "boom"));
        assert_eq!(line, "[12:30:05.042] ERROR user_manager_core::reducer: Error adding user: boom");
    }

    #[test]
    fn test_level_is_padded() {
        let line = format_line("00:00:00.000", Level::Info, "ui", &format_args!("ready"));
        assert_eq!(line, "[00:00:00.000] INFO  ui: ready");
    }

    #[test]
    fn test_default_level_allows_info() {
        assert!(default_level() >= LevelFilter::Info);
    }
}
