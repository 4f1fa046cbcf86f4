//! Ring Logger
//!
//! A `log` backend that keeps the most recent lines in a circular buffer
//! and forwards every line to the browser console (stderr off wasm).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<RingLogger> = OnceLock::new();

/// Install the global logger. Fails if a logger is already installed.
pub fn init_logger(app_name: &str, capacity: usize, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RingLogger::new(app_name, capacity, level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines kept by the installed logger, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RingLogger::recent_lines).unwrap_or_default()
}

pub struct RingLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RingLogger {
    pub fn new(app_name: &str, capacity: usize, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    pub fn recent_lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn push(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

/// `[12:30:01.123] WARN  App pocket_core::repository: message`
fn format_line(time: &str, app_name: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{}] {:<5} {} {}: {}", time, level, app_name, target, message)
}

impl Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let time = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(
            &time,
            &self.app_name,
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use web_sys::console;
    match level {
        Level::Error => console::error_1(&line.into()),
        Level::Warn => console::warn_1(&line.into()),
        Level::Info => console::info_1(&line.into()),
        Level::Debug | Level::Trace => console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_at(logger: &RingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_buffer_drops_oldest() {
        let logger = RingLogger::new("App", 2, LevelFilter::Debug);
        log_at(&logger, Level::Info, "one");
        log_at(&logger, Level::Info, "two");
        log_at(&logger, Level::Info, "three");

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("test: two"));
        assert!(lines[1].ends_with("test: three"));
    }

    #[test]
    fn test_level_filter() {
        let logger = RingLogger::new("App", 8, LevelFilter::Warn);
        log_at(&logger, Level::Debug, "hidden");
        log_at(&logger, Level::Error, "shown");
        assert_eq!(logger.recent_lines().len(), 1);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let logger = RingLogger::new("App", 0, LevelFilter::Info);
        log_at(&logger, Level::Info, "a");
        log_at(&logger, Level::Info, "b");
        assert_eq!(logger.recent_lines().len(), 1);
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line("08:00:00.000", "Pocket", Level::Warn, "todo", "rejected"),
            "[08:00:00.000] WARN  Pocket todo: rejected"
        );
    }
}
