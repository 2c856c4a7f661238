use crate::ports::LoggerPort;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

/// Native logger writing to stdout / stderr.
#[derive(Debug, Default)]
pub struct ConsoleLogger {
    timers: Mutex<HashMap<String, Instant>>,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("[LOG] {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("[ERROR] {message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("[WARN] {message}");
    }

    fn time(&self, label: &str) {
        if let Ok(mut timers) = self.timers.lock() {
            timers.insert(label.to_string(), Instant::now());
        }
    }

    fn time_end(&self, label: &str) {
        let started = self
            .timers
            .lock()
            .ok()
            .and_then(|mut timers| timers.remove(label));
        match started {
            Some(started) => println!("[TIME] {label}: {:?}", started.elapsed()),
            None => self.warn(&format!("Timer '{label}' does not exist")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_all_methods() {
        let logger = ConsoleLogger::new();
        logger.log("test log");
        logger.warn("test warn");
        logger.error("test error");
        logger.time("test_timer");
        logger.time_end("test_timer");
    }

    #[test]
    fn test_timer_is_removed_once_ended() {
        let logger = ConsoleLogger::new();
        logger.time("wiring");
        assert!(logger.timers.lock().unwrap().contains_key("wiring"));

        logger.time_end("wiring");
        assert!(logger.timers.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_timer_only_warns() {
        let logger = ConsoleLogger::new();
        logger.time("startup");

        logger.time_end("never-started");

        assert!(logger.timers.lock().unwrap().contains_key("startup"));
    }
}
