use crate::ports::LoggerPort;
use wasm_bindgen::JsValue;
use web_sys::console;

const PREFIX: &str = "[bellhop]";

/// Logger writing to the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }

    fn line(message: &str) -> JsValue {
        JsValue::from_str(&format!("{PREFIX} {message}"))
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        console::log_1(&Self::line(message));
    }

    fn error(&self, message: &str) {
        console::error_1(&Self::line(message));
    }

    fn warn(&self, message: &str) {
        console::warn_1(&Self::line(message));
    }

    fn time(&self, label: &str) {
        console::time_with_label(label);
    }

    fn time_end(&self, label: &str) {
        console::time_end_with_label(label);
    }
}
