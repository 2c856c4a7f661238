/// Logger port - provides logging capabilities across platforms.
///
/// - WASM: browser console
/// - Native: stdout / stderr
pub trait LoggerPort: Send + Sync {
    fn log(&self, message: &str);

    fn error(&self, message: &str);

    fn warn(&self, message: &str);

    /// Start a timer with the given label.
    fn time(&self, label: &str);

    /// End a timer and log the elapsed duration.
    fn time_end(&self, label: &str);
}
