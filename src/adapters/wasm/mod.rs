/// WASM adapters - implementations using browser APIs.

pub mod console_logger;
pub mod elm_app;
pub mod error_conversions;
pub mod html_audio;

pub use console_logger::ConsoleLogger;
pub use elm_app::{ElmApp, ElmPort};
pub use html_audio::HtmlAudio;
