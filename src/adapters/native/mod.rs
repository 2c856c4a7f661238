/// Native adapters - in-process implementations used outside the browser.

pub mod console_logger;
pub mod loopback_app;
pub mod recording_audio;

pub use console_logger::ConsoleLogger;
pub use loopback_app::{LoopbackApp, LoopbackChannel};
pub use recording_audio::RecordingAudio;
