/// Ports module - the interfaces the player talks to.
///
/// Each trait is one side of the boundary the bell sits on: the host UI
/// application raising beeps, the media primitive playing the sound, and the
/// console receiving diagnostics.

pub mod audio;
pub mod host_app;
pub mod logger;

pub use audio::AudioPort;
pub use host_app::{BeepHandler, HostAppPort, NotificationChannelPort};
pub use logger::LoggerPort;
