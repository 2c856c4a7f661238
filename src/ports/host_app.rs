use crate::domain::player::{InitOptions, PlaybackError};

/// Zero-argument callback run for every beep.
pub type BeepHandler = Box<dyn Fn()>;

/// The host application's outbound `beep` channel.
pub trait NotificationChannelPort {
    fn subscribe(&self, handler: BeepHandler) -> Result<(), PlaybackError>;
}

/// Entry point of the host UI application.
pub trait HostAppPort {
    type Channel: NotificationChannelPort;

    /// Initialize the application and return its `beep` channel.
    fn init(&self, options: &InitOptions) -> Result<Self::Channel, PlaybackError>;
}
