use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    HostUnavailable(String),
    ChannelUnavailable(String),
    InvalidMountPoint(String),
    AlreadySubscribed,
    AudioUnavailable(String),
    ResourceUnavailable(String),
    PlaybackRejected(String),
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HostUnavailable(msg) => write!(f, "Host application unavailable: {msg}"),
            Self::ChannelUnavailable(msg) => write!(f, "Beep channel unavailable: {msg}"),
            Self::InvalidMountPoint(msg) => write!(f, "Invalid mount point: {msg}"),
            Self::AlreadySubscribed => write!(f, "Player is already subscribed"),
            Self::AudioUnavailable(msg) => write!(f, "Audio element unavailable: {msg}"),
            Self::ResourceUnavailable(msg) => write!(f, "Sound resource unavailable: {msg}"),
            Self::PlaybackRejected(msg) => write!(f, "Playback rejected: {msg}"),
        }
    }
}

impl std::error::Error for PlaybackError {}

impl PlaybackError {
    /// Whether the error can only happen while wiring the player, as opposed
    /// to while ringing the bell.
    pub fn is_startup_error(&self) -> bool {
        matches!(
            self,
            Self::HostUnavailable(_)
                | Self::ChannelUnavailable(_)
                | Self::InvalidMountPoint(_)
                | Self::AlreadySubscribed
                | Self::AudioUnavailable(_)
        )
    }
}
