pub mod error;
pub mod operations;
pub mod types;

pub use error::PlaybackError;
pub use operations::NotificationPlayer;
pub use types::{InitOptions, MountPoint, PlaybackStats, PlayerState, BELL_SOUND_PATH};
