use crate::domain::player::PlaybackError;

/// Port for the one preloaded sound.
pub trait AudioPort {
    /// Issue a play command, restarting the sound from the beginning.
    ///
    /// Returns as soon as the command is issued; it never waits for the
    /// sound to finish.
    fn play(&self) -> Result<(), PlaybackError>;

    /// Failures reported after `play` already returned, such as a rejected
    /// play promise.
    fn deferred_failures(&self) -> u32 {
        0
    }
}
