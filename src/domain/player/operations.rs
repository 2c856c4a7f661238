use super::error::PlaybackError;
use super::types::{PlaybackStats, PlayerState};
use crate::debug::is_debug;
use crate::platform::Platform;
use crate::ports::AudioPort;
use std::cell::Cell;

/// Rings the bell whenever the host application beeps.
///
/// Created once at startup and shared with the subscription callback. Every
/// notification issues exactly one play command; a failed play is logged and
/// counted but never stops the next one.
pub struct NotificationPlayer<A: AudioPort> {
    audio: A,
    platform: Platform,
    state: Cell<PlayerState>,
    stats: Cell<PlaybackStats>,
}

impl<A: AudioPort> NotificationPlayer<A> {
    pub fn new(audio: A, platform: Platform) -> Self {
        Self {
            audio,
            platform,
            state: Cell::new(PlayerState::Uninitialized),
            stats: Cell::new(PlaybackStats::default()),
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state.get()
    }

    pub fn is_ready(&self) -> bool {
        self.state.get() == PlayerState::Ready
    }

    /// Records that the player's callback is registered. Only allowed once.
    pub fn mark_ready(&self) -> Result<(), PlaybackError> {
        if self.is_ready() {
            return Err(PlaybackError::AlreadySubscribed);
        }
        self.state.set(PlayerState::Ready);
        Ok(())
    }

    /// Handle one beep from the host application.
    pub fn on_notify(&self) -> Result<(), PlaybackError> {
        let mut stats = self.stats.get();
        stats.notifications = stats.notifications.saturating_add(1);

        if is_debug() {
            self.platform
                .logger()
                .log(&format!("Beep #{} received", stats.notifications));
        }

        let result = self.audio.play();
        if let Err(err) = &result {
            stats.failures = stats.failures.saturating_add(1);
            self.platform
                .logger()
                .warn(&format!("Bell playback failed: {err}"));
        }

        self.stats.set(stats);
        result
    }

    pub fn stats(&self) -> PlaybackStats {
        let mut stats = self.stats.get();
        stats.failures = stats
            .failures
            .saturating_add(self.audio.deferred_failures());
        stats
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    fn audio(&self) -> &A {
        &self.audio
    }
}
