use crate::domain::player::PlaybackError;
use crate::ports::AudioPort;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Audio adapter that records play commands instead of producing sound.
///
/// Clones share their counters, so a caller can keep one clone while the
/// player owns another.
#[derive(Clone, Default)]
pub struct RecordingAudio {
    plays: Rc<Cell<u32>>,
    deferred: Rc<Cell<u32>>,
    failure: Rc<RefCell<Option<PlaybackError>>>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Audio whose every play command fails with `error`.
    pub fn failing(error: PlaybackError) -> Self {
        let audio = Self::new();
        audio.set_failure(Some(error));
        audio
    }

    pub fn set_failure(&self, error: Option<PlaybackError>) {
        *self.failure.borrow_mut() = error;
    }

    /// Count a failure reported after `play` returned.
    pub fn reject_later(&self) {
        self.deferred.set(self.deferred.get().saturating_add(1));
    }

    /// Play commands issued so far, failed ones included.
    pub fn play_count(&self) -> u32 {
        self.plays.get()
    }
}

impl AudioPort for RecordingAudio {
    fn play(&self) -> Result<(), PlaybackError> {
        self.plays.set(self.plays.get().saturating_add(1));
        match self.failure.borrow().as_ref() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn deferred_failures(&self) -> u32 {
        self.deferred.get()
    }
}
