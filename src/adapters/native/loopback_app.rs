use crate::domain::player::{InitOptions, PlaybackError};
use crate::ports::{BeepHandler, HostAppPort, NotificationChannelPort};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct LoopbackState {
    inits: RefCell<Vec<InitOptions>>,
    handlers: RefCell<Vec<BeepHandler>>,
    init_failure: RefCell<Option<PlaybackError>>,
}

/// In-process host application: Rust code raises the beeps.
///
/// Records how it was initialized and who subscribed, so the wiring can be
/// checked without a browser.
#[derive(Clone, Default)]
pub struct LoopbackApp {
    state: Rc<LoopbackState>,
}

impl LoopbackApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose initialization fails with `error`.
    pub fn failing(error: PlaybackError) -> Self {
        let app = Self::new();
        *app.state.init_failure.borrow_mut() = Some(error);
        app
    }

    /// Raise one beep, running every subscribed handler.
    pub fn beep(&self) {
        for handler in self.state.handlers.borrow().iter() {
            handler();
        }
    }

    pub fn subscription_count(&self) -> usize {
        self.state.handlers.borrow().len()
    }

    pub fn init_count(&self) -> usize {
        self.state.inits.borrow().len()
    }

    pub fn last_options(&self) -> Option<InitOptions> {
        self.state.inits.borrow().last().cloned()
    }
}

/// `beep` channel of a [`LoopbackApp`].
#[derive(Clone)]
pub struct LoopbackChannel {
    state: Rc<LoopbackState>,
}

impl HostAppPort for LoopbackApp {
    type Channel = LoopbackChannel;

    fn init(&self, options: &InitOptions) -> Result<Self::Channel, PlaybackError> {
        if let Some(error) = self.state.init_failure.borrow().clone() {
            return Err(error);
        }
        self.state.inits.borrow_mut().push(options.clone());
        Ok(LoopbackChannel {
            state: Rc::clone(&self.state),
        })
    }
}

impl NotificationChannelPort for LoopbackChannel {
    fn subscribe(&self, handler: BeepHandler) -> Result<(), PlaybackError> {
        self.state.handlers.borrow_mut().push(handler);
        Ok(())
    }
}
