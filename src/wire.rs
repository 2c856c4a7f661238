use crate::domain::player::{InitOptions, NotificationPlayer, PlaybackError};
use crate::platform::Platform;
use crate::ports::{AudioPort, HostAppPort, NotificationChannelPort};
use crate::time_it;
use once_cell::unsync::OnceCell;
use std::rc::Rc;

/// The one player wired for this page.
///
/// Only the first successful startup fills the slot; later attempts get
/// `AlreadySubscribed` without the host application or the audio being
/// touched. A failed startup leaves the slot empty.
pub struct PlayerSlot<A: AudioPort> {
    player: OnceCell<Rc<NotificationPlayer<A>>>,
}

impl<A: AudioPort + 'static> PlayerSlot<A> {
    pub const fn new() -> Self {
        Self {
            player: OnceCell::new(),
        }
    }

    /// Acquire the audio, then wire it like [`wire_player`], at most once.
    pub fn wire<H, F>(
        &self,
        host: &H,
        acquire: F,
        options: &InitOptions,
        platform: Platform,
    ) -> Result<Rc<NotificationPlayer<A>>, PlaybackError>
    where
        H: HostAppPort,
        F: FnOnce() -> Result<A, PlaybackError>,
    {
        if self.player.get().is_some() {
            platform
                .logger()
                .warn("Bell already started, ignoring another startup");
            return Err(PlaybackError::AlreadySubscribed);
        }

        let player = wire_player(host, acquire()?, options, platform)?;
        self.player
            .set(Rc::clone(&player))
            .map_err(|_| PlaybackError::AlreadySubscribed)?;
        Ok(player)
    }

    pub fn get(&self) -> Option<Rc<NotificationPlayer<A>>> {
        self.player.get().cloned()
    }
}

impl<A: AudioPort + 'static> Default for PlayerSlot<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Boot the host application and connect its `beep` channel to the bell.
///
/// `audio` must already be acquired; nothing checks that the sound exists
/// until it is first played.
pub fn wire_player<H, A>(
    host: &H,
    audio: A,
    options: &InitOptions,
    platform: Platform,
) -> Result<Rc<NotificationPlayer<A>>, PlaybackError>
where
    H: HostAppPort,
    A: AudioPort + 'static,
{
    time_it!(
        platform,
        "bellhop:wire",
        connect(host, audio, options, platform)
    )
}

fn connect<H, A>(
    host: &H,
    audio: A,
    options: &InitOptions,
    platform: Platform,
) -> Result<Rc<NotificationPlayer<A>>, PlaybackError>
where
    H: HostAppPort,
    A: AudioPort + 'static,
{
    let player = Rc::new(NotificationPlayer::new(audio, platform));

    let channel = host.init(options).map_err(|err| {
        platform
            .logger()
            .error(&format!("Failed to initialize host application: {err}"));
        err
    })?;
    subscribe(&player, &channel)?;

    match &options.mount {
        Some(mount) => platform
            .logger()
            .log(&format!("Bell wired to beep channel, app mounted in #{mount}")),
        None => platform.logger().log("Bell wired to beep channel"),
    }

    Ok(player)
}

/// Register the player's one callback on `channel`.
pub fn subscribe<A, C>(player: &Rc<NotificationPlayer<A>>, channel: &C) -> Result<(), PlaybackError>
where
    A: AudioPort + 'static,
    C: NotificationChannelPort,
{
    if player.is_ready() {
        return Err(PlaybackError::AlreadySubscribed);
    }

    let handler_player = Rc::clone(player);
    channel.subscribe(Box::new(move || {
        // Already logged and counted by the player.
        let _ = handler_player.on_notify();
    }))?;

    player.mark_ready()
}
