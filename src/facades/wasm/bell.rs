use crate::adapters::wasm::{ElmApp, HtmlAudio};
use crate::domain::player::{InitOptions, MountPoint, NotificationPlayer};
use crate::platform::Platform;
use crate::wire::PlayerSlot;
use serde_wasm_bindgen::to_value;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

thread_local! {
    static BELL: PlayerSlot<HtmlAudio> = PlayerSlot::new();
}

/// Handle on the running bell, returned to JS by `start` / `start_in`.
///
/// Dropping it does not unsubscribe anything: the callback registered on the
/// beep port keeps the player alive for the rest of the page.
#[wasm_bindgen]
pub struct BellSession {
    player: Rc<NotificationPlayer<HtmlAudio>>,
}

#[wasm_bindgen]
impl BellSession {
    /// `{ notifications, failures }` counted since startup.
    pub fn stats(&self) -> Result<JsValue, JsValue> {
        to_value(&self.player.stats())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize stats: {e}")))
    }

    pub fn is_ready(&self) -> bool {
        self.player.is_ready()
    }
}

/// Boot `Elm.Main` over the whole page and ring the bell on every beep.
///
/// Only one bell runs per page: once `start` or `start_in` succeeded, both
/// throw `AlreadySubscribed`.
#[wasm_bindgen]
pub fn start() -> Result<BellSession, JsValue> {
    launch(InitOptions::full_page())
}

/// Same as `start`, with the application mounted in the element `mount`.
#[wasm_bindgen]
pub fn start_in(mount: String) -> Result<BellSession, JsValue> {
    launch(InitOptions::mounted(MountPoint::new(mount)?))
}

fn launch(options: InitOptions) -> Result<BellSession, JsValue> {
    let platform = Platform::new();
    let player = BELL.with(|slot| {
        slot.wire(
            &ElmApp::new(),
            || HtmlAudio::new(platform),
            &options,
            platform,
        )
    })?;
    Ok(BellSession { player })
}
