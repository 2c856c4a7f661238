// Hexagonal layout: the domain never touches the browser directly.
pub mod adapters;
pub mod domain;
pub mod platform;
pub mod ports;

pub mod debug;
pub mod wire;

#[cfg(target_arch = "wasm32")]
pub mod facades;

pub use domain::player::{
    InitOptions, MountPoint, NotificationPlayer, PlaybackError, PlaybackStats, PlayerState,
    BELL_SOUND_PATH,
};
pub use platform::Platform;
pub use wire::wire_player;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
