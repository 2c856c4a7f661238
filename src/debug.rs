use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Log every beep and time the startup wiring.
#[wasm_bindgen]
pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::SeqCst);
}

pub fn is_debug() -> bool {
    DEBUG_MODE.load(Ordering::SeqCst)
}

#[macro_export]
macro_rules! time_it {
    ($platform:expr, $label:expr, $block:expr) => {{
        let debug = $crate::debug::is_debug();
        if debug {
            $platform.logger().time($label);
        }
        let result = $block;
        if debug {
            $platform.logger().time_end($label);
        }
        result
    }};
}

pub use crate::time_it;
