use super::error_conversions::js_message;
use crate::domain::player::{PlaybackError, BELL_SOUND_PATH};
use crate::platform::Platform;
use crate::ports::AudioPort;
use js_sys::Reflect;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// The bell, backed by one `<audio>` element created at startup.
pub struct HtmlAudio {
    element: HtmlAudioElement,
    rejections: Rc<Cell<u32>>,
    platform: Platform,
}

impl HtmlAudio {
    /// Creates the element for `bell.mp3` and asks the browser to preload it.
    ///
    /// The file itself is not checked here; a missing or undecodable sound
    /// only shows up when it is played.
    pub fn new(platform: Platform) -> Result<Self, PlaybackError> {
        Self::with_source(BELL_SOUND_PATH, platform)
    }

    fn with_source(src: &str, platform: Platform) -> Result<Self, PlaybackError> {
        let element = HtmlAudioElement::new_with_src(src).map_err(|e| {
            PlaybackError::AudioUnavailable(format!(
                "Failed to create audio element for {src}: {}",
                js_message(&e)
            ))
        })?;
        element.set_preload("auto");

        Ok(Self {
            element,
            rejections: Rc::new(Cell::new(0)),
            platform,
        })
    }

    #[cfg(test)]
    fn element(&self) -> &HtmlAudioElement {
        &self.element
    }
}

/// Classify a rejected play promise.
///
/// `NotSupportedError` means the browser found no playable source, i.e. the
/// sound is missing or cannot be decoded.
fn rejection(err: &JsValue) -> PlaybackError {
    let name = Reflect::get(err, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string());
    match name.as_deref() {
        Some("NotSupportedError") => PlaybackError::ResourceUnavailable(js_message(err)),
        _ => PlaybackError::PlaybackRejected(js_message(err)),
    }
}

impl AudioPort for HtmlAudio {
    fn play(&self) -> Result<(), PlaybackError> {
        self.element.set_current_time(0.0);
        let promise = self.element.play()?;

        let rejections = Rc::clone(&self.rejections);
        let platform = self.platform;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                rejections.set(rejections.get().saturating_add(1));
                platform
                    .logger()
                    .warn(&format!("Bell playback failed: {}", rejection(&err)));
            }
        });

        Ok(())
    }

    fn deferred_failures(&self) -> u32 {
        self.rejections.get()
    }
}
