use crate::domain::player::PlaybackError;
use wasm_bindgen::JsValue;

/// Best-effort readable text for a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

/// A JS exception raised by the media element while playing.
impl From<JsValue> for PlaybackError {
    fn from(err: JsValue) -> Self {
        PlaybackError::PlaybackRejected(js_message(&err))
    }
}

/// Conversion from PlaybackError to a thrown JS `Error`.
impl From<PlaybackError> for JsValue {
    fn from(error: PlaybackError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}
