use super::error_conversions::js_message;
use crate::domain::player::{InitOptions, PlaybackError};
use crate::ports::{BeepHandler, HostAppPort, NotificationChannelPort};
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const MODULE: &str = "Main";
const PORT: &str = "beep";

fn property(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// The compiled Elm program, reached through the global `Elm.Main`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ElmApp;

impl ElmApp {
    pub fn new() -> Self {
        Self
    }

    fn options_object(options: &InitOptions) -> Result<Option<Object>, PlaybackError> {
        let Some(mount) = &options.mount else {
            return Ok(None);
        };
        let config = Object::new();
        Reflect::set(
            &config,
            &JsValue::from_str("mount"),
            &JsValue::from_str(mount.as_str()),
        )
        .map_err(|e| PlaybackError::HostUnavailable(js_message(&e)))?;
        Ok(Some(config))
    }
}

impl HostAppPort for ElmApp {
    type Channel = ElmPort;

    fn init(&self, options: &InitOptions) -> Result<ElmPort, PlaybackError> {
        let elm = property(&js_sys::global(), "Elm")
            .ok_or_else(|| PlaybackError::HostUnavailable("Elm is not defined".to_string()))?;
        let main = property(&elm, MODULE).ok_or_else(|| {
            PlaybackError::HostUnavailable(format!("Elm.{MODULE} is not defined"))
        })?;
        let init: Function = property(&main, "init")
            .and_then(|init| init.dyn_into().ok())
            .ok_or_else(|| {
                PlaybackError::HostUnavailable(format!("Elm.{MODULE}.init is not a function"))
            })?;

        let app = match Self::options_object(options)? {
            Some(config) => init.call1(&main, &config),
            None => init.call0(&main),
        }
        .map_err(|e| PlaybackError::HostUnavailable(js_message(&e)))?;

        let port = property(&app, "ports")
            .and_then(|ports| property(&ports, PORT))
            .ok_or_else(|| {
                PlaybackError::ChannelUnavailable(format!("app.ports.{PORT} is not defined"))
            })?;

        Ok(ElmPort { port })
    }
}

/// The application's outgoing `beep` port.
#[derive(Clone, Debug)]
pub struct ElmPort {
    port: JsValue,
}

impl NotificationChannelPort for ElmPort {
    fn subscribe(&self, handler: BeepHandler) -> Result<(), PlaybackError> {
        let subscribe: Function = property(&self.port, "subscribe")
            .and_then(|subscribe| subscribe.dyn_into().ok())
            .ok_or_else(|| {
                PlaybackError::ChannelUnavailable(format!(
                    "app.ports.{PORT}.subscribe is not a function"
                ))
            })?;

        let callback = Closure::wrap(handler);
        subscribe
            .call1(&self.port, callback.as_ref())
            .map_err(|e| PlaybackError::ChannelUnavailable(js_message(&e)))?;

        // Subscribed for the lifetime of the page.
        callback.forget();
        Ok(())
    }
}
