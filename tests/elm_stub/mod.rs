#![allow(dead_code)]

use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = r#"
export function install_elm_stub() {
  const stub = { inits: [], handlers: [] };
  globalThis.Elm = {
    Main: {
      init(options) {
        stub.inits.push(options);
        return { ports: { beep: { subscribe(fn) { stub.handlers.push(fn); } } } };
      },
    },
  };
  return stub;
}

export function install_portless_elm() {
  globalThis.Elm = { Main: { init() { return { ports: {} }; } } };
}

export function remove_elm() {
  delete globalThis.Elm;
}

export function fire_beep(stub) {
  stub.handlers.forEach((fn) => fn(null));
}

export function subscription_count(stub) {
  return stub.handlers.length;
}

export function init_count(stub) {
  return stub.inits.length;
}

export function last_mount(stub) {
  const options = stub.inits[stub.inits.length - 1];
  return options === undefined ? undefined : options.mount;
}
"#)]
extern "C" {
    pub fn install_elm_stub() -> JsValue;
    pub fn install_portless_elm();
    pub fn remove_elm();
    pub fn fire_beep(stub: &JsValue);
    pub fn subscription_count(stub: &JsValue) -> u32;
    pub fn init_count(stub: &JsValue) -> u32;
    pub fn last_mount(stub: &JsValue) -> Option<String>;
}

#[derive(serde::Deserialize)]
pub struct Stats {
    pub notifications: u32,
    pub failures: u32,
}

pub fn notifications(session: &bellhop::facades::wasm::BellSession) -> u32 {
    let stats: Stats = serde_wasm_bindgen::from_value(session.stats().unwrap()).unwrap();
    assert!(stats.failures <= stats.notifications);
    stats.notifications
}

pub fn error_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .unwrap()
        .as_string()
        .unwrap()
}
