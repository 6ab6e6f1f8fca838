//! JS export mounted by the LiveView hook host.
//!
//! The host-side hook stays a few lines of glue:
//!
//! ```js
//! import init, { LocationManagerHook } from "word_bump_hooks";
//!
//! Hooks.LocationManager = {
//!   async mounted() {
//!     await init();
//!     this.bridge = LocationManagerHook.mount((name, payload) => this.pushEvent(name, payload));
//!     this.handleEvent("word_updated", (payload) => this.bridge.handleEvent("word_updated", payload));
//!     this.handleEvent("get_location", (payload) => this.bridge.handleEvent("get_location", payload));
//!   },
//! };
//! ```

use std::rc::Rc;

use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::bridge::LocationManager;
use crate::channel::HookChannel;
use crate::config::BridgeConfig;
use crate::location::BrowserGeolocation;
use crate::storage::LocalStorage;

type BrowserBridge = LocationManager<LocalStorage, BrowserGeolocation, HookChannel>;

/// Install the panic hook and console logger once per module instance.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A logger may already be installed by the embedding page.
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("word-bump-hooks: console logger not installed: {err}")));
    }
}

#[wasm_bindgen]
pub struct LocationManagerHook {
    bridge: Rc<BrowserBridge>,
}

#[wasm_bindgen]
impl LocationManagerHook {
    /// Mount the hook. `push_event` forwards to the hook's `pushEvent`;
    /// `config` is an optional partial [`BridgeConfig`] object.
    ///
    /// # Errors
    ///
    /// Throws when `config` is present but malformed.
    pub fn mount(push_event: js_sys::Function, config: JsValue) -> Result<LocationManagerHook, JsValue> {
        let config = match js_to_json(&config)? {
            Value::Null => BridgeConfig::default(),
            raw => BridgeConfig::from_json(&raw.to_string()).map_err(to_js_error)?,
        };
        log::debug!("hook: mounting LocationManager with storage key {}", config.storage_key);
        let bridge = LocationManager::with_config(config, LocalStorage, BrowserGeolocation, HookChannel::new(push_event));
        Ok(Self { bridge: Rc::new(bridge) })
    }

    /// Deliver a server event. `get_location` replies asynchronously.
    ///
    /// # Errors
    ///
    /// Throws for unknown event names and malformed payloads.
    #[wasm_bindgen(js_name = handleEvent)]
    pub fn handle_event(&self, name: &str, payload: JsValue) -> Result<(), JsValue> {
        let payload = js_to_json(&payload)?;
        let reply = self.bridge.handle_event_shared(name, &payload).map_err(to_js_error)?;
        wasm_bindgen_futures::spawn_local(reply);
        Ok(())
    }
}

fn js_to_json(value: &JsValue) -> Result<Value, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(Value::Null);
    }
    let raw = String::from(js_sys::JSON::stringify(value)?);
    serde_json::from_str(&raw).map_err(to_js_error)
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
