//! Outbound event sink.
//!
//! In the browser this is the LiveView hook's `pushEvent`; elsewhere a
//! [`RecordingChannel`] captures events in order.

use std::cell::RefCell;
use std::rc::Rc;

use crate::events::Outbound;

#[cfg(test)]
#[path = "channel_test.rs"]
mod tests;

/// Fire-and-forget delivery of outbound events to the server.
pub trait EventChannel {
    fn push(&self, event: Outbound);
}

impl<T: EventChannel + ?Sized> EventChannel for &T {
    fn push(&self, event: Outbound) {
        (**self).push(event);
    }
}

impl<T: EventChannel + ?Sized> EventChannel for Rc<T> {
    fn push(&self, event: Outbound) {
        (**self).push(event);
    }
}

/// Channel that keeps every pushed event.
#[derive(Debug, Default)]
pub struct RecordingChannel {
    events: RefCell<Vec<Outbound>>,
}

impl RecordingChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of events pushed so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<Outbound> {
        self.events.borrow().clone()
    }

    /// Drain recorded events.
    pub fn take(&self) -> Vec<Outbound> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl EventChannel for RecordingChannel {
    fn push(&self, event: Outbound) {
        self.events.borrow_mut().push(event);
    }
}

/// Channel over a JS `pushEvent(name, payload)` function.
#[cfg(feature = "browser")]
#[derive(Debug, Clone)]
pub struct HookChannel {
    push_event: js_sys::Function,
}

#[cfg(feature = "browser")]
impl HookChannel {
    #[must_use]
    pub fn new(push_event: js_sys::Function) -> Self {
        Self { push_event }
    }
}

#[cfg(feature = "browser")]
impl EventChannel for HookChannel {
    fn push(&self, event: Outbound) {
        use wasm_bindgen::JsValue;

        let name = event.name();
        let encoded = match event.payload() {
            Ok(encoded) => encoded,
            Err(err) => {
                log::warn!("push {name}: payload encoding failed: {err}");
                return;
            }
        };
        let payload = match js_sys::JSON::parse(&encoded.to_string()) {
            Ok(payload) => payload,
            Err(err) => {
                log::warn!("push {name}: payload conversion failed: {err:?}");
                return;
            }
        };
        if let Err(err) = self.push_event.call2(&JsValue::NULL, &JsValue::from_str(name), &payload) {
            log::warn!("push {name}: pushEvent threw: {err:?}");
        }
    }
}
