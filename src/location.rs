//! Location provider seam and platform error-code mapping.
//!
//! The browser reports a position through two callbacks, exactly one of
//! which fires per request. [`LocationProvider::current_position`] folds
//! them into a single future resolving to `Result<Position, LocationError>`.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;

use crate::config::PositionOptions;
use crate::error::LocationError;

#[cfg(test)]
#[path = "location_test.rs"]
mod tests;

/// `GeolocationPositionError.PERMISSION_DENIED`
pub const PERMISSION_DENIED: u16 = 1;
/// `GeolocationPositionError.POSITION_UNAVAILABLE`
pub const POSITION_UNAVAILABLE: u16 = 2;
/// `GeolocationPositionError.TIMEOUT`
pub const TIMEOUT: u16 = 3;

/// A single position fix in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationError {
    /// Map a platform error code onto the closed error set.
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            PERMISSION_DENIED => Self::PermissionDenied,
            POSITION_UNAVAILABLE => Self::PositionUnavailable,
            TIMEOUT => Self::Timeout,
            other => Self::Unknown(other),
        }
    }
}

/// Source of position fixes.
pub trait LocationProvider {
    /// Whether the platform exposes a location capability at all.
    fn is_supported(&self) -> bool;

    /// Issue one position request and resolve with its single outcome.
    fn current_position(&self, options: PositionOptions) -> impl Future<Output = Result<Position, LocationError>>;
}

impl<T: LocationProvider> LocationProvider for &T {
    fn is_supported(&self) -> bool {
        (**self).is_supported()
    }

    fn current_position(&self, options: PositionOptions) -> impl Future<Output = Result<Position, LocationError>> {
        (**self).current_position(options)
    }
}

/// Provider for platforms without any location service.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn is_supported(&self) -> bool {
        false
    }

    fn current_position(&self, _options: PositionOptions) -> impl Future<Output = Result<Position, LocationError>> {
        std::future::ready(Err(LocationError::Unsupported))
    }
}

/// Single-use reply slot shared by the success and error callbacks of one
/// position request. The first `settle` wins; later ones are dropped.
#[derive(Debug, Clone)]
pub struct ReplySlot {
    tx: Rc<RefCell<Option<oneshot::Sender<Result<Position, LocationError>>>>>,
}

impl ReplySlot {
    #[must_use]
    pub fn new() -> (Self, oneshot::Receiver<Result<Position, LocationError>>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx: Rc::new(RefCell::new(Some(tx))) }, rx)
    }

    /// Deliver `result` unless the slot already settled. Returns whether
    /// this call delivered.
    pub fn settle(&self, result: Result<Position, LocationError>) -> bool {
        let Some(tx) = self.tx.borrow_mut().take() else {
            log::warn!("geolocation: callback fired after request settled");
            return false;
        };
        if tx.send(result).is_err() {
            log::debug!("geolocation: request dropped before result arrived");
            return false;
        }
        true
    }

    /// Await the settled reply. A slot dropped without settling reads as
    /// an unavailable position.
    pub async fn outcome(rx: oneshot::Receiver<Result<Position, LocationError>>) -> Result<Position, LocationError> {
        match rx.await {
            Ok(result) => result,
            Err(oneshot::Canceled) => Err(LocationError::PositionUnavailable),
        }
    }
}

#[cfg(feature = "browser")]
pub use browser::BrowserGeolocation;

#[cfg(feature = "browser")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use super::{LocationProvider, Position, ReplySlot};
    use crate::config::PositionOptions;
    use crate::error::LocationError;

    /// `navigator.geolocation`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserGeolocation;

    impl BrowserGeolocation {
        fn geolocation() -> Option<web_sys::Geolocation> {
            let navigator = web_sys::window()?.navigator();
            // The binding getter does not fail on a missing property, so probe it.
            let raw = match js_sys::Reflect::get(&navigator, &JsValue::from_str("geolocation")) {
                Ok(raw) => raw,
                Err(_) => return None,
            };
            if raw.is_undefined() || raw.is_null() {
                return None;
            }
            Some(raw.unchecked_into())
        }
    }

    impl LocationProvider for BrowserGeolocation {
        fn is_supported(&self) -> bool {
            Self::geolocation().is_some()
        }

        async fn current_position(&self, options: PositionOptions) -> Result<Position, LocationError> {
            let Some(geolocation) = Self::geolocation() else {
                return Err(LocationError::Unsupported);
            };

            let (slot, rx) = ReplySlot::new();
            let on_success = {
                let slot = slot.clone();
                Closure::<dyn FnMut(web_sys::GeolocationPosition)>::new(move |fix: web_sys::GeolocationPosition| {
                    let coords = fix.coords();
                    slot.settle(Ok(Position { latitude: coords.latitude(), longitude: coords.longitude() }));
                })
            };
            let on_error = Closure::<dyn FnMut(web_sys::GeolocationPositionError)>::new(
                move |err: web_sys::GeolocationPositionError| {
                    slot.settle(Err(LocationError::from_code(err.code())));
                },
            );

            let js_options = web_sys::PositionOptions::new();
            js_options.set_enable_high_accuracy(options.enable_high_accuracy);
            js_options.set_timeout(options.timeout_ms);
            js_options.set_maximum_age(options.maximum_age_ms);

            if let Err(err) = geolocation.get_current_position_with_error_callback_and_options(
                on_success.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
                &js_options,
            ) {
                log::warn!("geolocation: getCurrentPosition threw: {err:?}");
                return Err(LocationError::PositionUnavailable);
            }

            // Both closures must outlive the platform callback.
            let result = ReplySlot::outcome(rx).await;
            drop(on_success);
            drop(on_error);
            result
        }
    }
}
