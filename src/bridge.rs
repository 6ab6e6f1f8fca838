//! The `LocationManager` hook.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server LiveView mounts this hook on the word bump page. On mount the
//! hook restores the last word from persistent storage and pushes it to the
//! server; afterwards it mirrors every `word_updated` into storage and
//! answers `get_location` with exactly one `location_received` or
//! `location_error`.
//!
//! The host lifecycle is replaced by [`LocationManager::initialize`], which
//! takes the store, the location provider and the event channel as
//! parameters. Handlers take `&self` and hold no state across the location
//! await.
//!
//! Replies to `get_location` carry no request id. Overlapping requests are
//! answered in the order the platform settles them.

use std::collections::BTreeMap;
use std::future::{self, Future};
use std::rc::Rc;

use futures::future::Either;
use serde_json::Value;

use crate::channel::EventChannel;
use crate::config::BridgeConfig;
use crate::error::{EventError, LocationError, StorageError};
use crate::events::{Inbound, Outbound};
use crate::location::LocationProvider;
use crate::storage::WordStore;

#[cfg(test)]
#[path = "bridge_test.rs"]
mod tests;

/// Name the JS host registers the hook under.
pub const HOOK_NAME: &str = "LocationManager";

#[derive(Debug)]
pub struct LocationManager<S, L, C> {
    config: BridgeConfig,
    store: S,
    locator: L,
    channel: C,
}

/// Build the hook registry: hook name to mounted bridge.
pub fn register_hooks<S, L, C>(
    config: BridgeConfig,
    store: S,
    locator: L,
    channel: C,
) -> BTreeMap<&'static str, LocationManager<S, L, C>>
where
    S: WordStore,
    L: LocationProvider,
    C: EventChannel,
{
    let mut hooks = BTreeMap::new();
    hooks.insert(HOOK_NAME, LocationManager::with_config(config, store, locator, channel));
    hooks
}

impl<S, L, C> LocationManager<S, L, C>
where
    S: WordStore,
    L: LocationProvider,
    C: EventChannel,
{
    /// Mount with the default config.
    pub fn initialize(store: S, locator: L, channel: C) -> Self {
        Self::with_config(BridgeConfig::default(), store, locator, channel)
    }

    /// Mount: restore the stored word, if any, and push it to the server.
    pub fn with_config(config: BridgeConfig, store: S, locator: L, channel: C) -> Self {
        let bridge = Self { config, store, locator, channel };
        bridge.restore_word();
        bridge
    }

    #[must_use]
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    fn restore_word(&self) {
        match self.store.get(&self.config.storage_key) {
            Ok(Some(word)) if !word.is_empty() => {
                log::debug!("bridge: restoring stored word");
                self.channel.push(Outbound::update_word(word));
            }
            Ok(_) => {}
            // Treated as nothing stored.
            Err(err) => log::warn!("bridge: {err}"),
        }
    }

    /// Persist a word pushed by the server.
    ///
    /// # Errors
    ///
    /// Returns the store's [`StorageError`]; nothing is pushed to the server.
    pub fn on_word_updated(&self, word: &str) -> Result<(), StorageError> {
        self.store.set(&self.config.storage_key, word)
    }

    /// Answer one `get_location`.
    ///
    /// When the platform has no location service the `location_error` is
    /// pushed before this returns and the future is already complete.
    /// Otherwise the request is issued on first poll and the reply is pushed
    /// when the platform settles it.
    pub fn get_location(&self) -> impl Future<Output = ()> + '_ {
        if self.reject_unsupported() {
            return Either::Left(future::ready(()));
        }
        Either::Right(self.fetch_location())
    }

    /// [`Self::get_location`] for a bridge shared with a spawned task.
    pub fn get_location_shared(self: &Rc<Self>) -> impl Future<Output = ()> + use<S, L, C>
    where
        S: 'static,
        L: 'static,
        C: 'static,
    {
        if self.reject_unsupported() {
            return Either::Left(future::ready(()));
        }
        let this = Rc::clone(self);
        Either::Right(async move { this.fetch_location().await })
    }

    fn reject_unsupported(&self) -> bool {
        if self.locator.is_supported() {
            return false;
        }
        log::debug!("bridge: geolocation unsupported");
        self.channel.push(Outbound::location_error(LocationError::Unsupported));
        true
    }

    async fn fetch_location(&self) {
        let reply = match self.locator.current_position(self.config.position).await {
            Ok(position) => Outbound::location_received(position),
            Err(err) => {
                log::debug!("bridge: location request failed: {err:?}");
                Outbound::location_error(err)
            }
        };
        self.channel.push(reply);
    }

    /// Handle a decoded inbound event.
    pub fn handle(&self, event: Inbound) -> impl Future<Output = ()> + '_ {
        match event {
            Inbound::WordUpdated { word } => {
                self.store_word(&word);
                Either::Left(future::ready(()))
            }
            Inbound::GetLocation => Either::Right(self.get_location()),
        }
    }

    /// [`Self::handle`] for a bridge shared with a spawned task.
    pub fn handle_shared(self: &Rc<Self>, event: Inbound) -> impl Future<Output = ()> + use<S, L, C>
    where
        S: 'static,
        L: 'static,
        C: 'static,
    {
        match event {
            Inbound::WordUpdated { word } => {
                self.store_word(&word);
                Either::Left(future::ready(()))
            }
            Inbound::GetLocation => Either::Right(self.get_location_shared()),
        }
    }

    /// Decode and handle a raw host event.
    ///
    /// # Errors
    ///
    /// Returns [`EventError`] for unknown names or malformed payloads; no
    /// outbound event is pushed in that case.
    pub fn handle_event(&self, name: &str, payload: &Value) -> Result<impl Future<Output = ()> + '_, EventError> {
        Ok(self.handle(decode(name, payload)?))
    }

    /// [`Self::handle_event`] for a bridge shared with a spawned task.
    ///
    /// # Errors
    ///
    /// Same as [`Self::handle_event`].
    pub fn handle_event_shared(
        self: &Rc<Self>,
        name: &str,
        payload: &Value,
    ) -> Result<impl Future<Output = ()> + use<S, L, C>, EventError>
    where
        S: 'static,
        L: 'static,
        C: 'static,
    {
        Ok(self.handle_shared(decode(name, payload)?))
    }

    // Persistence is best-effort; the server already has the word.
    fn store_word(&self, word: &str) {
        if let Err(err) = self.on_word_updated(word) {
            log::warn!("bridge: {err}");
        }
    }
}

fn decode(name: &str, payload: &Value) -> Result<Inbound, EventError> {
    Inbound::parse(name, payload).inspect_err(|err| log::warn!("bridge: {err}"))
}
