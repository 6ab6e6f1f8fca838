//! # word-bump-hooks
//!
//! Browser-side hook for the word bump LiveView page, compiled to
//! WebAssembly. The hook persists the player's current word in
//! `localStorage` and answers location requests from the server through the
//! browser geolocation API.
//!
//! The [`bridge::LocationManager`] core takes its three collaborators
//! (store, location provider, event channel) as parameters, so every
//! behavior runs natively in tests against in-memory fakes. The `browser`
//! feature adds the `web-sys` adapters and the `#[wasm_bindgen]` export that
//! the JS hook host mounts.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`bridge`] | The `LocationManager` component and hook registry |
//! | [`channel`] | Outbound event sink (`pushEvent`) |
//! | [`config`] | Storage key and position request options |
//! | [`error`] | Error taxonomy |
//! | [`events`] | Inbound/outbound event model and JSON payloads |
//! | [`location`] | Location provider seam and platform error mapping |
//! | [`storage`] | Persistent word store |
//! | `wasm` | JS export, `browser` feature only |

pub mod bridge;
pub mod channel;
pub mod config;
pub mod error;
pub mod events;
pub mod location;
pub mod storage;

#[cfg(feature = "browser")]
pub mod wasm;

pub use bridge::{LocationManager, register_hooks};
pub use config::BridgeConfig;
pub use error::{ConfigError, EventError, LocationError, StorageError};
pub use events::{Inbound, Outbound};
