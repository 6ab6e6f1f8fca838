//! Inbound and outbound hook events.
//!
//! Event names and payload shapes are the contract with the LiveView on the
//! server; they cross the JS boundary as JSON objects.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EventError, LocationError};
use crate::location::Position;

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

pub const WORD_UPDATED: &str = "word_updated";
pub const GET_LOCATION: &str = "get_location";
pub const UPDATE_WORD: &str = "update_word";
pub const LOCATION_RECEIVED: &str = "location_received";
pub const LOCATION_ERROR: &str = "location_error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPayload {
    pub word: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordsPayload {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

/// Event delivered by the server through `handleEvent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    WordUpdated { word: String },
    GetLocation,
}

impl Inbound {
    /// Decode a raw host event. `get_location` ignores its payload.
    ///
    /// # Errors
    ///
    /// [`EventError::UnknownEvent`] for names this hook does not handle and
    /// [`EventError::Payload`] when `word_updated` lacks a string `word`.
    pub fn parse(name: &str, payload: &Value) -> Result<Self, EventError> {
        match name {
            WORD_UPDATED => {
                let WordPayload { word } = WordPayload::deserialize(payload)
                    .map_err(|source| EventError::Payload { event: WORD_UPDATED, source })?;
                Ok(Self::WordUpdated { word })
            }
            GET_LOCATION => Ok(Self::GetLocation),
            other => Err(EventError::UnknownEvent(other.to_owned())),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::WordUpdated { .. } => WORD_UPDATED,
            Self::GetLocation => GET_LOCATION,
        }
    }
}

/// Event pushed to the server through `pushEvent`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    UpdateWord(WordPayload),
    LocationReceived(CoordsPayload),
    LocationError(ErrorPayload),
}

impl Outbound {
    #[must_use]
    pub fn update_word(word: impl Into<String>) -> Self {
        Self::UpdateWord(WordPayload { word: word.into() })
    }

    #[must_use]
    pub fn location_received(position: Position) -> Self {
        Self::LocationReceived(CoordsPayload { lat: position.latitude, lng: position.longitude })
    }

    #[must_use]
    pub fn location_error(error: LocationError) -> Self {
        Self::LocationError(ErrorPayload { error: error.to_string() })
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::UpdateWord(_) => UPDATE_WORD,
            Self::LocationReceived(_) => LOCATION_RECEIVED,
            Self::LocationError(_) => LOCATION_ERROR,
        }
    }

    /// JSON payload as sent to the server.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` encoding error.
    pub fn payload(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::UpdateWord(p) => serde_json::to_value(p),
            Self::LocationReceived(p) => serde_json::to_value(p),
            Self::LocationError(p) => serde_json::to_value(p),
        }
    }
}
