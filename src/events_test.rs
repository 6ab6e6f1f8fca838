use super::*;
use serde_json::json;

#[test]
fn parse_word_updated_extracts_word() {
    let event = Inbound::parse("word_updated", &json!({ "word": "banana" })).unwrap();
    assert_eq!(event, Inbound::WordUpdated { word: "banana".into() });
    assert_eq!(event.name(), WORD_UPDATED);
}

#[test]
fn parse_word_updated_accepts_empty_word() {
    let event = Inbound::parse("word_updated", &json!({ "word": "" })).unwrap();
    assert_eq!(event, Inbound::WordUpdated { word: String::new() });
}

#[test]
fn parse_word_updated_rejects_missing_word() {
    let err = Inbound::parse("word_updated", &json!({})).unwrap_err();
    assert!(matches!(err, EventError::Payload { event: WORD_UPDATED, .. }));
}

#[test]
fn parse_word_updated_rejects_non_string_word() {
    let err = Inbound::parse("word_updated", &json!({ "word": 7 })).unwrap_err();
    assert!(err.to_string().starts_with("invalid payload for word_updated"));
}

#[test]
fn parse_get_location_ignores_payload() {
    assert_eq!(Inbound::parse("get_location", &Value::Null).unwrap(), Inbound::GetLocation);
    assert_eq!(Inbound::parse("get_location", &json!({ "extra": 1 })).unwrap(), Inbound::GetLocation);
}

#[test]
fn parse_unknown_event_is_rejected() {
    let err = Inbound::parse("reset", &Value::Null).unwrap_err();
    assert!(matches!(err, EventError::UnknownEvent(ref name) if name == "reset"));
}

#[test]
fn update_word_payload_shape() {
    let event = Outbound::update_word("kiwi");
    assert_eq!(event.name(), "update_word");
    assert_eq!(event.payload().unwrap(), json!({ "word": "kiwi" }));
}

#[test]
fn location_received_payload_shape() {
    let event = Outbound::location_received(Position { latitude: 12.34, longitude: -56.78 });
    assert_eq!(event.name(), "location_received");
    assert_eq!(event.payload().unwrap(), json!({ "lat": 12.34, "lng": -56.78 }));
}

#[test]
fn location_error_payload_uses_display_text() {
    let event = Outbound::location_error(LocationError::Timeout);
    assert_eq!(event.name(), "location_error");
    assert_eq!(event.payload().unwrap(), json!({ "error": "Location request timed out" }));
}

#[test]
fn non_finite_coordinates_encode_as_null() {
    let event = Outbound::location_received(Position { latitude: f64::NAN, longitude: 1.5 });
    assert_eq!(event.payload().unwrap(), json!({ "lat": null, "lng": 1.5 }));
}
