#![cfg(feature = "serde")]

use robot_keyboard::{KeyCode, KeyEvent, KeyboardBuilder, Modifiers, NamedKey};
mod support;
use support::fake_source::FakeInputSource;

#[test]
fn builder_loads_period_from_settings() {
    let builder: KeyboardBuilder = serde_json::from_str(r#"{"sampling_period": 16}"#).unwrap();
    let kb = builder.build(FakeInputSource::new(32));
    assert_eq!(kb.sampling_period(), 16);
}

#[test]
fn missing_period_falls_back_to_step_length() {
    let builder: KeyboardBuilder = serde_json::from_str("{}").unwrap();
    assert_eq!(builder, KeyboardBuilder::default());
    let kb = builder.build(FakeInputSource::new(32));
    assert_eq!(kb.sampling_period(), 32);
}

#[test]
fn key_event_survives_json() {
    let ev = KeyEvent::new(
        KeyCode::Named(NamedKey::PageDown),
        Modifiers::SHIFT | Modifiers::CONTROL,
    );
    let json = serde_json::to_string(&ev).unwrap();
    let back: KeyEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ev);
}
