// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON shape of tagged actions, as fed by hosts that route events by name.

#![cfg(feature = "serde")]

use understory_carousel::{Action, InvalidAction, RawAction};

#[test]
fn reads_tagged_actions() {
    let goto: RawAction = serde_json::from_str(r#"{"type":"goto","payload":{"index":2}}"#).unwrap();
    assert_eq!(Action::try_from(goto), Ok(Action::GoTo(2)));

    let down: RawAction =
        serde_json::from_str(r#"{"type":"pointerdown","payload":{"x":12.5}}"#).unwrap();
    assert_eq!(Action::try_from(down), Ok(Action::PointerDown(12.5)));

    let next: RawAction = serde_json::from_str(r#"{"type":"next"}"#).unwrap();
    assert_eq!(Action::try_from(next), Ok(Action::Next));
}

#[test]
fn unknown_type_parses_but_does_not_convert() {
    let raw: RawAction = serde_json::from_str(r#"{"type":"pointerleave"}"#).unwrap();
    assert!(matches!(
        Action::try_from(raw),
        Err(InvalidAction::UnknownKind { .. })
    ));
}

#[test]
fn writes_only_present_payload_fields() {
    let json = serde_json::to_string(&RawAction::from(Action::GoTo(1))).unwrap();
    assert_eq!(json, r#"{"type":"goto","payload":{"index":1}}"#);
}
