// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation actions.
//!
//! [`Action`] is the closed alphabet accepted by [`apply`](crate::apply).
//! Hosts that route events by string tag can build a [`RawAction`] and convert
//! it with [`Action::try_from`]; unknown tags and missing payloads are reported
//! as [`InvalidAction`].
//!
//! ```
//! use understory_carousel::{Action, ActionKind, RawAction};
//!
//! let action = Action::try_from(RawAction::with_index("goto", 2)).unwrap();
//! assert_eq!(action, Action::GoTo(2));
//! assert_eq!(action.kind(), ActionKind::GoTo);
//!
//! assert!(Action::try_from(RawAction::new("pointerleave")).is_err());
//! ```

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// A single input to the navigation state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Step one slide forward.
    Next,
    /// Step one slide back.
    Previous,
    /// Jump to the slide at the given index.
    GoTo(isize),
    /// Open a gesture session at the given horizontal page coordinate.
    PointerDown(f64),
    /// Update the open gesture session with a new horizontal page coordinate.
    PointerMove(f64),
    /// Release the open gesture session, committing or rolling back.
    PointerUp(f64),
    /// Abandon the open gesture session without changing slides.
    PointerCancel,
}

impl Action {
    /// Returns the tag of this action.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Next => ActionKind::Next,
            Self::Previous => ActionKind::Previous,
            Self::GoTo(_) => ActionKind::GoTo,
            Self::PointerDown(_) => ActionKind::PointerDown,
            Self::PointerMove(_) => ActionKind::PointerMove,
            Self::PointerUp(_) => ActionKind::PointerUp,
            Self::PointerCancel => ActionKind::PointerCancel,
        }
    }

    /// Builds a [`GoTo`](Self::GoTo) action from an unsigned slide index.
    ///
    /// Indices beyond `isize::MAX` saturate and are then rejected (or wrapped)
    /// by the boundary policy like any other out-of-range index.
    #[must_use]
    pub fn go_to(index: usize) -> Self {
        Self::GoTo(isize::try_from(index).unwrap_or(isize::MAX))
    }
}

/// Tag of an [`Action`], as used by hosts that dispatch by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// `"next"`
    Next,
    /// `"previous"`
    Previous,
    /// `"goto"`
    GoTo,
    /// `"pointerdown"`
    PointerDown,
    /// `"pointermove"`
    PointerMove,
    /// `"pointerup"`
    PointerUp,
    /// `"pointercancel"`
    PointerCancel,
}

impl ActionKind {
    /// Every action kind, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Next,
        Self::Previous,
        Self::GoTo,
        Self::PointerDown,
        Self::PointerMove,
        Self::PointerUp,
        Self::PointerCancel,
    ];

    /// Returns the wire tag for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::GoTo => "goto",
            Self::PointerDown => "pointerdown",
            Self::PointerMove => "pointermove",
            Self::PointerUp => "pointerup",
            Self::PointerCancel => "pointercancel",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = InvalidAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| InvalidAction::UnknownKind {
                kind: s.to_string(),
            })
    }
}

/// An action that falls outside the accepted alphabet.
///
/// This indicates a bug in the caller and is not meant to be recovered from.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidAction {
    /// The tag does not name any action.
    #[error("unexpected carousel action type `{kind}`")]
    UnknownKind {
        /// The offending tag.
        kind: String,
    },
    /// The tag is known but its payload is missing.
    #[error("carousel action `{kind}` is missing its payload")]
    MissingPayload {
        /// The action whose payload is missing.
        kind: ActionKind,
    },
}

/// Payload fields carried by a [`RawAction`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawPayload {
    /// Horizontal page coordinate for pointer actions.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub x: Option<f64>,
    /// Target slide for `goto`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub index: Option<isize>,
}

/// A string-tagged action, as produced by hosts that route events by name.
///
/// With the `serde` feature this reads and writes the shape
/// `{ "type": "goto", "payload": { "index": 2 } }`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawAction {
    /// Action tag such as `"next"` or `"pointermove"`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    /// Optional payload.
    #[cfg_attr(feature = "serde", serde(default))]
    pub payload: RawPayload,
}

impl RawAction {
    /// Creates a raw action with an empty payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: RawPayload::default(),
        }
    }

    /// Creates a raw action carrying a horizontal coordinate.
    pub fn with_x(kind: impl Into<String>, x: f64) -> Self {
        Self {
            kind: kind.into(),
            payload: RawPayload {
                x: Some(x),
                index: None,
            },
        }
    }

    /// Creates a raw action carrying a slide index.
    pub fn with_index(kind: impl Into<String>, index: isize) -> Self {
        Self {
            kind: kind.into(),
            payload: RawPayload {
                x: None,
                index: Some(index),
            },
        }
    }
}

impl TryFrom<RawAction> for Action {
    type Error = InvalidAction;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        Self::try_from(&raw)
    }
}

impl TryFrom<&RawAction> for Action {
    type Error = InvalidAction;

    fn try_from(raw: &RawAction) -> Result<Self, Self::Error> {
        let kind: ActionKind = raw.kind.parse()?;
        let missing = || InvalidAction::MissingPayload { kind };
        Ok(match kind {
            ActionKind::Next => Self::Next,
            ActionKind::Previous => Self::Previous,
            ActionKind::GoTo => Self::GoTo(raw.payload.index.ok_or_else(missing)?),
            ActionKind::PointerDown => Self::PointerDown(raw.payload.x.ok_or_else(missing)?),
            ActionKind::PointerMove => Self::PointerMove(raw.payload.x.ok_or_else(missing)?),
            ActionKind::PointerUp => Self::PointerUp(raw.payload.x.ok_or_else(missing)?),
            ActionKind::PointerCancel => Self::PointerCancel,
        })
    }
}

impl From<Action> for RawAction {
    fn from(action: Action) -> Self {
        let kind = action.kind().as_str();
        match action {
            Action::GoTo(index) => Self::with_index(kind, index),
            Action::PointerDown(x) | Action::PointerMove(x) | Action::PointerUp(x) => {
                Self::with_x(kind, x)
            }
            Action::Next | Action::Previous | Action::PointerCancel => Self::new(kind),
        }
    }
}
