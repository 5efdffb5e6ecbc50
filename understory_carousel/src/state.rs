// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation state: the settled slide and the open gesture session, if any.

/// Navigation state owned by the state machine.
///
/// The state only changes through [`apply`](crate::apply). The default value is
/// the initial state: first slide, no gesture in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavigationState {
    /// Index of the settled slide.
    ///
    /// Must be below the configured slide count when passed to
    /// [`apply`](crate::apply).
    pub visible_slide_index: usize,
    /// Horizontal page coordinate at which the current gesture session began.
    ///
    /// `None` when no gesture is in progress.
    pub swipe_origin: Option<f64>,
    /// Signed horizontal displacement since [`swipe_origin`](Self::swipe_origin).
    ///
    /// Positive values mean the pointer moved right, towards the previous slide.
    pub swipe_distance: f64,
}

impl NavigationState {
    /// Creates the initial state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_slide_index: 0,
            swipe_origin: None,
            swipe_distance: 0.0,
        }
    }

    /// Returns `true` while a gesture session is open.
    #[must_use]
    pub fn is_swiping(&self) -> bool {
        self.swipe_origin.is_some()
    }

    /// Horizontal offset of the track for the given container width.
    ///
    /// This is `-(container_width * visible_slide_index) + swipe_distance`.
    #[must_use]
    pub fn track_position(&self, container_width: f64) -> f64 {
        -(container_width * self.visible_slide_index as f64) + self.swipe_distance
    }
}
