// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation transition function.
//!
//! [`apply`] is total over [`Action`]: every action yields a state, and actions
//! that make no sense in the current state (a pointer move with no open
//! session, a step past a clamped end) return the state unchanged.
//!
//! ## Gesture resolution
//!
//! A gesture is judged only by its net displacement at release, measured from
//! the point where the session opened. If the absolute displacement does not
//! exceed `container_width * threshold` the track snaps back. Otherwise the
//! carousel moves one slide: towards the previous slide for a rightward drag
//! (`distance >= 0`), towards the next one for a leftward drag.
//!
//! ```
//! use understory_carousel::{apply, Action, NavigationConfig, NavigationState, SwipeThreshold};
//!
//! let config = NavigationConfig::new(3)
//!     .unwrap()
//!     .with_container_width(1600.0)
//!     .unwrap()
//!     .with_swipe_threshold(SwipeThreshold::fraction(0.5).unwrap());
//!
//! let mut state = NavigationState::new();
//! for action in [
//!     Action::PointerDown(1600.0),
//!     Action::PointerMove(799.0),
//!     Action::PointerUp(799.0),
//! ] {
//!     state = apply(&state, action, &config);
//! }
//! assert_eq!(state.visible_slide_index, 1);
//! assert!(!state.is_swiping());
//! ```

use crate::action::Action;
use crate::config::{NavigationConfig, SwipeThreshold};
use crate::state::NavigationState;

/// Direction of a committed swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Content moves towards the previous slide (pointer dragged right).
    Previous,
    /// Content moves towards the next slide (pointer dragged left).
    Next,
}

impl SwipeDirection {
    /// Infers the direction of a drag from its signed distance.
    ///
    /// A distance of exactly zero counts as [`Previous`](Self::Previous).
    #[must_use]
    pub fn from_distance(distance: f64) -> Self {
        if distance >= 0.0 {
            Self::Previous
        } else {
            Self::Next
        }
    }

    /// Index delta for one step in this direction.
    #[must_use]
    pub fn delta(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Result of releasing a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureOutcome {
    /// The drag stayed within the threshold; the track snaps back.
    Rollback,
    /// The drag crossed the threshold; move one slide in the given direction.
    Commit(SwipeDirection),
}

/// Decides whether a drag of `distance` pixels commits a slide change.
#[must_use]
pub fn resolve_gesture(
    distance: f64,
    container_width: f64,
    threshold: SwipeThreshold,
) -> GestureOutcome {
    if threshold.is_enabled() && distance.abs() > threshold.distance(container_width) {
        GestureOutcome::Commit(SwipeDirection::from_distance(distance))
    } else {
        GestureOutcome::Rollback
    }
}

/// Applies `action` to `state` under `config` and returns the next state.
///
/// `state.visible_slide_index` must be below `config.total_slides()`. Every
/// state returned by `apply` keeps that property; [`Carousel`](crate::Carousel)
/// also restores it when the slide count shrinks. Out-of-range input states
/// panic in debug builds.
#[must_use]
pub fn apply(
    state: &NavigationState,
    action: Action,
    config: &NavigationConfig,
) -> NavigationState {
    let boundary = config.boundary();
    let total = config.total_slides();
    let current = state.visible_slide_index;
    debug_assert!(
        current < total,
        "visible slide {current} is out of range for {total} slides"
    );

    match action {
        Action::Next => NavigationState {
            visible_slide_index: boundary.step(current, 1, total),
            ..*state
        },
        Action::Previous => NavigationState {
            visible_slide_index: boundary.step(current, -1, total),
            ..*state
        },
        Action::GoTo(index) => NavigationState {
            visible_slide_index: boundary.resolve(current, index, total),
            ..*state
        },
        Action::PointerDown(x) => {
            if !x.is_finite() {
                return *state;
            }
            NavigationState {
                swipe_origin: Some(x),
                ..*state
            }
        }
        Action::PointerMove(x) => match state.swipe_origin {
            Some(origin) if x.is_finite() => NavigationState {
                swipe_distance: x - origin,
                ..*state
            },
            _ => *state,
        },
        Action::PointerUp(_) => {
            if !state.is_swiping() {
                return *state;
            }
            let outcome = resolve_gesture(
                state.swipe_distance,
                config.container_width(),
                config.swipe_threshold(),
            );
            let visible_slide_index = match outcome {
                GestureOutcome::Rollback => current,
                GestureOutcome::Commit(direction) => {
                    boundary.step(current, direction.delta(), total)
                }
            };
            NavigationState {
                visible_slide_index,
                swipe_origin: None,
                swipe_distance: 0.0,
            }
        }
        Action::PointerCancel => {
            if !state.is_swiping() {
                return *state;
            }
            NavigationState {
                visible_slide_index: current,
                swipe_origin: None,
                swipe_distance: 0.0,
            }
        }
    }
}
