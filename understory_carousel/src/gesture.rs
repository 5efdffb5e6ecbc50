// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture session adapter: turn raw pointer samples into carousel actions.
//!
//! ## Usage
//!
//! 1) Implement [`PointerSurface`] for the host surface that delivers pointer
//!    events for the track. Pointer-down is always delivered; move, up and
//!    cancel are only delivered between [`PointerSurface::acquire_motion`] and
//!    [`PointerSurface::release_motion`].
//! 2) Forward every sample the surface produces to [`GestureSession::handle`].
//!    The session filters out non-primary pointers, dispatches the matching
//!    [`Action`], and acquires or releases motion tracking as the gesture
//!    session opens and closes.
//! 3) If the widget is torn down mid-drag, call [`GestureSession::abandon`] so
//!    the subscription is released.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_carousel::{
//!     Carousel, GestureSession, NavigationConfig, PointerSample, PointerSurface, SwipeThreshold,
//! };
//!
//! #[derive(Default)]
//! struct Track {
//!     tracking: bool,
//! }
//!
//! impl PointerSurface for Track {
//!     fn acquire_motion(&mut self) {
//!         self.tracking = true;
//!     }
//!     fn release_motion(&mut self) {
//!         self.tracking = false;
//!     }
//! }
//!
//! let config = NavigationConfig::new(3)
//!     .unwrap()
//!     .with_container_width(1600.0)
//!     .unwrap()
//!     .with_swipe_threshold(SwipeThreshold::fraction(0.5).unwrap());
//! let mut carousel = Carousel::new(config);
//! let mut track = Track::default();
//! let mut session = GestureSession::new();
//!
//! session.handle(&mut carousel, &mut track, PointerSample::down(Point::new(1600.0, 0.0)));
//! assert!(track.tracking);
//!
//! session.handle(&mut carousel, &mut track, PointerSample::moved(Point::new(799.0, 0.0)));
//! session.handle(&mut carousel, &mut track, PointerSample::up(Point::new(799.0, 0.0)));
//! assert!(!track.tracking);
//! assert_eq!(carousel.view().visible_slide_index, 1);
//! ```

use kurbo::Point;
use tracing::{debug, trace};

use crate::action::Action;
use crate::carousel::Carousel;

/// Which part of a pointer interaction a sample belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// The pointer was pressed on the track.
    Down,
    /// The pointer moved while pressed.
    Move,
    /// The pointer was released.
    Up,
    /// The platform cancelled the interaction.
    Cancel,
}

/// A single pointer sample as reported by the host surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Phase of the interaction.
    pub phase: PointerPhase,
    /// Pointer position in page coordinates. Only `x` is used.
    pub page_position: Point,
    /// `false` for secondary touch points in a multi-touch interaction.
    pub is_primary: bool,
}

impl PointerSample {
    /// Creates a primary sample.
    #[must_use]
    pub fn new(phase: PointerPhase, page_position: Point) -> Self {
        Self {
            phase,
            page_position,
            is_primary: true,
        }
    }

    /// Creates a primary pointer-down sample.
    #[must_use]
    pub fn down(page_position: Point) -> Self {
        Self::new(PointerPhase::Down, page_position)
    }

    /// Creates a primary pointer-move sample.
    #[must_use]
    pub fn moved(page_position: Point) -> Self {
        Self::new(PointerPhase::Move, page_position)
    }

    /// Creates a primary pointer-up sample.
    #[must_use]
    pub fn up(page_position: Point) -> Self {
        Self::new(PointerPhase::Up, page_position)
    }

    /// Creates a primary pointer-cancel sample.
    #[must_use]
    pub fn cancel(page_position: Point) -> Self {
        Self::new(PointerPhase::Cancel, page_position)
    }

    /// Marks this sample as coming from a secondary pointer.
    #[must_use]
    pub fn secondary(mut self) -> Self {
        self.is_primary = false;
        self
    }

    /// Maps this sample to the action it drives.
    #[must_use]
    pub fn action(&self) -> Action {
        let x = self.page_position.x;
        match self.phase {
            PointerPhase::Down => Action::PointerDown(x),
            PointerPhase::Move => Action::PointerMove(x),
            PointerPhase::Up => Action::PointerUp(x),
            PointerPhase::Cancel => Action::PointerCancel,
        }
    }
}

/// Host surface that can start and stop delivering pointer motion for the track.
///
/// The two methods form an acquire/release pair. A [`GestureSession`] calls
/// `acquire_motion` once when a session opens and `release_motion` once when
/// it closes, on every exit path.
pub trait PointerSurface {
    /// Start delivering move, up and cancel samples.
    fn acquire_motion(&mut self);
    /// Stop delivering move, up and cancel samples.
    fn release_motion(&mut self);
}

/// Lifecycle of a gesture session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// No gesture in progress; only pointer-down is of interest.
    #[default]
    Idle,
    /// A primary pointer is pressed and motion is being tracked.
    Dragging,
}

/// Bridges a [`PointerSurface`] to a [`Carousel`].
///
/// The session follows the carousel's state: on every call it holds motion if
/// and only if [`NavigationState::is_swiping`](crate::NavigationState::is_swiping).
#[derive(Debug, Default)]
pub struct GestureSession {
    phase: SessionPhase,
}

impl GestureSession {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Returns `true` while motion tracking is acquired.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == SessionPhase::Dragging
    }

    /// Handles one pointer sample, returning `true` if the carousel state changed.
    ///
    /// Non-primary samples are dropped. Move, up and cancel samples that arrive
    /// while the carousel has no open gesture are dropped before reaching the
    /// state machine. Sessions opened or closed by dispatching pointer actions
    /// on the carousel directly are picked up here.
    pub fn handle<S: PointerSurface + ?Sized>(
        &mut self,
        carousel: &mut Carousel,
        surface: &mut S,
        sample: PointerSample,
    ) -> bool {
        self.sync(carousel, surface);
        if !sample.is_primary {
            trace!(phase = ?sample.phase, "dropping non-primary pointer sample");
            return false;
        }
        if sample.phase != PointerPhase::Down && !self.is_dragging() {
            trace!(phase = ?sample.phase, "dropping pointer sample outside a gesture session");
            return false;
        }

        let changed = carousel.dispatch(sample.action());
        self.sync(carousel, surface);
        changed
    }

    /// Closes an open session without changing slides and releases motion tracking.
    ///
    /// Call this when the owning widget is torn down mid-drag. Does nothing
    /// when idle.
    pub fn abandon<S: PointerSurface + ?Sized>(
        &mut self,
        carousel: &mut Carousel,
        surface: &mut S,
    ) {
        carousel.dispatch(Action::PointerCancel);
        self.sync(carousel, surface);
    }

    fn sync<S: PointerSurface + ?Sized>(&mut self, carousel: &Carousel, surface: &mut S) {
        match (carousel.state().is_swiping(), self.phase) {
            (true, SessionPhase::Idle) => {
                debug!(origin = ?carousel.state().swipe_origin, "gesture session opened");
                surface.acquire_motion();
                self.phase = SessionPhase::Dragging;
            }
            (false, SessionPhase::Dragging) => self.release(surface),
            _ => {}
        }
    }

    fn release<S: PointerSurface + ?Sized>(&mut self, surface: &mut S) {
        debug!("gesture session closed");
        surface.release_motion();
        self.phase = SessionPhase::Idle;
    }
}
