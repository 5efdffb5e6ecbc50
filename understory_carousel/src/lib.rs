// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: headless navigation for carousel and slider widgets.
//!
//! This crate decides which slide of a carousel is visible and how far the
//! track is displaced, given explicit navigation commands and raw pointer drags.
//! It does **not** render anything, measure anything, or attach listeners to a
//! live surface; host frameworks feed it measurements and events and read back
//! a small read model.
//!
//! The pieces are:
//!
//! - [`apply`]: a pure transition function `(state, action, config) -> state`
//!   over the closed [`Action`] alphabet.
//! - [`BoundaryMode`]: one policy function for both clamped and infinite
//!   (wrapping) carousels.
//! - [`resolve_gesture`]: the commit-vs-rollback decision for a released swipe.
//! - [`Carousel`]: a controller owning a [`NavigationConfig`] and a
//!   [`NavigationState`], with a revision counter and read models for the
//!   track, slides, and controls.
//! - [`GestureSession`]: an adapter that turns primary-pointer samples into
//!   actions and acquires/releases motion tracking on a [`PointerSurface`] only
//!   while a gesture is in progress.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_carousel::{Action, Carousel, NavigationConfig, SwipeThreshold};
//!
//! let config = NavigationConfig::new(3)
//!     .unwrap()
//!     .with_container_width(1600.0)
//!     .unwrap()
//!     .with_swipe_threshold(SwipeThreshold::fraction(0.5).unwrap());
//! let mut carousel = Carousel::new(config);
//!
//! // Holding "previous" on the first slide does nothing.
//! assert!(!carousel.previous());
//!
//! // Drag left by just over half the container width and release.
//! carousel.dispatch(Action::PointerDown(1600.0));
//! carousel.dispatch(Action::PointerMove(799.0));
//! assert_eq!(carousel.view().track_position, -801.0);
//! carousel.dispatch(Action::PointerUp(799.0));
//!
//! let view = carousel.view();
//! assert_eq!(view.visible_slide_index, 1);
//! assert_eq!(view.track_position, -1600.0);
//! ```
//!
//! ## Infinite carousels
//!
//! ```rust
//! use understory_carousel::{Carousel, NavigationConfig};
//!
//! let mut carousel = Carousel::new(NavigationConfig::new(3).unwrap().with_infinite(true));
//! carousel.previous();
//! assert_eq!(carousel.view().visible_slide_index, 2);
//! carousel.next();
//! assert_eq!(carousel.view().visible_slide_index, 0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: use `libm` for Kurbo's float math in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for [`RawAction`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod action;
mod boundary;
mod carousel;
mod config;
mod gesture;
mod machine;
mod state;
mod view;

pub use action::{Action, ActionKind, InvalidAction, RawAction, RawPayload};
pub use boundary::BoundaryMode;
pub use carousel::Carousel;
pub use config::{ConfigError, NavigationConfig, SwipeThreshold, ThresholdFraction};
pub use gesture::{GestureSession, PointerPhase, PointerSample, PointerSurface, SessionPhase};
pub use machine::{GestureOutcome, SwipeDirection, apply, resolve_gesture};
pub use state::NavigationState;
pub use view::{
    CarouselView, NavButton, NavButtonAttributes, SlideAttributes, SlideControl, TrackLayout,
};
