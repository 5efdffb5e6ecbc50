// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel controller: owns config + state and exposes the read model.
//!
//! ## Usage
//!
//! 1) Build a [`NavigationConfig`] and wrap it in a [`Carousel`].
//! 2) Push container measurements with [`Carousel::set_container_width`] and
//!    slide-count changes with [`Carousel::set_total_slides`].
//! 3) Feed user input through [`Carousel::dispatch`] (or the
//!    [`GestureSession`](crate::GestureSession) adapter for pointer input).
//! 4) Read [`Carousel::view`], [`Carousel::track_layout`],
//!    [`Carousel::slide`] and [`Carousel::slide_control`] when rendering.
//!
//! ## Minimal example
//!
//! ```
//! use understory_carousel::{Carousel, NavigationConfig};
//!
//! let config = NavigationConfig::new(3).unwrap().with_container_width(400.0).unwrap();
//! let mut carousel = Carousel::new(config);
//!
//! assert!(carousel.next());
//! assert_eq!(carousel.view().visible_slide_index, 1);
//! assert_eq!(carousel.view().track_position, -400.0);
//!
//! // The control for the current slide is disabled.
//! assert!(carousel.slide_control(1).disabled);
//! assert_eq!(carousel.slide_control(2).label, "Go to slide 3 of 3");
//! ```

use alloc::format;

use tracing::{debug, trace};

use crate::action::{Action, InvalidAction, RawAction};
use crate::config::{ConfigError, NavigationConfig};
use crate::machine::apply;
use crate::state::NavigationState;
use crate::view::{
    CarouselView, NavButton, NavButtonAttributes, SlideAttributes, SlideControl, TrackLayout,
};

/// A single carousel instance: configuration, navigation state, and a revision counter.
#[derive(Clone, Debug)]
pub struct Carousel {
    config: NavigationConfig,
    state: NavigationState,
    revision: u64,
}

impl Carousel {
    /// Creates a carousel in the initial state.
    #[must_use]
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            config,
            state: NavigationState::new(),
            revision: 0,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Current navigation state.
    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Returns the current revision counter.
    ///
    /// The counter is bumped only when a dispatch changes the navigation state.
    /// Boundary bumps and stray pointer events leave it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies `action` and returns `true` if the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = apply(&self.state, action, &self.config);
        if next == self.state {
            trace!(kind = %action.kind(), index = self.state.visible_slide_index, "action ignored");
            return false;
        }

        if self.state.is_swiping() && !next.is_swiping() {
            if next.visible_slide_index == self.state.visible_slide_index {
                debug!(
                    distance = self.state.swipe_distance,
                    index = next.visible_slide_index,
                    "swipe rolled back"
                );
            } else {
                debug!(
                    distance = self.state.swipe_distance,
                    from = self.state.visible_slide_index,
                    to = next.visible_slide_index,
                    "swipe committed"
                );
            }
        } else if next.visible_slide_index != self.state.visible_slide_index {
            debug!(
                kind = %action.kind(),
                from = self.state.visible_slide_index,
                to = next.visible_slide_index,
                "slide changed"
            );
        }

        self.state = next;
        self.revision = self.revision.wrapping_add(1);
        true
    }

    /// Converts a string-tagged action and applies it.
    ///
    /// Returns an error without touching the state if the action is not part
    /// of the accepted alphabet.
    pub fn dispatch_raw(&mut self, raw: &RawAction) -> Result<bool, InvalidAction> {
        let action = Action::try_from(raw)?;
        Ok(self.dispatch(action))
    }

    /// Steps forward one slide.
    pub fn next(&mut self) -> bool {
        self.dispatch(Action::Next)
    }

    /// Steps back one slide.
    pub fn previous(&mut self) -> bool {
        self.dispatch(Action::Previous)
    }

    /// Jumps to the slide at `index`.
    pub fn go_to(&mut self, index: usize) -> bool {
        self.dispatch(Action::go_to(index))
    }

    /// Updates the measured container width.
    ///
    /// The new width applies to the next computed track position; a drag
    /// distance already in progress is not rescaled.
    pub fn set_container_width(&mut self, width: f64) -> Result<(), ConfigError> {
        self.config.set_container_width(width)
    }

    /// Updates the slide count.
    ///
    /// If the settled slide no longer exists it is moved back into range
    /// through the boundary policy: the last slide for clamped carousels, the
    /// wrapped index for infinite ones.
    pub fn set_total_slides(&mut self, total_slides: usize) -> Result<(), ConfigError> {
        self.config.set_total_slides(total_slides)?;
        let index = self.state.visible_slide_index;
        if index >= total_slides {
            let reconciled = if self.config.is_infinite() {
                index % total_slides
            } else {
                total_slides - 1
            };
            debug!(from = index, to = reconciled, total_slides, "slide count shrank");
            self.state.visible_slide_index = reconciled;
            self.revision = self.revision.wrapping_add(1);
        }
        Ok(())
    }

    /// Returns the `{ track_position, visible_slide_index }` read model.
    #[must_use]
    pub fn view(&self) -> CarouselView {
        CarouselView {
            track_position: self.track_position(),
            visible_slide_index: self.state.visible_slide_index,
        }
    }

    /// Horizontal offset of the track in pixels.
    #[must_use]
    pub fn track_position(&self) -> f64 {
        self.state.track_position(self.config.container_width())
    }

    /// Returns the geometry of the track strip.
    #[must_use]
    pub fn track_layout(&self) -> TrackLayout {
        let width = self.config.container_width();
        TrackLayout {
            track_width: width * self.config.total_slides() as f64,
            slide_width: width,
            offset: self.track_position(),
            accepts_pointer: self.config.swipe_threshold().is_enabled(),
        }
    }

    /// Returns the attributes of the slide at `index`.
    #[must_use]
    pub fn slide(&self, index: usize) -> SlideAttributes {
        SlideAttributes {
            index,
            hidden: index != self.state.visible_slide_index,
            width: self.config.container_width(),
        }
    }

    /// Returns the "go to slide" control for `index`.
    #[must_use]
    pub fn slide_control(&self, index: usize) -> SlideControl {
        SlideControl {
            index,
            label: format!(
                "Go to slide {} of {}",
                index.saturating_add(1),
                self.config.total_slides()
            ),
            disabled: index == self.state.visible_slide_index,
            action: Action::go_to(index),
        }
    }

    /// Returns the "go to slide" controls for every slide.
    pub fn slide_controls(&self) -> impl Iterator<Item = SlideControl> + '_ {
        (0..self.config.total_slides()).map(|index| self.slide_control(index))
    }

    /// Returns the attributes of a previous/next button.
    #[must_use]
    pub fn nav_button(&self, button: NavButton) -> NavButtonAttributes {
        button.attributes()
    }
}
