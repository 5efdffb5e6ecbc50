// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read models handed to rendering and accessibility layers.
//!
//! Everything here is derived from a [`Carousel`](crate::Carousel) on demand;
//! none of it is stored.

use alloc::string::String;

use crate::action::Action;

/// Minimal read model: where the track sits and which slide is settled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselView {
    /// Horizontal offset of the track in pixels.
    pub track_position: f64,
    /// Index of the settled slide.
    pub visible_slide_index: usize,
}

/// Geometry of the track strip holding every slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackLayout {
    /// Total width of the track: one container width per slide.
    pub track_width: f64,
    /// Width of each slide, equal to the container width.
    pub slide_width: f64,
    /// Horizontal offset to translate the track by.
    pub offset: f64,
    /// Whether the track should receive pointer input at all.
    ///
    /// `false` when the swipe threshold is disabled.
    pub accepts_pointer: bool,
}

/// Per-slide attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideAttributes {
    /// Slide index.
    pub index: usize,
    /// `true` for every slide except the settled one; maps to `aria-hidden`.
    pub hidden: bool,
    /// Rendered width of the slide.
    pub width: f64,
}

/// A "go to slide N" control.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideControl {
    /// Slide index this control targets.
    pub index: usize,
    /// Accessible label, e.g. `"Go to slide 2 of 3"`.
    pub label: String,
    /// `true` exactly when the control targets the settled slide.
    pub disabled: bool,
    /// Action to dispatch on activation.
    pub action: Action,
}

/// The previous/next buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavButton {
    /// Steps back one slide.
    Previous,
    /// Steps forward one slide.
    Next,
}

/// Attributes for a [`NavButton`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavButtonAttributes {
    /// Accessible label: `"previous"` or `"next"`.
    pub label: &'static str,
    /// Action to dispatch on activation.
    pub action: Action,
}

impl NavButton {
    /// Returns the label and action for this button.
    #[must_use]
    pub fn attributes(self) -> NavButtonAttributes {
        match self {
            Self::Previous => NavButtonAttributes {
                label: "previous",
                action: Action::Previous,
            },
            Self::Next => NavButtonAttributes {
                label: "next",
                action: Action::Next,
            },
        }
    }
}
