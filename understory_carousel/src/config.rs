// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration: slide count, container width, swipe threshold, and boundary policy.

use thiserror::Error;

use crate::boundary::BoundaryMode;

/// Error returned when a configuration value is out of range.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The slide count was zero.
    #[error("a carousel needs at least one slide")]
    NoSlides,
    /// The container width was negative or not finite.
    #[error("container width must be finite and non-negative, got {0}")]
    InvalidContainerWidth(f64),
    /// The swipe threshold fraction was outside `0.0..=1.0` or not finite.
    #[error("swipe threshold must be a fraction in 0.0..=1.0, got {0}")]
    InvalidSwipeThreshold(f64),
}

/// A fraction of the container width, known to be finite and in `0.0..=1.0`.
///
/// Only [`SwipeThreshold::fraction`] can create one.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ThresholdFraction(f64);

impl ThresholdFraction {
    /// Returns the fraction.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

/// How far a drag must travel, relative to the container width, before it commits.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SwipeThreshold {
    /// Swiping never changes slides; every gesture snaps back.
    #[default]
    Disabled,
    /// Fraction of the container width that a drag has to exceed.
    Fraction(ThresholdFraction),
}

impl SwipeThreshold {
    /// Creates a threshold from a fraction of the container width.
    ///
    /// The fraction must be finite and lie in `0.0..=1.0`. A fraction of zero
    /// commits any drag with a non-zero net displacement.
    pub fn fraction(fraction: f64) -> Result<Self, ConfigError> {
        if fraction.is_finite() && (0.0..=1.0).contains(&fraction) {
            Ok(Self::Fraction(ThresholdFraction(fraction)))
        } else {
            Err(ConfigError::InvalidSwipeThreshold(fraction))
        }
    }

    /// Returns the fraction, or `None` when swiping is disabled.
    #[must_use]
    pub fn as_fraction(self) -> Option<f64> {
        match self {
            Self::Disabled => None,
            Self::Fraction(fraction) => Some(fraction.get()),
        }
    }

    /// Returns `true` if gestures can commit a slide change.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Fraction(_))
    }

    /// Returns the drag distance, in pixels, a gesture must exceed to commit.
    ///
    /// Disabled thresholds report infinity so that no finite distance can cross them.
    #[must_use]
    pub fn distance(self, container_width: f64) -> f64 {
        match self {
            Self::Disabled => f64::INFINITY,
            Self::Fraction(fraction) => container_width * fraction.get(),
        }
    }
}

/// Validated configuration for a single carousel instance.
///
/// The slide count and container width are expected to change over the
/// lifetime of a widget (slides are added, the container is resized); the
/// threshold and boundary mode are usually fixed when the widget is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationConfig {
    total_slides: usize,
    container_width: f64,
    swipe_threshold: SwipeThreshold,
    boundary: BoundaryMode,
}

impl NavigationConfig {
    /// Creates a configuration for `total_slides` slides.
    ///
    /// The container width starts at zero (unmeasured), swiping is disabled and
    /// navigation clamps at both ends.
    pub fn new(total_slides: usize) -> Result<Self, ConfigError> {
        if total_slides == 0 {
            return Err(ConfigError::NoSlides);
        }
        Ok(Self {
            total_slides,
            container_width: 0.0,
            swipe_threshold: SwipeThreshold::Disabled,
            boundary: BoundaryMode::Clamp,
        })
    }

    /// Returns this configuration with the given container width.
    pub fn with_container_width(mut self, width: f64) -> Result<Self, ConfigError> {
        self.set_container_width(width)?;
        Ok(self)
    }

    /// Returns this configuration with the given swipe threshold.
    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold: SwipeThreshold) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    /// Returns this configuration with the given boundary mode.
    #[must_use]
    pub fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }

    /// Returns this configuration wrapping (`true`) or clamping (`false`) at the ends.
    #[must_use]
    pub fn with_infinite(self, infinite: bool) -> Self {
        self.with_boundary(BoundaryMode::from_infinite(infinite))
    }

    /// Number of slides in the collection. Always at least one.
    #[must_use]
    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    /// Sets the number of slides.
    pub fn set_total_slides(&mut self, total_slides: usize) -> Result<(), ConfigError> {
        if total_slides == 0 {
            return Err(ConfigError::NoSlides);
        }
        self.total_slides = total_slides;
        Ok(())
    }

    /// Measured container width in pixels.
    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Sets the measured container width in pixels.
    pub fn set_container_width(&mut self, width: f64) -> Result<(), ConfigError> {
        if !width.is_finite() || width < 0.0 {
            return Err(ConfigError::InvalidContainerWidth(width));
        }
        self.container_width = width;
        Ok(())
    }

    /// Swipe threshold applied when a gesture is released.
    #[must_use]
    pub fn swipe_threshold(&self) -> SwipeThreshold {
        self.swipe_threshold
    }

    /// Boundary policy applied to every index change.
    #[must_use]
    pub fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    /// Returns `true` if navigation wraps around at both ends.
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        self.boundary == BoundaryMode::Wrap
    }
}
