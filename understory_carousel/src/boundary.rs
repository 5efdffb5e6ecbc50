// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary policy: what happens when navigation runs off either end of the slides.
//!
//! A single function, [`BoundaryMode::resolve`], handles both finite and
//! infinite carousels so the two never drift apart.
//!
//! ```
//! use understory_carousel::BoundaryMode;
//!
//! // Finite carousels ignore moves past either end.
//! assert_eq!(BoundaryMode::Clamp.resolve(2, 3, 3), 2);
//! assert_eq!(BoundaryMode::Clamp.resolve(0, -1, 3), 0);
//!
//! // Infinite carousels wrap around.
//! assert_eq!(BoundaryMode::Wrap.resolve(2, 3, 3), 0);
//! assert_eq!(BoundaryMode::Wrap.resolve(0, -1, 3), 2);
//! ```

/// Boundary policy for slide indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryMode {
    /// Moves past the first or last slide are ignored.
    #[default]
    Clamp,
    /// Indices wrap modulo the slide count at both ends.
    Wrap,
}

impl BoundaryMode {
    /// Maps an `infinite` flag to a boundary mode.
    #[must_use]
    pub fn from_infinite(infinite: bool) -> Self {
        if infinite { Self::Wrap } else { Self::Clamp }
    }

    /// Resolves a candidate index against `total_slides`.
    ///
    /// - [`Clamp`](Self::Clamp): a candidate outside `0..total_slides` is
    ///   rejected and `current` is returned unchanged.
    /// - [`Wrap`](Self::Wrap): the candidate is reduced modulo `total_slides`
    ///   to a non-negative index.
    ///
    /// A `total_slides` of zero always yields `current`.
    #[must_use]
    pub fn resolve(self, current: usize, candidate: isize, total_slides: usize) -> usize {
        let Ok(total) = isize::try_from(total_slides) else {
            return current;
        };
        if total == 0 {
            return current;
        }
        match self {
            Self::Clamp => {
                if (0..total).contains(&candidate) {
                    candidate.unsigned_abs()
                } else {
                    current
                }
            }
            Self::Wrap => candidate.rem_euclid(total).unsigned_abs(),
        }
    }

    /// Resolves a step of `delta` slides away from `current`.
    #[must_use]
    pub fn step(self, current: usize, delta: isize, total_slides: usize) -> usize {
        let Ok(origin) = isize::try_from(current) else {
            return current;
        };
        self.resolve(current, origin.saturating_add(delta), total_slides)
    }
}
