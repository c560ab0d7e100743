// SPDX-License-Identifier: MPL-2.0
//! Animation newtypes.
//!
//! Type-safe wrappers for animated presentation values, always kept within
//! their valid ranges.

// =============================================================================
// Opacity
// =============================================================================

/// Visual opacity, guaranteed to be within `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Opacity(f32);

impl Opacity {
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self(0.0);
    /// Fully opaque.
    pub const OPAQUE: Self = Self(1.0);

    /// Creates an opacity, clamping to the valid range. NaN maps to opaque.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::OPAQUE;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true when nothing is visible.
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.0 <= 0.0
    }

    /// Returns true when fully visible.
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.0 >= 1.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

// =============================================================================
// Scale
// =============================================================================

/// Bounds for [`Scale`].
pub mod scale_bounds {
    /// Smallest allowed scale factor.
    pub const MIN: f32 = 0.05;
    /// Largest allowed scale factor.
    pub const MAX: f32 = 2.0;
    /// Scale of the refresh control at the bottom of its press pulse.
    pub const PRESSED: f32 = 0.95;
}

/// Interaction scale factor (1.0 = natural size).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scale(f32);

impl Scale {
    /// Natural size.
    pub const IDENTITY: Self = Self(1.0);

    /// Creates a scale factor, clamping to the valid range. NaN maps to identity.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::IDENTITY;
        }
        Self(value.clamp(scale_bounds::MIN, scale_bounds::MAX))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Applies the factor to a length.
    #[must_use]
    pub fn apply(self, length: f32) -> f32 {
        length * self.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}
