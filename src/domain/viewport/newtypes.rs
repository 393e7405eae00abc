// SPDX-License-Identifier: MPL-2.0
//! Viewport newtypes.
//!
//! Type-safe wrappers for the values a viewport holds at rest, plus the
//! normalization applied to untrusted gesture input.

// =============================================================================
// Scale Bounds
// =============================================================================

/// Scale bounds (1x to 5x).
pub mod scale_bounds {
    /// Minimum scale at rest (unzoomed).
    pub const MIN: f32 = 1.0;
    /// Maximum scale at rest.
    pub const MAX: f32 = 5.0;
    /// Scale of a freshly opened page.
    pub const DEFAULT: f32 = 1.0;
    /// Scale reached by a double tap on an unzoomed page.
    pub const DOUBLE_TAP: f32 = 5.0;
    /// Scale change applied by one zoom button press.
    pub const BUTTON_STEP: f32 = 1.0;

    const _: () = {
        assert!(MIN > 0.0);
        assert!(MAX > MIN);
        assert!(DEFAULT >= MIN && DEFAULT <= MAX);
        assert!(DOUBLE_TAP > MIN && DOUBLE_TAP <= MAX);
        assert!(BUTTON_STEP > 0.0);
    };
}

// =============================================================================
// ZoomScale
// =============================================================================

/// Scale factor, guaranteed to be within the at-rest range (1x–5x).
///
/// Live gesture values may leave this range while a pinch is in progress;
/// they are folded back into a `ZoomScale` at the gesture's committal point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a new scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        Self(normalize_magnitude(scale).clamp(scale_bounds::MIN, scale_bounds::MAX))
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(scale_bounds::DEFAULT)
    }
}

// =============================================================================
// ZoomDirection
// =============================================================================

/// Direction of a zoom button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Returns the signed scale change for one button press.
    #[must_use]
    pub fn step(self) -> f32 {
        match self {
            ZoomDirection::In => scale_bounds::BUTTON_STEP,
            ZoomDirection::Out => -scale_bounds::BUTTON_STEP,
        }
    }
}

// =============================================================================
// Offset
// =============================================================================

/// Pan offset of the page image, in presentation units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    /// No translation.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Creates an offset from raw gesture translation, normalizing
    /// non-finite components.
    #[must_use]
    pub fn new(dx: f32, dy: f32) -> Self {
        Self {
            dx: normalize_component(dx),
            dy: normalize_component(dy),
        }
    }

    /// Returns true if the offset is exactly zero on both axes.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

// =============================================================================
// Input normalization
// =============================================================================

/// Normalizes a raw translation component: NaN becomes 0, infinities are
/// clamped to the finite range.
#[must_use]
pub fn normalize_component(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f32::MIN, f32::MAX)
    }
}

/// Normalizes a raw pinch magnitude: NaN and negatives become 0, infinity
/// is clamped to the finite range.
#[must_use]
pub fn normalize_magnitude(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, f32::MAX)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // ZoomScale tests
    // -------------------------------------------------------------------------

    #[test]
    fn zoom_scale_clamps() {
        assert!((ZoomScale::new(0.2).value() - scale_bounds::MIN).abs() < f32::EPSILON);
        assert!((ZoomScale::new(7.2).value() - scale_bounds::MAX).abs() < f32::EPSILON);
        assert!((ZoomScale::new(2.5).value() - 2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn zoom_scale_default_is_unzoomed() {
        assert!((ZoomScale::default().value() - scale_bounds::DEFAULT).abs() < f32::EPSILON);
    }

    #[test]
    fn zoom_scale_nan_falls_to_minimum() {
        assert!((ZoomScale::new(f32::NAN).value() - scale_bounds::MIN).abs() < f32::EPSILON);
    }

    #[test]
    fn zoom_scale_bounds_are_ordered() {
        assert!(scale_bounds::MIN <= scale_bounds::DEFAULT);
        assert!(scale_bounds::DOUBLE_TAP <= scale_bounds::MAX);
        assert_eq!(scale_bounds::MAX, 5.0);
    }

    // -------------------------------------------------------------------------
    // ZoomDirection tests
    // -------------------------------------------------------------------------

    #[test]
    fn zoom_direction_steps_are_symmetric() {
        assert!((ZoomDirection::In.step() + ZoomDirection::Out.step()).abs() < f32::EPSILON);
        assert!(ZoomDirection::In.step() > 0.0);
    }

    // -------------------------------------------------------------------------
    // Offset tests
    // -------------------------------------------------------------------------

    #[test]
    fn offset_normalizes_non_finite_components() {
        let offset = Offset::new(f32::NAN, f32::INFINITY);
        assert!(offset.dx.abs() < f32::EPSILON);
        assert!(offset.dy.is_finite());
        assert!((offset.dy - f32::MAX).abs() < f32::EPSILON);
    }

    #[test]
    fn offset_zero_detection() {
        assert!(Offset::ZERO.is_zero());
        assert!(Offset::default().is_zero());
        assert!(!Offset::new(0.0, -3.0).is_zero());
    }

    #[test]
    fn magnitude_normalization() {
        assert!(normalize_magnitude(-2.0).abs() < f32::EPSILON);
        assert!(normalize_magnitude(f32::NAN).abs() < f32::EPSILON);
        assert!((normalize_magnitude(7.2) - 7.2).abs() < f32::EPSILON);
    }
}
