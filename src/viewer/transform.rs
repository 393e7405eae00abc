// SPDX-License-Identifier: MPL-2.0
//! Viewport transform state machine
//!
//! Owns the scale and pan offset of one page and applies the transition
//! rules for every gesture kind:
//! - Double tap toggles between unzoomed and maximum scale
//! - Drag and pinch report live values that replace the current ones
//! - Gesture end folds live values back into the at-rest range
//! - Zoom buttons step the scale by one, never below unzoomed
//!
//! No transition can fail. Out-of-range input is normalized, never rejected.

use crate::domain::viewport::newtypes::normalize_magnitude;
use crate::domain::viewport::{scale_bounds, Offset, ZoomDirection, ZoomScale};

/// Scale and offset of one page's image.
///
/// At rest `scale` lies in `[1, 5]` and `offset` is zero whenever `scale`
/// is 1. While a pinch is in progress `scale` carries the raw gesture
/// magnitude and may leave that range until the pinch ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub scale: f32,
    pub offset: Offset,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: scale_bounds::DEFAULT,
            offset: Offset::ZERO,
        }
    }
}

impl ViewportState {
    /// Returns true if the state satisfies the at-rest invariant.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        (scale_bounds::MIN..=scale_bounds::MAX).contains(&self.scale)
            && (self.scale > scale_bounds::MIN || self.offset.is_zero())
    }

    /// Returns true if the page is shown at its unzoomed scale.
    #[must_use]
    pub fn is_unzoomed(&self) -> bool {
        (self.scale - scale_bounds::MIN).abs() < f32::EPSILON
    }
}

/// The rule a transition resolved to.
///
/// Every operation reports which branch it took so callers can log or
/// record normalizations without re-deriving them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Scale and offset returned to their defaults.
    Reset,
    /// Double tap on an unzoomed page jumped to the double-tap scale.
    DoubleTapZoomIn,
    /// Double tap on a zoomed page reset it.
    DoubleTapReset,
    /// Live drag translation replaced the offset.
    DragPreview,
    /// Drag ended on an unzoomed page; the pan was discarded.
    DragSnapBack,
    /// Drag ended while zoomed; the last offset was kept.
    DragCommitted,
    /// Live pinch magnitude replaced the scale.
    PinchPreview,
    /// Pinch reported while the scale was still above maximum; reset instead.
    PinchOvershootReset,
    /// Pinch ended above maximum; scale clamped to maximum.
    PinchClampedToMax,
    /// Pinch ended at or below unzoomed; reset.
    PinchSnapBack,
    /// Pinch ended inside the valid range; scale kept.
    PinchCommitted,
    /// Zoom button moved the scale by one step (clamped to maximum).
    ButtonStep,
    /// Zoom button would have reached unzoomed or below; reset instead.
    ButtonFloorReset,
}

impl Transition {
    /// Returns true if the rule corrected a live value rather than applying it.
    #[must_use]
    pub fn is_normalization(self) -> bool {
        matches!(
            self,
            Transition::DragSnapBack
                | Transition::PinchOvershootReset
                | Transition::PinchClampedToMax
                | Transition::PinchSnapBack
                | Transition::ButtonFloorReset
        )
    }
}

/// Applies gesture transitions to one page's [`ViewportState`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportTransform {
    state: ViewportState,
}

impl ViewportTransform {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.state.scale
    }

    #[must_use]
    pub fn offset(&self) -> Offset {
        self.state.offset
    }

    /// Resets scale to unzoomed and clears the offset. Idempotent.
    pub fn reset_state(&mut self) -> Transition {
        self.state = ViewportState::default();
        Transition::Reset
    }

    /// Toggles between unzoomed and the double-tap scale.
    pub fn apply_double_tap(&mut self) -> Transition {
        if self.state.is_unzoomed() {
            self.state.scale = scale_bounds::DOUBLE_TAP;
            Transition::DoubleTapZoomIn
        } else {
            self.reset_state();
            Transition::DoubleTapReset
        }
    }

    /// Replaces the offset with the live drag translation, whatever the scale.
    pub fn apply_drag_changed(&mut self, translation: Offset) -> Transition {
        self.state.offset = Offset::new(translation.dx, translation.dy);
        Transition::DragPreview
    }

    /// Commits a drag: an unzoomed page snaps back, a zoomed one keeps its pan.
    pub fn apply_drag_ended(&mut self) -> Transition {
        if self.state.scale <= scale_bounds::MIN {
            self.reset_state();
            Transition::DragSnapBack
        } else {
            Transition::DragCommitted
        }
    }

    /// Replaces the scale with the live pinch magnitude.
    ///
    /// A scale still above maximum when a new pinch value arrives is left
    /// over from an uncorrected overshoot; the viewport is reset rather than
    /// following the pinch.
    pub fn apply_pinch_changed(&mut self, magnitude: f32) -> Transition {
        if self.state.scale > scale_bounds::MAX {
            self.reset_state();
            return Transition::PinchOvershootReset;
        }

        self.state.scale = normalize_magnitude(magnitude);
        Transition::PinchPreview
    }

    /// Commits a pinch, folding the live scale back into `[1, 5]`.
    pub fn apply_pinch_ended(&mut self) -> Transition {
        if self.state.scale > scale_bounds::MAX {
            self.state.scale = scale_bounds::MAX;
            Transition::PinchClampedToMax
        } else if self.state.scale <= scale_bounds::MIN {
            self.reset_state();
            Transition::PinchSnapBack
        } else {
            Transition::PinchCommitted
        }
    }

    /// Steps the scale by one in the given direction.
    ///
    /// Stepping up is capped at maximum. A step that would land on or below
    /// unzoomed resets the viewport, so the offset is cleared with it.
    pub fn apply_zoom_button(&mut self, direction: ZoomDirection) -> Transition {
        let stepped = self.state.scale + direction.step();
        if stepped <= scale_bounds::MIN {
            self.reset_state();
            return Transition::ButtonFloorReset;
        }

        self.state.scale = ZoomScale::new(stepped).value();
        Transition::ButtonStep
    }

    /// Handles the zoom reset button.
    pub fn apply_zoom_reset_button(&mut self) -> Transition {
        self.reset_state()
    }
}
