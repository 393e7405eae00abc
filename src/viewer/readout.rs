// SPDX-License-Identifier: MPL-2.0
//! Live scale/offset readout text.

use std::fmt;

use crate::viewer::transform::ViewportState;

/// Decimal places shown for the scale.
const SCALE_DECIMALS: usize = 2;

/// Decimal places shown for offsets.
const OFFSET_DECIMALS: usize = 1;

/// Formats the current viewport as `Scale: 2.5x  Offset: (10, -4)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    state: ViewportState,
}

impl Readout {
    #[must_use]
    pub fn new(state: ViewportState) -> Self {
        Self { state }
    }

    /// Returns the scale part alone (e.g. `2.5x`).
    #[must_use]
    pub fn scale_label(&self) -> String {
        format!("{}x", format_number(self.state.scale, SCALE_DECIMALS))
    }

    /// Returns the offset part alone (e.g. `(10, -4)`).
    #[must_use]
    pub fn offset_label(&self) -> String {
        format!(
            "({}, {})",
            format_number(self.state.offset.dx, OFFSET_DECIMALS),
            format_number(self.state.offset.dy, OFFSET_DECIMALS)
        )
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {}  Offset: {}",
            self.scale_label(),
            self.offset_label()
        )
    }
}

/// Formats a number for display (removes unnecessary decimal places).
#[must_use]
pub fn format_number(value: f32, decimals: usize) -> String {
    // Avoid printing "-0".
    let value = if value == 0.0 { 0.0 } else { value };

    if value.fract().abs() < f32::EPSILON {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.decimals$}");
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::viewport::Offset;

    #[test]
    fn format_number_drops_integral_decimals() {
        assert_eq!(format_number(5.0, 2), "5");
        assert_eq!(format_number(-4.0, 1), "-4");
        assert_eq!(format_number(-0.0, 1), "0");
    }

    #[test]
    fn format_number_trims_trailing_zeros() {
        assert_eq!(format_number(2.5, 2), "2.5");
        assert_eq!(format_number(2.75, 2), "2.75");
        assert_eq!(format_number(12.34, 1), "12.3");
    }

    #[test]
    fn format_number_tiny_negative_rounds_to_zero() {
        assert_eq!(format_number(-0.01, 1), "0");
    }

    #[test]
    fn readout_formats_scale_and_offset() {
        let readout = Readout::new(ViewportState {
            scale: 2.5,
            offset: Offset::new(10.0, -4.0),
        });
        assert_eq!(readout.to_string(), "Scale: 2.5x  Offset: (10, -4)");
        assert_eq!(readout.scale_label(), "2.5x");
        assert_eq!(readout.offset_label(), "(10, -4)");
    }

    #[test]
    fn readout_shows_live_overshoot() {
        let readout = Readout::new(ViewportState {
            scale: 7.2,
            offset: Offset::ZERO,
        });
        assert_eq!(readout.scale_label(), "7.2x");
    }
}
