// Copyright 2026 the Chipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for chip entities: flags, spacing, alignment, and line geometry.

bitflags::bitflags! {
    /// Visual-state flags of a chip.
    ///
    /// These affect how a chip draws, never its identity. A disabled chip
    /// still participates in hit testing; suppressing dispatch for disabled
    /// chips is a policy left to callback implementations.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ChipFlags: u8 {
        /// Chip is rendered in its pressed (highlighted) state.
        const PRESSED = 0b0000_0001;
        /// Chip is rendered in its enabled state.
        const ENABLED = 0b0000_0010;
    }
}

impl Default for ChipFlags {
    fn default() -> Self {
        Self::ENABLED
    }
}

/// Vertical placement of a chip's box within its host text line.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum VerticalAlign {
    /// Rest the chip on the text baseline.
    Baseline,
    /// Rest the chip on the line bottom (the default).
    #[default]
    Bottom,
    /// Center the chip between line top and bottom.
    Center,
}

/// Inset reserved around a chip's intrinsic box.
///
/// `horizontal` widens the advance a chip occupies in its line; `vertical`
/// raises the line to leave breathing room above the chip. Both are split
/// evenly on each side when drawing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChipSpacing {
    /// Extra width added to the chip's advance.
    pub horizontal: f64,
    /// Extra height added to the chip's line extent.
    pub vertical: f64,
}

impl Default for ChipSpacing {
    fn default() -> Self {
        Self {
            horizontal: 20.0,
            vertical: 20.0,
        }
    }
}

/// Geometry of the text line a chip is drawn into.
///
/// Supplied by the host surface for each draw call, in the same coordinate
/// space as the draw origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineBox {
    /// Top of the line box.
    pub top: f64,
    /// Baseline of the text in the line.
    pub baseline: f64,
    /// Bottom of the line box.
    pub bottom: f64,
}

impl LineBox {
    /// Distance from the baseline down to the line bottom.
    pub fn descent(&self) -> f64 {
        self.bottom - self.baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_enabled_not_pressed() {
        let f = ChipFlags::default();
        assert!(f.contains(ChipFlags::ENABLED));
        assert!(!f.contains(ChipFlags::PRESSED));
    }

    #[test]
    fn line_box_descent() {
        let line = LineBox {
            top: 0.0,
            baseline: 40.0,
            bottom: 50.0,
        };
        assert_eq!(line.descent(), 10.0);
    }
}
