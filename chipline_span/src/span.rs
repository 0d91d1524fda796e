// Copyright 2026 the Chipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chip entity implementation: measurement cache, state mutation, drawing.

use alloc::string::String;
use kurbo::{Point, Size};

use crate::types::{ChipFlags, ChipSpacing, LineBox, VerticalAlign};

/// The external renderer a chip delegates its pixels to.
///
/// The chip entity depends only on this contract, not on a concrete
/// rendering technology. Implementations may cache per-label resources;
/// both operations take `&mut self` to allow that.
pub trait ChipRenderer {
    /// Rendering surface written to by [`ChipRenderer::draw`].
    type Surface;

    /// Measure the intrinsic size of a chip carrying `label`.
    fn measure(&mut self, label: &str) -> Size;

    /// Draw the chip for `label` with its top-left corner at `origin`.
    fn draw(&mut self, surface: &mut Self::Surface, label: &str, flags: ChipFlags, origin: Point);
}

/// An inline chip: an immutable label plus mutable visual state.
///
/// The label never changes after construction; identity is the handle a
/// buffer hands out on attach, so two chips with equal labels remain
/// distinct entities.
///
/// The intrinsic size is computed by the renderer on the first
/// [`measure`](ChipSpan::measure) and cached; pressed/enabled changes never
/// invalidate it.
#[derive(Clone, Debug)]
pub struct ChipSpan {
    label: String,
    flags: ChipFlags,
    spacing: ChipSpacing,
    align: VerticalAlign,
    size: Option<Size>,
}

impl ChipSpan {
    /// Create a chip with default spacing and bottom alignment.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            flags: ChipFlags::default(),
            spacing: ChipSpacing::default(),
            align: VerticalAlign::default(),
            size: None,
        }
    }

    /// Override the inset around the chip's intrinsic box.
    pub fn with_spacing(mut self, spacing: ChipSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Override the vertical alignment policy.
    pub fn with_align(mut self, align: VerticalAlign) -> Self {
        self.align = align;
        self
    }

    /// The chip's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current visual-state flags.
    pub fn flags(&self) -> ChipFlags {
        self.flags
    }

    /// Whether the chip is in its pressed (highlighted) state.
    pub fn is_pressed(&self) -> bool {
        self.flags.contains(ChipFlags::PRESSED)
    }

    /// Whether the chip is enabled.
    pub fn is_enabled(&self) -> bool {
        self.flags.contains(ChipFlags::ENABLED)
    }

    /// Set the pressed flag. Returns `true` when the value changed, so the
    /// caller can skip requesting a redraw for a no-op update.
    pub fn set_pressed(&mut self, pressed: bool) -> bool {
        let was = self.is_pressed();
        self.flags.set(ChipFlags::PRESSED, pressed);
        was != pressed
    }

    /// Set the enabled flag. Returns `true` when the value changed.
    ///
    /// Disabled chips still hit-test; dispatch policy belongs to callbacks.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        let was = self.is_enabled();
        self.flags.set(ChipFlags::ENABLED, enabled);
        was != enabled
    }

    /// Intrinsic size, if the chip has been measured.
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Intrinsic size, measuring through `renderer` on first call.
    ///
    /// Subsequent calls return the cached size without consulting the
    /// renderer; visual-state changes do not change the size.
    pub fn measure<R: ChipRenderer>(&mut self, renderer: &mut R) -> Size {
        match self.size {
            Some(size) => size,
            None => {
                let size = renderer.measure(&self.label);
                self.size = Some(size);
                size
            }
        }
    }

    /// Horizontal advance the chip occupies in its line: intrinsic width
    /// plus the horizontal spacing. `None` until measured.
    pub fn advance(&self) -> Option<f64> {
        self.size.map(|s| s.width + self.spacing.horizontal)
    }

    /// `(ascent, descent)` the chip contributes to its line: the full box
    /// height plus vertical spacing above the bottom, nothing below.
    /// Ascent is negative-up, matching text metrics conventions.
    /// `None` until measured.
    pub fn line_extent(&self) -> Option<(f64, f64)> {
        self.size
            .map(|s| (-(s.height + self.spacing.vertical), 0.0))
    }

    /// Draw the chip at horizontal position `x` within the line `line`,
    /// measuring first if needed.
    ///
    /// The vertical origin follows the alignment policy; the horizontal
    /// spacing is split evenly around the box.
    pub fn draw<R: ChipRenderer>(
        &mut self,
        renderer: &mut R,
        surface: &mut R::Surface,
        x: f64,
        line: LineBox,
    ) {
        let size = self.measure(renderer);
        let ty = match self.align {
            VerticalAlign::Bottom => line.bottom - size.height - self.spacing.vertical * 0.5,
            VerticalAlign::Baseline => {
                line.bottom - size.height - self.spacing.vertical * 0.5 - line.descent()
            }
            VerticalAlign::Center => line.top + (line.bottom - line.top) / 2.0 - size.height / 2.0,
        };
        let origin = Point::new(x + self.spacing.horizontal * 0.5, ty);
        renderer.draw(surface, &self.label, self.flags, origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    /// Renderer that sizes chips from label length and records draw calls.
    struct CountingRenderer {
        measures: usize,
        draws: Vec<(String, ChipFlags, Point)>,
    }

    impl CountingRenderer {
        fn new() -> Self {
            Self {
                measures: 0,
                draws: Vec::new(),
            }
        }
    }

    impl ChipRenderer for CountingRenderer {
        type Surface = ();

        fn measure(&mut self, label: &str) -> Size {
            self.measures += 1;
            Size::new(label.chars().count() as f64 * 10.0, 30.0)
        }

        fn draw(&mut self, _surface: &mut (), label: &str, flags: ChipFlags, origin: Point) {
            self.draws.push((label.to_string(), flags, origin));
        }
    }

    #[test]
    fn measure_is_cached_once() {
        let mut r = CountingRenderer::new();
        let mut chip = ChipSpan::new("alpha");
        let first = chip.measure(&mut r);
        let second = chip.measure(&mut r);
        assert_eq!(first, second);
        assert_eq!(r.measures, 1, "renderer must be consulted exactly once");
    }

    #[test]
    fn state_changes_do_not_change_size() {
        let mut r = CountingRenderer::new();
        let mut chip = ChipSpan::new("beta");
        let before = chip.measure(&mut r);
        chip.set_pressed(true);
        chip.set_enabled(false);
        assert_eq!(chip.measure(&mut r), before);
        assert_eq!(r.measures, 1);
    }

    #[test]
    fn set_pressed_reports_change() {
        let mut chip = ChipSpan::new("c");
        assert!(chip.set_pressed(true));
        assert!(!chip.set_pressed(true), "same value is not a change");
        assert!(chip.set_pressed(false));
        assert!(chip.is_enabled(), "enabled flag is untouched");
    }

    #[test]
    fn advance_and_extent_follow_spacing() {
        let mut r = CountingRenderer::new();
        let mut chip = ChipSpan::new("ab").with_spacing(ChipSpacing {
            horizontal: 8.0,
            vertical: 6.0,
        });
        assert_eq!(chip.advance(), None);
        assert_eq!(chip.line_extent(), None);
        chip.measure(&mut r);
        assert_eq!(chip.advance(), Some(28.0));
        assert_eq!(chip.line_extent(), Some((-36.0, 0.0)));
    }

    #[test]
    fn draw_bottom_alignment() {
        let mut r = CountingRenderer::new();
        let mut chip = ChipSpan::new("x").with_spacing(ChipSpacing {
            horizontal: 10.0,
            vertical: 10.0,
        });
        let line = LineBox {
            top: 0.0,
            baseline: 45.0,
            bottom: 50.0,
        };
        chip.draw(&mut r, &mut (), 100.0, line);
        let origin = r.draws[0].2;
        // Box height 30: bottom 50 - 30 - 5 = 15; x 100 + 5.
        assert_eq!(origin, Point::new(105.0, 15.0));
    }

    #[test]
    fn draw_baseline_alignment_subtracts_descent() {
        let mut r = CountingRenderer::new();
        let mut chip = ChipSpan::new("x")
            .with_spacing(ChipSpacing {
                horizontal: 0.0,
                vertical: 0.0,
            })
            .with_align(VerticalAlign::Baseline);
        let line = LineBox {
            top: 0.0,
            baseline: 45.0,
            bottom: 50.0,
        };
        chip.draw(&mut r, &mut (), 0.0, line);
        let origin = r.draws[0].2;
        // bottom 50 - 30 - descent 5.
        assert_eq!(origin.y, 15.0);
    }

    #[test]
    fn draw_center_alignment() {
        let mut r = CountingRenderer::new();
        let mut chip = ChipSpan::new("x")
            .with_spacing(ChipSpacing {
                horizontal: 0.0,
                vertical: 0.0,
            })
            .with_align(VerticalAlign::Center);
        let line = LineBox {
            top: 10.0,
            baseline: 55.0,
            bottom: 60.0,
        };
        chip.draw(&mut r, &mut (), 0.0, line);
        let origin = r.draws[0].2;
        // top 10 + half line 25 - half box 15.
        assert_eq!(origin.y, 20.0);
    }

    #[test]
    fn draw_passes_current_flags() {
        let mut r = CountingRenderer::new();
        let mut chip = ChipSpan::new("x");
        chip.set_pressed(true);
        let line = LineBox {
            top: 0.0,
            baseline: 40.0,
            bottom: 50.0,
        };
        chip.draw(&mut r, &mut (), 0.0, line);
        let flags = r.draws[0].1;
        assert!(flags.contains(ChipFlags::PRESSED));
        assert!(flags.contains(ChipFlags::ENABLED));
    }
}
