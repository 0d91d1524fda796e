// Copyright 2026 the Chipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host layout contract and viewport state consumed by hit testing.

use kurbo::{Insets, Point, Rect, Vec2};

/// Line/offset queries the host text layout must answer.
///
/// Implementations wrap whatever text engine the host surface uses; the
/// buffer only needs these five queries. Coordinates are content-relative
/// (padding already removed, scroll already applied — see
/// [`Viewport::to_content`]).
pub trait TextLayout {
    /// The line under vertical position `y`, clamped to the text.
    fn line_for_vertical(&self, y: f64) -> usize;

    /// The character offset under horizontal position `x` within `line`,
    /// clamped to the line.
    fn offset_for_horizontal(&self, line: usize, x: f64) -> usize;

    /// The line containing character `offset`.
    fn line_for_offset(&self, offset: usize) -> usize;

    /// The content-relative bounds of `line`.
    fn line_bounds(&self, line: usize) -> Rect;

    /// The horizontal position of the leading edge of `offset`.
    fn primary_horizontal(&self, offset: usize) -> f64;
}

/// The host surface's current scroll offset and content padding.
///
/// Touch coordinates arrive surface-relative; the buffer converts them to
/// text-content coordinates by removing the insets and applying the scroll.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Current scroll offset of the surface's content.
    pub scroll: Vec2,
    /// Content padding between the surface edge and the text.
    pub insets: Insets,
}

impl Viewport {
    /// Convert a surface-relative point to a text-content-relative point.
    pub fn to_content(&self, pt: Point) -> Point {
        Point::new(
            pt.x - self.insets.x0 + self.scroll.x,
            pt.y - self.insets.y0 + self.scroll.y,
        )
    }
}

/// A fixed-pitch reference layout: every character is one cell of
/// `char_width` × `line_height`, `line_len` characters per line.
///
/// Real hosts wrap their text engine in [`TextLayout`] instead; this
/// implementation exists so tests, demos, and benches have a layout with
/// predictable geometry.
#[derive(Copy, Clone, Debug)]
pub struct MonospaceLayout {
    /// Width of one character cell.
    pub char_width: f64,
    /// Height of one line.
    pub line_height: f64,
    /// Characters per line.
    pub line_len: usize,
    /// Total characters of text.
    pub len: usize,
}

impl MonospaceLayout {
    fn last_line(&self) -> usize {
        if self.len == 0 { 0 } else { (self.len - 1) / self.line_len }
    }
}

impl TextLayout for MonospaceLayout {
    fn line_for_vertical(&self, y: f64) -> usize {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "clamped to the line count before use"
        )]
        let line = (y / self.line_height).max(0.0) as usize;
        line.min(self.last_line())
    }

    fn offset_for_horizontal(&self, line: usize, x: f64) -> usize {
        let line = line.min(self.last_line());
        #[allow(
            clippy::cast_possible_truncation,
            reason = "clamped to the line length before use"
        )]
        let col = (x / self.char_width).max(0.0) as usize;
        let start = line * self.line_len;
        (start + col.min(self.line_len)).min(self.len)
    }

    fn line_for_offset(&self, offset: usize) -> usize {
        (offset / self.line_len).min(self.last_line())
    }

    fn line_bounds(&self, line: usize) -> Rect {
        let top = line as f64 * self.line_height;
        Rect::new(
            0.0,
            top,
            self.line_len as f64 * self.char_width,
            top + self.line_height,
        )
    }

    fn primary_horizontal(&self, offset: usize) -> f64 {
        (offset % self.line_len) as f64 * self.char_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> MonospaceLayout {
        MonospaceLayout {
            char_width: 10.0,
            line_height: 20.0,
            line_len: 8,
            len: 20,
        }
    }

    #[test]
    fn viewport_to_content_applies_insets_and_scroll() {
        let view = Viewport {
            scroll: Vec2::new(0.0, 40.0),
            insets: Insets::new(4.0, 6.0, 4.0, 6.0),
        };
        let pt = view.to_content(Point::new(14.0, 16.0));
        assert_eq!(pt, Point::new(10.0, 50.0));
    }

    #[test]
    fn monospace_line_and_offset_resolution() {
        let l = layout();
        assert_eq!(l.line_for_vertical(5.0), 0);
        assert_eq!(l.line_for_vertical(25.0), 1);
        // Clamped below and beyond the text.
        assert_eq!(l.line_for_vertical(-3.0), 0);
        assert_eq!(l.line_for_vertical(500.0), 2);

        assert_eq!(l.offset_for_horizontal(0, 15.0), 1);
        assert_eq!(l.offset_for_horizontal(1, 15.0), 9);
        // Clamped to the line and the text length.
        assert_eq!(l.offset_for_horizontal(0, -5.0), 0);
        assert_eq!(l.offset_for_horizontal(2, 900.0), 20);
    }

    #[test]
    fn monospace_offset_geometry() {
        let l = layout();
        assert_eq!(l.line_for_offset(9), 1);
        assert_eq!(l.primary_horizontal(9), 10.0);
        assert_eq!(l.line_bounds(1), Rect::new(0.0, 20.0, 80.0, 40.0));
    }
}
