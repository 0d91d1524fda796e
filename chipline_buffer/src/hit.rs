// Copyright 2026 the Chipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point hit testing and on-screen chip geometry.

use kurbo::{Point, Rect};

use crate::buffer::ChipBuffer;
use crate::layout::{TextLayout, Viewport};
use crate::types::ChipId;

impl ChipBuffer {
    /// Resolve a surface-relative touch point to the chip under it.
    ///
    /// Converts the point to text-content coordinates (remove content
    /// insets, apply scroll), resolves the touched line, then the character
    /// offset within it, and finally runs the zero-length span query.
    ///
    /// A host that has not been laid out yet passes `None` for `layout`;
    /// that degrades to "no chip under touch" rather than an error.
    pub fn chip_at_point<L: TextLayout>(
        &self,
        layout: Option<&L>,
        view: &Viewport,
        pt: Point,
    ) -> Option<ChipId> {
        let layout = layout?;
        let content = view.to_content(pt);
        let line = layout.line_for_vertical(content.y);
        let offset = layout.offset_for_horizontal(line, content.x);
        self.chip_at_offset(offset)
    }

    /// The chip's on-screen rectangle, for anchoring follow-up UI.
    ///
    /// `surface_origin` is the host surface's screen-space position. The
    /// rectangle is the bounds of the line containing the chip's start,
    /// horizontally narrowed to the chip's range. Returns `None` for stale
    /// ids or when the host has no layout yet.
    pub fn chip_frame<L: TextLayout>(
        &self,
        id: ChipId,
        layout: Option<&L>,
        view: &Viewport,
        surface_origin: Point,
    ) -> Option<Rect> {
        self.frame_parts(id, layout, view, surface_origin)
            .map(|(rect, _)| rect)
    }

    /// A point suitable for anchoring a popup under the chip: the bottom
    /// of its frame, horizontally centered — or the frame's left edge when
    /// the chip's range wraps across lines.
    pub fn chip_anchor<L: TextLayout>(
        &self,
        id: ChipId,
        layout: Option<&L>,
        view: &Viewport,
        surface_origin: Point,
    ) -> Option<Point> {
        let (rect, multi_line) = self.frame_parts(id, layout, view, surface_origin)?;
        let x = if multi_line {
            rect.x0
        } else {
            (rect.x0 + rect.x1) / 2.0
        };
        Some(Point::new(x, rect.y1))
    }

    fn frame_parts<L: TextLayout>(
        &self,
        id: ChipId,
        layout: Option<&L>,
        view: &Viewport,
        surface_origin: Point,
    ) -> Option<(Rect, bool)> {
        let layout = layout?;
        let range = self.range_of(id)?;

        let start_x = layout.primary_horizontal(range.start);
        let end_x = layout.primary_horizontal(range.end);
        let start_line = layout.line_for_offset(range.start);
        let multi_line = start_line != layout.line_for_offset(range.end);
        let line = layout.line_bounds(start_line);

        let dy = surface_origin.y - view.scroll.y + view.insets.y0;
        let left = line.x0 + surface_origin.x + start_x + view.insets.x0 - view.scroll.x;
        let rect = Rect::new(left, line.y0 + dy, left + (end_x - start_x), line.y1 + dy);
        Some((rect, multi_line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MonospaceLayout;
    use crate::types::TextRange;
    use chipline_span::ChipSpan;
    use kurbo::{Insets, Vec2};

    fn layout() -> MonospaceLayout {
        MonospaceLayout {
            char_width: 10.0,
            line_height: 20.0,
            line_len: 10,
            len: 20,
        }
    }

    fn two_city_buffer() -> (ChipBuffer, ChipId, ChipId) {
        let mut buf = ChipBuffer::new();
        let london = buf.attach(TextRange::new(0, 2), ChipSpan::new("伦敦"));
        let paris = buf.attach(TextRange::new(3, 5), ChipSpan::new("巴黎"));
        (buf, london, paris)
    }

    #[test]
    fn point_resolves_through_line_and_offset() {
        let (buf, london, paris) = two_city_buffer();
        let l = layout();
        let view = Viewport::default();
        // Offset 1 is at x in [10, 20) on line 0.
        assert_eq!(
            buf.chip_at_point(Some(&l), &view, Point::new(15.0, 5.0)),
            Some(london)
        );
        assert_eq!(
            buf.chip_at_point(Some(&l), &view, Point::new(42.0, 5.0)),
            Some(paris)
        );
        // Offset 7: no chip.
        assert_eq!(buf.chip_at_point(Some(&l), &view, Point::new(75.0, 5.0)), None);
    }

    #[test]
    fn insets_and_scroll_shift_the_query() {
        let (buf, london, _) = two_city_buffer();
        let l = layout();
        let view = Viewport {
            scroll: Vec2::new(0.0, 20.0),
            insets: Insets::new(5.0, 8.0, 5.0, 8.0),
        };
        // Surface (20, 13) → content (15, 25): line 1, offset 11, no chip.
        assert_eq!(
            buf.chip_at_point(Some(&l), &view, Point::new(20.0, 13.0)),
            None
        );
        // Surface (20, -7) → content (15, 5): line 0, offset 1.
        assert_eq!(
            buf.chip_at_point(Some(&l), &view, Point::new(20.0, -7.0)),
            Some(london)
        );
    }

    #[test]
    fn missing_layout_degrades_to_no_chip() {
        let (buf, _, _) = two_city_buffer();
        let view = Viewport::default();
        let none: Option<&MonospaceLayout> = None;
        assert_eq!(buf.chip_at_point(none, &view, Point::new(15.0, 5.0)), None);
    }

    #[test]
    fn frame_and_anchor_for_single_line_chip() {
        let (buf, _, paris) = two_city_buffer();
        let l = layout();
        let view = Viewport {
            scroll: Vec2::ZERO,
            insets: Insets::new(5.0, 8.0, 5.0, 8.0),
        };
        let origin = Point::new(7.0, 9.0);
        let frame = buf.chip_frame(paris, Some(&l), &view, origin).unwrap();
        // Range [3,5]: x spans [30,50) in content space; line 0 is 20 tall.
        assert_eq!(frame, Rect::new(42.0, 17.0, 62.0, 37.0));
        let anchor = buf.chip_anchor(paris, Some(&l), &view, origin).unwrap();
        assert_eq!(anchor, Point::new(52.0, 37.0));
    }

    #[test]
    fn anchor_uses_left_edge_for_wrapped_chip() {
        let mut buf = ChipBuffer::new();
        // Range [8,12] crosses the 10-char line break.
        let chip = buf.attach(TextRange::new(8, 12), ChipSpan::new("wrapped"));
        let l = layout();
        let view = Viewport::default();
        let frame = buf.chip_frame(chip, Some(&l), &view, Point::ZERO).unwrap();
        let anchor = buf.chip_anchor(chip, Some(&l), &view, Point::ZERO).unwrap();
        assert_eq!(anchor.x, frame.x0, "wrapped chips anchor at the left edge");
        assert_eq!(anchor.y, frame.y1);
    }

    #[test]
    fn frame_of_stale_id_is_none() {
        let (mut buf, london, _) = two_city_buffer();
        buf.detach(london);
        let l = layout();
        let view = Viewport::default();
        assert!(buf.chip_frame(london, Some(&l), &view, Point::ZERO).is_none());
    }
}
