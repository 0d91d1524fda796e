// Copyright 2026 the Chipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Buffer hit testing and geometry.
//!
//! Attaches chips to a buffer over a monospace layout, resolves touch
//! points through scroll and insets, and prints each chip's on-screen
//! frame and popup anchor.
//!
//! Run:
//! - `cargo run -p chipline_demos --example buffer_hit_test`

use chipline_buffer::{ChipBuffer, MonospaceLayout, TextRange, Viewport};
use chipline_span::ChipSpan;
use kurbo::{Insets, Point, Vec2};

fn main() {
    // "伦敦 巴黎" at the head of a 10-characters-per-line layout, plus a
    // chip whose range wraps across the line break.
    let mut buffer = ChipBuffer::new();
    buffer.attach(TextRange::new(0, 2), ChipSpan::new("伦敦"));
    buffer.attach(TextRange::new(3, 5), ChipSpan::new("巴黎"));
    buffer.attach(TextRange::new(8, 12), ChipSpan::new("Alexandria"));

    let layout = MonospaceLayout {
        char_width: 10.0,
        line_height: 20.0,
        line_len: 10,
        len: 20,
    };
    let view = Viewport {
        scroll: Vec2::new(0.0, 10.0),
        insets: Insets::new(4.0, 4.0, 4.0, 4.0),
    };

    println!("== Touch points (surface coordinates) ==");
    for pt in [
        Point::new(15.0, 5.0),
        Point::new(46.0, 5.0),
        Point::new(75.0, 5.0),
        Point::new(15.0, 25.0),
    ] {
        let label = buffer
            .chip_at_point(Some(&layout), &view, pt)
            .and_then(|id| buffer.get(id))
            .map_or("(plain text)", ChipSpan::label);
        println!("  ({:>5.1}, {:>5.1}) -> {label}", pt.x, pt.y);
    }

    println!("== Frames and anchors ==");
    let origin = Point::ZERO;
    for (id, chip, range) in buffer.iter() {
        let frame = buffer.chip_frame(id, Some(&layout), &view, origin);
        let anchor = buffer.chip_anchor(id, Some(&layout), &view, origin);
        println!(
            "  {} [{}, {}]  frame={frame:?}  anchor={anchor:?}",
            chip.label(),
            range.start,
            range.end
        );
    }
}
