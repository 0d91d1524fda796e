// Copyright 2026 the Chipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture basics.
//!
//! This minimal example attaches two chips to a buffer, feeds synthetic
//! touch gestures through the machine, and prints which chip each gesture
//! clicked and whether the host consumed it.
//!
//! Run:
//! - `cargo run -p chipline_demos --example gesture_clicks`

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use chipline_buffer::{ChipBuffer, MonospaceLayout, TextRange};
use chipline_gesture::adapters::buffer::{BufferGestureHost, SurfaceShell};
use chipline_gesture::{ChipGestures, TimerToken, TouchEvent};
use chipline_span::ChipSpan;
use kurbo::Point;

/// A console stand-in for the platform surface.
#[derive(Debug, Default)]
struct Shell {
    next_token: u64,
}

impl SurfaceShell for Shell {
    fn request_redraw(&mut self) {
        println!("  [shell] redraw requested");
    }

    fn long_press_feedback(&mut self) {
        println!("  [shell] haptic");
    }

    fn schedule_long_press(&mut self, delay: Duration) -> TimerToken {
        self.next_token += 1;
        println!("  [shell] timer armed for {delay:?}");
        TimerToken::new(self.next_token)
    }

    fn cancel_long_press(&mut self, _token: TimerToken) {
        println!("  [shell] timer canceled");
    }
}

fn main() {
    // "伦敦 巴黎" rendered as 10 px monospace cells on one line.
    let mut buffer = ChipBuffer::new();
    let london = buffer.attach(TextRange::new(0, 2), ChipSpan::new("伦敦"));
    let paris = buffer.attach(TextRange::new(3, 5), ChipSpan::new("巴黎"));
    let mut host = BufferGestureHost::new(buffer, Shell::default());
    host.set_layout(MonospaceLayout {
        char_width: 10.0,
        line_height: 20.0,
        line_len: 40,
        len: 40,
    });

    let clicked = Rc::new(RefCell::new(Vec::new()));
    let mut gestures = ChipGestures::new();
    let log = clicked.clone();
    gestures.on_click(move |_host, id| {
        log.borrow_mut().push(id);
        true
    });

    println!("== Tap on 伦敦 ==");
    let pt = Point::new(15.0, 5.0);
    let down = gestures.handle_touch(&mut host, TouchEvent::down(pt));
    let up = gestures.handle_touch(&mut host, TouchEvent::up(pt));
    println!("  consumed: down={down} up={up}");

    println!("== Drag from 巴黎 off into plain text ==");
    let down = gestures.handle_touch(&mut host, TouchEvent::down(Point::new(42.0, 5.0)));
    gestures.handle_touch(&mut host, TouchEvent::moved(Point::new(200.0, 5.0)));
    let up = gestures.handle_touch(&mut host, TouchEvent::up(Point::new(200.0, 5.0)));
    println!("  consumed: down={down} up={up} (no click dispatched)");

    println!("== Results ==");
    for id in clicked.borrow().iter() {
        let label = host.buffer().get(*id).map_or("?", ChipSpan::label);
        let which = if *id == london {
            "london"
        } else if *id == paris {
            "paris"
        } else {
            "?"
        };
        println!("  clicked {label} ({which})");
    }
}
