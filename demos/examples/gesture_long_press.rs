// Copyright 2026 the Chipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Long-press dispatch.
//!
//! Shows the timer handshake: touch-down arms a timer through the shell,
//! the shell later delivers its token back to the machine, and the fire
//! suppresses the click on the eventual release. A second gesture releases
//! before the timer and clicks normally.
//!
//! Run:
//! - `cargo run -p chipline_demos --example gesture_long_press`

use std::time::Duration;

use chipline_buffer::{ChipBuffer, ChipId, MonospaceLayout, TextRange};
use chipline_gesture::adapters::buffer::{BufferGestureHost, SurfaceShell};
use chipline_gesture::{ChipGestures, TimerToken, TouchEvent};
use chipline_span::ChipSpan;
use kurbo::Point;

/// Records the armed timer so `main` can play the scheduler's role.
#[derive(Debug, Default)]
struct Shell {
    next_token: u64,
    pending: Option<TimerToken>,
}

impl SurfaceShell for Shell {
    fn request_redraw(&mut self) {}

    fn long_press_feedback(&mut self) {
        println!("  [shell] haptic");
    }

    fn schedule_long_press(&mut self, _delay: Duration) -> TimerToken {
        self.next_token += 1;
        let token = TimerToken::new(self.next_token);
        self.pending = Some(token);
        token
    }

    fn cancel_long_press(&mut self, token: TimerToken) {
        if self.pending == Some(token) {
            self.pending = None;
        }
    }
}

fn main() {
    let mut buffer = ChipBuffer::new();
    let _rome = buffer.attach(TextRange::new(0, 4), ChipSpan::new("Rome"));
    let mut host = BufferGestureHost::new(buffer, Shell::default());
    host.set_layout(MonospaceLayout {
        char_width: 10.0,
        line_height: 20.0,
        line_len: 40,
        len: 40,
    });

    let mut gestures: ChipGestures<ChipId, _> =
        ChipGestures::new().with_long_press_timeout(Duration::from_millis(400));
    gestures.on_click(|_host, _id| {
        println!("  click dispatched");
        true
    });
    gestures.on_long_click(|_host, _id| {
        println!("  long-click dispatched");
        true
    });

    let pt = Point::new(15.0, 5.0);

    println!("== Hold past the timeout ==");
    gestures.handle_touch(&mut host, TouchEvent::down(pt));
    // The 400 ms elapse: the shell delivers the token it armed.
    if let Some(token) = host.shell().pending {
        gestures.long_press_reached(&mut host, token);
    }
    gestures.handle_touch(&mut host, TouchEvent::up(pt));
    println!("  (no click on release, long-press already fired)");

    println!("== Quick tap ==");
    gestures.handle_touch(&mut host, TouchEvent::down(pt));
    gestures.handle_touch(&mut host, TouchEvent::up(pt));
}
