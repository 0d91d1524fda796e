// Copyright 2026 the Chipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chipline_gesture --heading-base-level=0

//! Chipline Gesture: a deterministic, `no_std` touch dispatcher for inline chips.
//!
//! ## Overview
//!
//! This crate turns a host surface's raw touch stream — down → move* → up or cancel —
//! into at most one chip click or long-click per gesture.
//! It does not perform hit testing or own any chips.
//! Instead, it queries the host through the [`GestureHost`](crate::types::GestureHost) seam
//! and tells it what to highlight, when to repaint, and which timers to run.
//!
//! ## Inputs
//!
//! Feed every raw [`TouchEvent`](crate::types::TouchEvent) to
//! [`ChipGestures::handle_touch`](crate::machine::ChipGestures::handle_touch).
//! Its boolean result is the consumption decision: `true` means the gesture belongs
//! to a chip and the host should not run its default text behavior for the event.
//! Consumption is sticky to the gesture's down target, so a gesture that starts on a
//! chip consumes its release even when no click is dispatched.
//!
//! ## Dispatch
//!
//! A click fires on release when the gesture started and ended on the same chip and
//! no long-press fired in between.
//! A long-click fires when the timer armed at touch-down elapses; the machine then
//! emits the host's feedback, drops the highlight, and suppresses the click on the
//! eventual release.
//! The timer is only armed when a long-click handler is registered, and only for the
//! chip under the initial touch; dragging onto a chip never arms one.
//!
//! ## Highlight
//!
//! At most one chip carries the pressed visual per surface.
//! The machine retargets it as the finger moves across chips, clears it when the
//! finger leaves all chips, and requests a repaint only when the highlight actually
//! changes.
//!
//! ## Timers
//!
//! The host's scheduler returns a [`TimerToken`](crate::types::TimerToken) per armed
//! timer; the host delivers it back to
//! [`long_press_reached`](crate::machine::ChipGestures::long_press_reached) when the
//! delay elapses. A token the machine has since disarmed is ignored, so a fire that
//! races a release or drag-off on the host's event queue is harmless.
//!
//! ## Adapters
//!
//! With the `buffer_adapter` feature, `adapters::buffer` provides a ready-made
//! [`GestureHost`](crate::types::GestureHost) backed by a `chipline_buffer`
//! `ChipBuffer`, leaving only the platform shell (redraw, haptics, timer
//! queue) to the embedding.
//!
//! ## Workflow
//!
//! 1) Implement [`GestureHost`](crate::types::GestureHost) for your surface (or use
//!    the buffer adapter) and register handlers on a
//!    [`ChipGestures`](crate::machine::ChipGestures).
//! 2) Forward raw touches to
//!    [`handle_touch`](crate::machine::ChipGestures::handle_touch) and honor its
//!    consumption result.
//! 3) Deliver elapsed timers to
//!    [`long_press_reached`](crate::machine::ChipGestures::long_press_reached).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod machine;
pub mod types;

pub use machine::{ChipGestures, LONG_PRESS_TIMEOUT};
pub use types::{GestureHost, TimerToken, TouchEvent, TouchPhase};
