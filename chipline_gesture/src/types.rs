// Copyright 2026 the Chipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for gesture dispatch: touch phases and events, timer tokens,
//! and the host surface contract.
//!
//! ## Overview
//!
//! These types describe the input stream and the surface the
//! [`machine`](crate::machine) drives. The machine is generic over the chip
//! key `K`; hosts pick whatever identifies their chips (typically the
//! buffer's generational id).

use core::time::Duration;
use kurbo::Point;

/// Phase of a raw touch event.
///
/// A gesture is one `Down`, any number of `Move`s, and a terminating `Up`
/// or `Cancel`. The machine assumes sequential, non-reentrant delivery of
/// exactly that shape; overlapping gestures are out of scope.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TouchPhase {
    /// A finger went down on the surface.
    Down,
    /// The finger moved while down.
    Move,
    /// The finger lifted, terminating the gesture.
    Up,
    /// The gesture was aborted by the platform, terminating it.
    Cancel,
}

/// A raw touch event: phase plus surface-relative position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// Phase of this event within the gesture.
    pub phase: TouchPhase,
    /// Surface-relative touch position.
    pub pos: Point,
}

impl TouchEvent {
    /// A `Down` event at `pos`.
    pub fn down(pos: Point) -> Self {
        Self {
            phase: TouchPhase::Down,
            pos,
        }
    }

    /// A `Move` event at `pos`.
    pub fn moved(pos: Point) -> Self {
        Self {
            phase: TouchPhase::Move,
            pos,
        }
    }

    /// An `Up` event at `pos`.
    pub fn up(pos: Point) -> Self {
        Self {
            phase: TouchPhase::Up,
            pos,
        }
    }

    /// A `Cancel` event at `pos`.
    pub fn cancel(pos: Point) -> Self {
        Self {
            phase: TouchPhase::Cancel,
            pos,
        }
    }
}

/// Handle to a scheduled long-press callback.
///
/// Returned by [`GestureHost::schedule_long_press`] and quoted back when
/// the host delivers the callback. The machine compares tokens to decide
/// whether a firing timer is still the armed one; a stale token is a no-op.
/// Hosts should hand out distinct tokens across schedules on a surface so
/// a disarmed timer can never be mistaken for a fresh one.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    /// Wrap a raw token value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw token value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// The host surface contract the gesture machine drives.
///
/// Everything here runs on the host UI thread's event queue: scheduling is
/// a deferred callback on that same queue (deliver it to
/// [`ChipGestures::long_press_reached`](crate::machine::ChipGestures::long_press_reached)),
/// redraw requests are asynchronous signals to the next paint pass, and no
/// call may block.
pub trait GestureHost<K> {
    /// The chip under a surface-relative point, if any.
    ///
    /// Implementations fold in their scroll offset, content padding, and
    /// layout queries; a surface with no layout yet returns `None`.
    fn chip_at(&self, pt: Point) -> Option<K>;

    /// Update a chip's pressed-visual state.
    fn set_pressed(&mut self, chip: K, pressed: bool);

    /// Ask the surface to repaint.
    fn request_redraw(&mut self);

    /// Trigger long-press haptic feedback.
    fn long_press_feedback(&mut self);

    /// Schedule a one-shot long-press callback after `delay`.
    fn schedule_long_press(&mut self, delay: Duration) -> TimerToken;

    /// Cancel a previously scheduled callback. Cancelling a token that
    /// already fired (or was never armed) is a no-op.
    fn cancel_long_press(&mut self, token: TimerToken);
}
