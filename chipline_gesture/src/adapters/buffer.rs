// Copyright 2026 the Chipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Chipline Buffer.
//!
//! ## Feature
//!
//! Enable with `buffer_adapter`.
//!
//! ## Notes
//!
//! [`BufferGestureHost`] wires a [`ChipBuffer`] and its layout/viewport
//! state into the [`GestureHost`] seam, so a [`ChipGestures`] machine keyed
//! by [`ChipId`] can run against it directly. The platform side (redraw
//! requests, haptics, the timer queue) stays behind the small
//! [`SurfaceShell`] trait the embedding supplies.
//!
//! [`ChipGestures`]: crate::machine::ChipGestures

use core::time::Duration;

use kurbo::Point;

use chipline_buffer::{ChipBuffer, ChipId, TextLayout, Viewport};

use crate::types::{GestureHost, TimerToken};

/// The platform-side effects a gesture host cannot provide itself.
///
/// One implementation per embedding; the adapter forwards the machine's
/// redraw, feedback, and timer requests here unchanged.
pub trait SurfaceShell {
    /// Ask the platform to repaint the surface.
    fn request_redraw(&mut self);

    /// Emit the platform's long-press feedback (typically a haptic).
    fn long_press_feedback(&mut self);

    /// Arm a one-shot timer; the shell must later deliver the returned
    /// token to [`ChipGestures::long_press_reached`].
    ///
    /// [`ChipGestures::long_press_reached`]: crate::machine::ChipGestures::long_press_reached
    fn schedule_long_press(&mut self, delay: Duration) -> TimerToken;

    /// Best-effort cancellation of a previously armed timer.
    fn cancel_long_press(&mut self, token: TimerToken);
}

/// A [`GestureHost`] backed by a [`ChipBuffer`].
///
/// Owns the buffer plus the view state its hit test needs. `layout` is
/// `None` until the embedding has measured its text; all queries degrade
/// to "no chip" until then.
#[derive(Debug)]
pub struct BufferGestureHost<L, S> {
    buffer: ChipBuffer,
    layout: Option<L>,
    view: Viewport,
    shell: S,
}

impl<L: TextLayout, S: SurfaceShell> BufferGestureHost<L, S> {
    /// Wrap a buffer and shell into a gesture host with no layout yet.
    pub fn new(buffer: ChipBuffer, shell: S) -> Self {
        Self {
            buffer,
            layout: None,
            view: Viewport::default(),
            shell,
        }
    }

    /// Shared access to the chip buffer.
    pub fn buffer(&self) -> &ChipBuffer {
        &self.buffer
    }

    /// Mutable access to the chip buffer, for attaching and detaching.
    pub fn buffer_mut(&mut self) -> &mut ChipBuffer {
        &mut self.buffer
    }

    /// Install or replace the text layout after a (re)measure.
    pub fn set_layout(&mut self, layout: L) {
        self.layout = Some(layout);
    }

    /// Drop the layout, e.g. when the text changes and a remeasure is
    /// pending. Queries degrade to "no chip" until a new one is set.
    pub fn clear_layout(&mut self) {
        self.layout = None;
    }

    /// Mutable access to the scroll/insets state applied to every query.
    pub fn view_mut(&mut self) -> &mut Viewport {
        &mut self.view
    }

    /// Shared access to the embedding's shell.
    pub fn shell(&self) -> &S {
        &self.shell
    }

    /// The chip's on-screen frame, forwarded from the buffer's geometry
    /// queries with this host's layout and viewport applied.
    pub fn chip_frame(&self, id: ChipId, surface_origin: Point) -> Option<kurbo::Rect> {
        self.buffer
            .chip_frame(id, self.layout.as_ref(), &self.view, surface_origin)
    }

    /// The chip's popup anchor point, see [`ChipBuffer::chip_anchor`].
    pub fn chip_anchor(&self, id: ChipId, surface_origin: Point) -> Option<Point> {
        self.buffer
            .chip_anchor(id, self.layout.as_ref(), &self.view, surface_origin)
    }
}

impl<L: TextLayout, S: SurfaceShell> GestureHost<ChipId> for BufferGestureHost<L, S> {
    fn chip_at(&self, pt: Point) -> Option<ChipId> {
        self.buffer.chip_at_point(self.layout.as_ref(), &self.view, pt)
    }

    fn set_pressed(&mut self, chip: ChipId, pressed: bool) {
        // Stale ids report no change and are ignored.
        let _ = self.buffer.set_pressed(chip, pressed);
    }

    fn request_redraw(&mut self) {
        self.shell.request_redraw();
    }

    fn long_press_feedback(&mut self) {
        self.shell.long_press_feedback();
    }

    fn schedule_long_press(&mut self, delay: Duration) -> TimerToken {
        self.shell.schedule_long_press(delay)
    }

    fn cancel_long_press(&mut self, token: TimerToken) {
        self.shell.cancel_long_press(token)
    }
}
