// Copyright 2026 the Chipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture machine implementation.
//!
//! ## States
//!
//! The machine's state is implicit in its fields rather than an enum:
//!
//! - **Idle**: `chip_at_down` is `None`; no chip is under focus.
//! - **Tracking**: `chip_at_down` is set, the gesture is in progress, and a
//!   long-press timer may be armed.
//! - **Long-press fired**: the timer elapsed during tracking;
//!   `long_press_fired` suppresses the click on the gesture's release.
//!
//! ## Dispatch guarantees
//!
//! At most one click or long-click is dispatched per gesture. A click
//! requires the release to resolve to the same chip the gesture started
//! on; a long-click requires the armed timer to fire first, and the
//! subsequent release dispatches nothing regardless of where it lands.
//!
//! ## Highlight invariant
//!
//! One chip at most carries the pressed visual per surface. Retargeting
//! clears the previous chip's flag before setting the new one's.

use alloc::boxed::Box;
use core::time::Duration;

use crate::types::{GestureHost, TimerToken, TouchEvent, TouchPhase};

/// The platform-standard long-press duration used when none is configured.
pub const LONG_PRESS_TIMEOUT: Duration = Duration::from_millis(500);

type Handler<K, H> = Box<dyn FnMut(&mut H, K) -> bool>;

/// Per-surface touch dispatcher for inline chips.
///
/// Consumes the host surface's raw touch stream via
/// [`handle_touch`](Self::handle_touch), resolves the touched chip through
/// the host's hit test, maintains the single-highlight invariant, runs the
/// long-press timer through the host's scheduler, and invokes the
/// registered click / long-click handlers at most once per gesture.
///
/// One instance per host surface; state resets at every gesture boundary.
///
/// ## Usage
///
/// - Register handlers with [`on_click`](Self::on_click) and
///   [`on_long_click`](Self::on_long_click). The long-press timer is only
///   armed when a long-click handler exists.
/// - Forward every raw touch event to [`handle_touch`](Self::handle_touch);
///   its return value tells the host whether to treat the gesture as
///   consumed instead of falling through to default text behavior.
/// - Deliver the scheduled callback to
///   [`long_press_reached`](Self::long_press_reached) with the token the
///   scheduler returned.
pub struct ChipGestures<K, H> {
    chip_at_down: Option<K>,
    highlighted: Option<K>,
    long_press_fired: bool,
    pending_timer: Option<TimerToken>,
    long_press_timeout: Duration,
    on_click: Option<Handler<K, H>>,
    on_long_click: Option<Handler<K, H>>,
}

impl<K: Copy + Eq + core::fmt::Debug, H> core::fmt::Debug for ChipGestures<K, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChipGestures")
            .field("chip_at_down", &self.chip_at_down)
            .field("highlighted", &self.highlighted)
            .field("long_press_fired", &self.long_press_fired)
            .field("pending_timer", &self.pending_timer)
            .field("long_press_timeout", &self.long_press_timeout)
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq, H: GestureHost<K>> Default for ChipGestures<K, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq, H: GestureHost<K>> ChipGestures<K, H> {
    /// Create an idle machine with the standard long-press timeout.
    pub fn new() -> Self {
        Self {
            chip_at_down: None,
            highlighted: None,
            long_press_fired: false,
            pending_timer: None,
            long_press_timeout: LONG_PRESS_TIMEOUT,
            on_click: None,
            on_long_click: None,
        }
    }

    /// Override the long-press duration.
    pub fn with_long_press_timeout(mut self, timeout: Duration) -> Self {
        self.long_press_timeout = timeout;
        self
    }

    /// Register the click handler.
    ///
    /// The handler's boolean result means "handled" to the host's own
    /// policies; the machine's bookkeeping ignores it.
    pub fn on_click(&mut self, handler: impl FnMut(&mut H, K) -> bool + 'static) {
        self.on_click = Some(Box::new(handler));
    }

    /// Register the long-click handler. Its presence is what arms the
    /// long-press timer on touch-down.
    pub fn on_long_click(&mut self, handler: impl FnMut(&mut H, K) -> bool + 'static) {
        self.on_long_click = Some(Box::new(handler));
    }

    /// The chip currently carrying the pressed visual, if any.
    pub fn highlighted(&self) -> Option<K> {
        self.highlighted
    }

    /// Feed one raw touch event through the machine.
    ///
    /// Returns whether the host should consume the event. The flag is
    /// sticky to the gesture's down target: once a gesture starts over a
    /// chip, every event through its release reports consumed, even when
    /// no click ends up dispatched.
    pub fn handle_touch(&mut self, host: &mut H, event: TouchEvent) -> bool {
        let under = host.chip_at(event.pos);
        match event.phase {
            TouchPhase::Down => {
                self.chip_at_down = under;
                if let Some(chip) = under {
                    self.highlight(host, chip);
                    if self.on_long_click.is_some() {
                        self.pending_timer =
                            Some(host.schedule_long_press(self.long_press_timeout));
                    }
                }
                self.chip_at_down.is_some()
            }
            TouchPhase::Move => {
                // The finger left the down target: stop listening for a
                // long-press. No new timer is armed for a chip dragged
                // onto; only the down target can long-press.
                if under != self.chip_at_down {
                    self.disarm(host);
                }
                if !self.long_press_fired {
                    match under {
                        Some(chip) => self.highlight(host, chip),
                        None => self.clear_highlight(host),
                    }
                }
                self.chip_at_down.is_some()
            }
            TouchPhase::Up => {
                let started_on_chip = self.chip_at_down.is_some();
                // A click needs the touch to start and end on the same chip,
                // with no long-press in between.
                if !self.long_press_fired && started_on_chip && under == self.chip_at_down {
                    if let Some(chip) = self.chip_at_down {
                        self.dispatch(host, chip, false);
                    }
                }
                self.cleanup(host);
                // Consume the release whenever the gesture started on a
                // chip, so a fallthrough target past the end of text cannot
                // steal it.
                started_on_chip
            }
            TouchPhase::Cancel => {
                self.cleanup(host);
                false
            }
        }
    }

    /// Deliver the scheduled long-press callback.
    ///
    /// `token` must be the value the host's scheduler returned. If the
    /// machine disarmed that timer in the meantime (release, drag-off,
    /// cancel), the call is a no-op; delivery and disarming race safely
    /// because both run on the same single-threaded queue.
    pub fn long_press_reached(&mut self, host: &mut H, token: TimerToken) {
        if self.pending_timer != Some(token) {
            return;
        }
        self.pending_timer = None;
        self.long_press_fired = true;
        host.long_press_feedback();
        self.clear_highlight(host);
        if let Some(chip) = self.chip_at_down {
            self.dispatch(host, chip, true);
        }
    }

    fn highlight(&mut self, host: &mut H, chip: K) {
        // Re-highlighting the current target is a no-op; repeated redraw
        // requests for an unchanged value are skipped.
        if self.highlighted == Some(chip) {
            return;
        }
        if let Some(prev) = self.highlighted.replace(chip) {
            host.set_pressed(prev, false);
        }
        host.set_pressed(chip, true);
        host.request_redraw();
    }

    fn clear_highlight(&mut self, host: &mut H) {
        if let Some(prev) = self.highlighted.take() {
            host.set_pressed(prev, false);
            host.request_redraw();
        }
    }

    fn disarm(&mut self, host: &mut H) {
        if let Some(token) = self.pending_timer.take() {
            host.cancel_long_press(token);
        }
    }

    /// End-of-gesture cleanup shared by `Up` and `Cancel`.
    fn cleanup(&mut self, host: &mut H) {
        self.long_press_fired = false;
        self.chip_at_down = None;
        self.clear_highlight(host);
        self.disarm(host);
    }

    fn dispatch(&mut self, host: &mut H, chip: K, long: bool) {
        let handler = if long {
            self.on_long_click.as_mut()
        } else {
            self.on_click.as_mut()
        };
        // The handler's result only informs host-side consumption policy;
        // internal state resets happen regardless.
        if let Some(handler) = handler {
            let _ = handler(host, chip);
        }
    }
}
