// Copyright 2026 the Chipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chipline_buffer --heading-base-level=0

//! Chipline Buffer: the chip span registry and hit-tester.
//!
//! A "composer" (external to this workspace) concatenates labels into a
//! text buffer and attaches a chip at each label's offsets. This crate is
//! the queryable side of that arrangement:
//!
//! - [`ChipBuffer`] stores `(TextRange, chip)` pairs behind generational
//!   [`ChipId`] handles — the chip's identity. Stale handles degrade to
//!   no-ops and `None`, never errors.
//! - [`ChipBuffer::chip_at_offset`] is the zero-length span point query;
//!   shared boundary offsets resolve to the first chip in attachment order.
//! - [`ChipBuffer::chip_at_point`] maps a surface-relative touch coordinate
//!   to a chip, going through the host's [`TextLayout`] queries and
//!   [`Viewport`] scroll/padding state. A host that is not laid out yet
//!   (`None` layout) hit-tests to nothing.
//! - [`ChipBuffer::chip_frame`] / [`ChipBuffer::chip_anchor`] compute a
//!   chip's on-screen rectangle and a popup anchor point under it.
//!
//! The text layout engine stays abstract behind [`TextLayout`]; a
//! fixed-pitch [`MonospaceLayout`] reference implementation is included for
//! tests and demos.
//!
//! # Example
//!
//! ```rust
//! use chipline_buffer::{ChipBuffer, MonospaceLayout, TextRange, Viewport};
//! use chipline_span::ChipSpan;
//! use kurbo::Point;
//!
//! // Compose "伦敦 巴黎" with a chip over each city name.
//! let mut buf = ChipBuffer::new();
//! let london = buf.attach(TextRange::new(0, 2), ChipSpan::new("伦敦"));
//! let paris = buf.attach(TextRange::new(3, 5), ChipSpan::new("巴黎"));
//!
//! let layout = MonospaceLayout {
//!     char_width: 24.0,
//!     line_height: 40.0,
//!     line_len: 16,
//!     len: 6,
//! };
//! let view = Viewport::default();
//!
//! // A touch over the second character resolves to the first chip.
//! let hit = buf.chip_at_point(Some(&layout), &view, Point::new(30.0, 10.0));
//! assert_eq!(hit, Some(london));
//! assert_ne!(hit, Some(paris));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod buffer;
pub mod hit;
pub mod layout;
pub mod types;

pub use buffer::ChipBuffer;
pub use layout::{MonospaceLayout, TextLayout, Viewport};
pub use types::{ChipId, TextRange};
