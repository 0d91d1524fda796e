// Copyright 2026 the Chipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chipline_span --heading-base-level=0

//! Chipline Span: the inline chip entity.
//!
//! A chip is a pill-shaped label embedded inline in a block of text. This
//! crate holds the entity itself: an immutable label plus mutable visual
//! state ([`ChipFlags`]), a lazily cached intrinsic size, and an
//! alignment-aware draw operation.
//!
//! - Pressed/enabled state affects drawing only, never identity or size.
//! - The first [`ChipSpan::measure`] consults the renderer and caches the
//!   result; later calls are pure.
//! - [`ChipSpan::draw`] places the chip within a host text line per its
//!   [`VerticalAlign`] policy and [`ChipSpacing`] insets.
//!
//! Rendering technology is abstracted behind the [`ChipRenderer`] trait; the
//! entity never touches pixels itself. Likewise the text machinery is
//! elsewhere: attaching chips to a buffer and hit testing live in
//! `chipline_buffer`, and touch dispatch in `chipline_gesture`.
//!
//! # Example
//!
//! ```rust
//! use chipline_span::{ChipFlags, ChipRenderer, ChipSpan, LineBox};
//! use kurbo::{Point, Size};
//!
//! // A renderer that sizes chips from their label length.
//! struct TextRenderer;
//! impl ChipRenderer for TextRenderer {
//!     type Surface = Vec<String>;
//!     fn measure(&mut self, label: &str) -> Size {
//!         Size::new(label.chars().count() as f64 * 12.0 + 24.0, 32.0)
//!     }
//!     fn draw(&mut self, surface: &mut Vec<String>, label: &str, flags: ChipFlags, origin: Point) {
//!         surface.push(format!("{label}@{origin:?} pressed={}", flags.contains(ChipFlags::PRESSED)));
//!     }
//! }
//!
//! let mut r = TextRenderer;
//! let mut chip = ChipSpan::new("london");
//! let size = chip.measure(&mut r);
//! assert_eq!(size.height, 32.0);
//!
//! let mut out = Vec::new();
//! chip.set_pressed(true);
//! chip.draw(&mut r, &mut out, 0.0, LineBox { top: 0.0, baseline: 44.0, bottom: 52.0 });
//! assert_eq!(out.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod span;
pub mod types;

pub use span::{ChipRenderer, ChipSpan};
pub use types::{ChipFlags, ChipSpacing, LineBox, VerticalAlign};
