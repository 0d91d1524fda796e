// Copyright 2026 the Chipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the buffer: chip identifiers and text ranges.

/// Identifier for a chip attached to a [`ChipBuffer`](crate::ChipBuffer).
///
/// This is a small, copyable handle that stays stable across updates but
/// becomes invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On attach, a fresh slot is allocated with generation `1`.
/// - On detach, the slot is freed; any existing `ChipId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `ChipId`.
///
/// ### Identity
///
/// The handle is the chip's identity. Two chips carrying equal labels are
/// distinct entities with distinct `ChipId`s; nothing in this workspace
/// compares chips by label.
///
/// ### Liveness
///
/// Use [`ChipBuffer::is_alive`](crate::ChipBuffer::is_alive) to check whether a `ChipId` still refers to a live chip.
/// Stale `ChipId`s never alias a different live chip because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ChipId(pub(crate) u32, pub(crate) u32);

impl ChipId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// The pair of character offsets a chip occupies in its buffer.
///
/// For point queries the range is treated as inclusive at both ends,
/// matching the span-attachment semantics the original text stacks expose:
/// a touch resolving exactly to `start` or `end` still belongs to the chip.
/// Ranges of distinct chips in the same buffer never overlap; shared
/// boundary offsets are resolved by registration order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TextRange {
    /// First character offset covered by the chip.
    pub start: usize,
    /// Last character offset covered by the chip.
    pub end: usize,
}

impl TextRange {
    /// Create a range. `start` must not exceed `end`.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether a zero-length point query at `offset` lands on this range.
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Whether two ranges overlap as character intervals.
    ///
    /// Touching at a boundary (`self.end == other.start`) is not an
    /// overlap: adjacent chips may share that offset, and point queries
    /// there are resolved by registration order.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}
