// Copyright 2026 the Chipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chip registry: slot arena, liveness, attachment order, offset queries.

use alloc::vec::Vec;
use chipline_span::ChipSpan;

use crate::types::{ChipId, TextRange};

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    range: TextRange,
    chip: ChipSpan,
}

/// The decorated-text side of a host surface: every chip the composer
/// attached, keyed by generational [`ChipId`] and queryable by character
/// offset.
///
/// The buffer does not hold the text itself — composing label text is the
/// composer's business — only the registered `(TextRange, chip)` pairs.
/// Attachment order is preserved and is the tie-break for point queries
/// that land on a shared boundary offset.
#[derive(Clone, Debug, Default)]
pub struct ChipBuffer {
    slots: Vec<Option<Slot>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    order: Vec<ChipId>, // attachment order, maintained across detaches
}

impl ChipBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `chip` to `range`, returning its identity handle.
    ///
    /// Ranges of distinct chips must not overlap; this is the composer's
    /// contract and is debug-asserted here.
    pub fn attach(&mut self, range: TextRange, chip: ChipSpan) -> ChipId {
        debug_assert!(
            self.iter().all(|(_, _, r)| !r.overlaps(&range)),
            "chip ranges in a buffer must not overlap"
        );
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(Slot {
                generation,
                range,
                chip,
            });
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ChipId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(Slot {
                generation,
                range,
                chip,
            }));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ChipId uses 32-bit indices by design."
            )]
            ((self.slots.len() - 1) as u32, generation)
        };
        let id = ChipId::new(idx, generation);
        self.order.push(id);
        id
    }

    /// Detach a chip from the buffer. Stale ids are a no-op.
    pub fn detach(&mut self, id: ChipId) {
        if !self.is_alive(id) {
            return;
        }
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
        self.order.retain(|o| *o != id);
    }

    /// Returns true if `id` refers to a live chip.
    ///
    /// A `ChipId` is live if its slot exists and its generation matches the
    /// current generation stored in that slot. See [`ChipId`] docs for the
    /// generational semantics.
    pub fn is_alive(&self, id: ChipId) -> bool {
        self.slot(id).is_some()
    }

    /// Number of attached chips.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the buffer has no chips.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The chip for `id`, or `None` if stale.
    pub fn get(&self, id: ChipId) -> Option<&ChipSpan> {
        self.slot(id).map(|s| &s.chip)
    }

    /// The chip for `id`, mutable, or `None` if stale.
    pub fn get_mut(&mut self, id: ChipId) -> Option<&mut ChipSpan> {
        self.slot_mut(id).map(|s| &mut s.chip)
    }

    /// The text range `id` occupies, or `None` if stale.
    pub fn range_of(&self, id: ChipId) -> Option<TextRange> {
        self.slot(id).map(|s| s.range)
    }

    /// Set a chip's pressed flag. Returns whether the value changed;
    /// stale ids report `false`.
    pub fn set_pressed(&mut self, id: ChipId, pressed: bool) -> bool {
        self.slot_mut(id)
            .map(|s| s.chip.set_pressed(pressed))
            .unwrap_or(false)
    }

    /// Set a chip's enabled flag. Returns whether the value changed;
    /// stale ids report `false`.
    pub fn set_enabled(&mut self, id: ChipId, enabled: bool) -> bool {
        self.slot_mut(id)
            .map(|s| s.chip.set_enabled(enabled))
            .unwrap_or(false)
    }

    /// Zero-length point query: the chip whose range contains `offset`.
    ///
    /// Containment is inclusive at both ends, and when a boundary offset is
    /// shared by two adjacent chips the first in attachment order wins.
    /// This tie-break is deterministic and preserved intentionally.
    pub fn chip_at_offset(&self, offset: usize) -> Option<ChipId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.slot(*id).is_some_and(|s| s.range.contains(offset)))
    }

    /// Iterate chips in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = (ChipId, &ChipSpan, TextRange)> {
        self.order.iter().filter_map(|id| {
            self.slot(*id).map(|s| (*id, &s.chip, s.range))
        })
    }

    fn slot(&self, id: ChipId) -> Option<&Slot> {
        self.slots
            .get(id.idx())?
            .as_ref()
            .filter(|s| s.generation == id.1)
    }

    fn slot_mut(&mut self, id: ChipId) -> Option<&mut Slot> {
        self.slots
            .get_mut(id.idx())?
            .as_mut()
            .filter(|s| s.generation == id.1)
    }
}
