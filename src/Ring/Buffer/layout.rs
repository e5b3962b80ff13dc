use crossbeam_utils::CachePadded;
use std::sync::atomic::AtomicU64;

use crate::Ring::Structs::SlotGeometry;

/// Coarse occupancy of a ring.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FillLevel {
    Empty,
    Partial,
    Full,
}

/// Read cursor, write cursor and occupancy of one ring.
///
/// Both cursors are byte offsets into the storage arena. They are always a
/// multiple of `slot_size` and below `total_size`, and the occupied region is
/// exactly the `full_slots` slots walking forward (wrapping) from `read_pos`
/// to `write_pos`.
///
/// The ring keeps its tracker behind the lock; `RingBuffer::snapshot` hands
/// out copies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cursors {
    geometry: SlotGeometry,
    read_pos: usize,
    write_pos: usize,
    full_slots: usize,
}

impl Cursors {
    /// A tracker pre-loaded to half capacity: `num_slots / 2` occupied slots
    /// starting at offset 0.
    pub(crate) fn half_full(geometry: SlotGeometry) -> Self {
        let half = geometry.half_slots();
        Self {
            geometry,
            read_pos: 0,
            write_pos: (half * geometry.slot_size) % geometry.total_size,
            full_slots: half,
        }
    }

    #[inline]
    pub fn read_pos(&self) -> usize {
        self.read_pos
    }

    #[inline]
    pub fn write_pos(&self) -> usize {
        self.write_pos
    }

    #[inline]
    pub fn full_slots(&self) -> usize {
        self.full_slots
    }

    #[inline]
    pub fn geometry(&self) -> SlotGeometry {
        self.geometry
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.full_slots == self.geometry.num_slots
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.full_slots == 0
    }

    pub fn level(&self) -> FillLevel {
        if self.is_empty() {
            FillLevel::Empty
        } else if self.is_full() {
            FillLevel::Full
        } else {
            FillLevel::Partial
        }
    }

    /// Claim the slot at `write_pos` for writing and return its offset.
    /// Caller must have checked `!is_full()`.
    #[inline]
    pub(crate) fn advance_write(&mut self) -> usize {
        debug_assert!(!self.is_full());
        let offset = self.write_pos;
        self.write_pos = (self.write_pos + self.geometry.slot_size) % self.geometry.total_size;
        self.full_slots += 1;
        offset
    }

    /// Release the slot at `read_pos` and return its offset.
    /// Caller must have checked `!is_empty()`.
    #[inline]
    pub(crate) fn advance_read(&mut self) -> usize {
        debug_assert!(!self.is_empty());
        let offset = self.read_pos;
        self.read_pos = (self.read_pos + self.geometry.slot_size) % self.geometry.total_size;
        self.full_slots -= 1;
        offset
    }

    /// Drop the oldest `num_slots / 2` occupied slots by moving the read
    /// cursor forward. Storage bytes are left untouched.
    /// Returns the number of slots skipped.
    pub(crate) fn skip_oldest_half(&mut self) -> usize {
        let half = self.geometry.half_slots().min(self.full_slots);
        self.read_pos = (self.read_pos + half * self.geometry.slot_size) % self.geometry.total_size;
        self.full_slots -= half;
        half
    }

    /// Check the tracker invariants.
    pub fn is_consistent(&self) -> bool {
        let SlotGeometry {
            slot_size,
            num_slots,
            total_size,
        } = self.geometry;

        self.full_slots <= num_slots
            && self.read_pos < total_size
            && self.write_pos < total_size
            && self.read_pos % slot_size == 0
            && self.write_pos % slot_size == 0
            && self.write_pos == (self.read_pos + self.full_slots * slot_size) % total_size
    }
}

/// Event counters kept outside the lock so monitors can poll them without
/// contending with the real-time path.
/// Padded to prevent false sharing between the writer- and reader-side counters.
#[derive(Default)]
pub(crate) struct EventCounters {
    pub inserted: CachePadded<AtomicU64>,
    pub read: CachePadded<AtomicU64>,
    pub overflows: CachePadded<AtomicU64>,
    pub underruns: CachePadded<AtomicU64>,
    pub skipped: CachePadded<AtomicU64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(slot_size: usize, num_slots: usize) -> SlotGeometry {
        SlotGeometry::new(slot_size, num_slots).unwrap()
    }

    #[test]
    fn starts_half_full() {
        let c = Cursors::half_full(geometry(4, 10));
        assert_eq!(c.read_pos(), 0);
        assert_eq!(c.write_pos(), 20);
        assert_eq!(c.full_slots(), 5);
        assert_eq!(c.level(), FillLevel::Partial);
        assert!(c.is_consistent());
    }

    #[test]
    fn single_slot_ring_starts_empty() {
        let c = Cursors::half_full(geometry(8, 1));
        assert_eq!(c.full_slots(), 0);
        assert_eq!(c.write_pos(), 0);
        assert_eq!(c.level(), FillLevel::Empty);
    }

    #[test]
    fn cursors_wrap_at_total_size() {
        let mut c = Cursors::half_full(geometry(2, 3));
        // half = 1: read 0, write 2
        assert_eq!(c.advance_write(), 2);
        assert_eq!(c.advance_write(), 4);
        assert_eq!(c.write_pos(), 0);
        assert!(c.is_full());

        assert_eq!(c.advance_read(), 0);
        assert_eq!(c.advance_read(), 2);
        assert_eq!(c.advance_read(), 4);
        assert_eq!(c.read_pos(), 0);
        assert!(c.is_empty());
        assert!(c.is_consistent());
    }

    #[test]
    fn skip_oldest_half_moves_only_the_reader() {
        let mut c = Cursors::half_full(geometry(4, 4));
        c.advance_write();
        c.advance_write();
        assert!(c.is_full());
        let write_before = c.write_pos();

        assert_eq!(c.skip_oldest_half(), 2);
        assert_eq!(c.full_slots(), 2);
        assert_eq!(c.read_pos(), 8);
        assert_eq!(c.write_pos(), write_before);
        assert!(c.is_consistent());
    }
}
