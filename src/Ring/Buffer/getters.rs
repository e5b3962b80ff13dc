use std::sync::atomic::Ordering::Relaxed;

use tracing::debug;

use super::layout::Cursors;
use super::Buffer::RingBuffer;
use crate::Core::error::Result;
use crate::Ring::Structs::{RingStats, SlotGeometry};

/// Accessors for monitoring and debugging.
///
/// Geometry and event counters are read without the lock; anything touching
/// cursors or slot bytes takes it briefly.
impl RingBuffer {
    #[inline]
    pub fn slot_size(&self) -> usize {
        self.geometry.slot_size
    }

    #[inline]
    pub fn num_slots(&self) -> usize {
        self.geometry.num_slots
    }

    #[inline]
    pub fn total_size(&self) -> usize {
        self.geometry.total_size
    }

    #[inline]
    pub fn geometry(&self) -> SlotGeometry {
        self.geometry
    }

    /// Copy of the cursors and occupancy, taken under the lock.
    pub fn snapshot(&self) -> Cursors {
        self.state.lock().cursors
    }

    /// Number of occupied slots right now.
    pub fn full_slots(&self) -> usize {
        self.state.lock().cursors.full_slots()
    }

    /// Copy the most recently read slot into `out`.
    pub fn last_read(&self, out: &mut [u8]) -> Result<()> {
        self.geometry.check_slot(out.len())?;
        out.copy_from_slice(&self.state.lock().last_read);
        Ok(())
    }

    pub fn overflow_count(&self) -> u64 {
        self.counters.overflows.load(Relaxed)
    }

    pub fn underrun_count(&self) -> u64 {
        self.counters.underruns.load(Relaxed)
    }

    pub fn stats(&self) -> RingStats {
        RingStats {
            slot_size: self.geometry.slot_size as u64,
            num_slots: self.geometry.num_slots as u64,
            full_slots: self.full_slots() as u64,
            inserted: self.counters.inserted.load(Relaxed),
            read: self.counters.read.load(Relaxed),
            overflows: self.counters.overflows.load(Relaxed),
            underruns: self.counters.underruns.load(Relaxed),
            skipped: self.counters.skipped.load(Relaxed),
        }
    }

    /// Emit geometry, cursors and occupancy as a single debug event.
    pub fn debug_dump(&self) {
        let cursors = self.snapshot();
        debug!(
            total_size = self.geometry.total_size,
            read_pos = cursors.read_pos(),
            write_pos = cursors.write_pos(),
            full_slots = cursors.full_slots(),
            "slot ring state"
        );
    }
}
