use std::sync::atomic::Ordering::Relaxed;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use tracing::debug;

use super::layout::{Cursors, EventCounters};
use super::Buffer::{RingBuffer, RingState};
use crate::Core::alloc::zeroed_bytes;
use crate::Core::error::Result;
use crate::Core::recovery::{overflow_reset, underrun_reset};
use crate::Core::underrun::{Silence, UnderrunFill};
use crate::Ring::Structs::{InsertOutcome, ReadOutcome, SlotGeometry};

impl RingBuffer {
    /// Create a ring of `num_slots` slots of `slot_size` bytes each, with the
    /// default (silent) underrun payload.
    ///
    /// Storage is zero-filled and the ring starts holding `num_slots / 2`
    /// slots of zeros.
    pub fn new(slot_size: usize, num_slots: usize) -> Result<Self> {
        Self::with_underrun_fill(slot_size, num_slots, Silence)
    }

    /// Same as [`RingBuffer::new`] with a custom underrun payload.
    pub fn with_underrun_fill<F>(slot_size: usize, num_slots: usize, fill: F) -> Result<Self>
    where
        F: UnderrunFill + 'static,
    {
        Self::from_parts(SlotGeometry::new(slot_size, num_slots)?, Box::new(fill))
    }

    pub(crate) fn from_parts(
        geometry: SlotGeometry,
        underrun_fill: Box<dyn UnderrunFill>,
    ) -> Result<Self> {
        let storage = zeroed_bytes(geometry.total_size)?;
        let last_read = zeroed_bytes(geometry.slot_size)?;
        let cursors = Cursors::half_full(geometry);

        debug!(
            slot_size = geometry.slot_size,
            num_slots = geometry.num_slots,
            prefilled = cursors.full_slots(),
            "slot ring created"
        );

        Ok(Self {
            geometry,
            state: Mutex::new(RingState {
                cursors,
                storage,
                last_read,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            underrun_fill,
            counters: EventCounters::default(),
        })
    }

    /// Insert one slot, waiting for space while the ring is full.
    ///
    /// Use this where the caller can afford to block against its output,
    /// e.g. a packet sender. Never gives up; see [`RingBuffer::insert_timeout`].
    pub fn insert_blocking(&self, slot: &[u8]) -> Result<()> {
        self.geometry.check_slot(slot.len())?;

        let mut state = self.state.lock();
        while state.cursors.is_full() {
            self.not_full.wait(&mut state);
        }
        self.put_slot(&mut state, slot);
        Ok(())
    }

    /// Read one slot into `out`, waiting for data while the ring is empty.
    pub fn read_blocking(&self, out: &mut [u8]) -> Result<()> {
        self.geometry.check_slot(out.len())?;

        let mut state = self.state.lock();
        while state.cursors.is_empty() {
            self.not_empty.wait(&mut state);
        }
        self.take_slot(&mut state, out);
        Ok(())
    }

    /// Insert one slot without waiting.
    ///
    /// On a full ring the slot is discarded and overflow recovery skips the
    /// reader forward by half the capacity.
    pub fn try_insert(&self, slot: &[u8]) -> Result<InsertOutcome> {
        self.geometry.check_slot(slot.len())?;

        let mut state = self.state.lock();
        if state.cursors.is_full() {
            let skipped = overflow_reset(&mut state.cursors);
            self.counters.overflows.fetch_add(1, Relaxed);
            self.counters.skipped.fetch_add(skipped as u64, Relaxed);
            return Ok(InsertOutcome::Overflowed);
        }
        self.put_slot(&mut state, slot);
        Ok(InsertOutcome::Written)
    }

    /// Read one slot into `out` without waiting.
    ///
    /// On an empty ring `out` receives the underrun payload and the whole
    /// storage arena is zeroed; cursors are left as they are.
    pub fn try_read(&self, out: &mut [u8]) -> Result<ReadOutcome> {
        self.geometry.check_slot(out.len())?;

        let mut state = self.state.lock();
        if state.cursors.is_empty() {
            let state = &mut *state;
            self.underrun_fill.fill(out, &state.last_read);
            underrun_reset(&mut state.storage);
            self.counters.underruns.fetch_add(1, Relaxed);
            return Ok(ReadOutcome::Underrun);
        }
        self.take_slot(&mut state, out);
        Ok(ReadOutcome::Read)
    }

    /// Like [`RingBuffer::insert_blocking`] but gives up after `timeout`.
    ///
    /// Returns `Ok(false)` if the ring stayed full; nothing is written then.
    pub fn insert_timeout(&self, slot: &[u8], timeout: Duration) -> Result<bool> {
        self.geometry.check_slot(slot.len())?;
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            self.insert_blocking(slot)?;
            return Ok(true);
        };

        let mut state = self.state.lock();
        while state.cursors.is_full() {
            let timed_out = self.not_full.wait_until(&mut state, deadline).timed_out();
            if timed_out && state.cursors.is_full() {
                return Ok(false);
            }
        }
        self.put_slot(&mut state, slot);
        Ok(true)
    }

    /// Like [`RingBuffer::read_blocking`] but gives up after `timeout`.
    ///
    /// Returns `Ok(false)` if the ring stayed empty; `out` is untouched then.
    pub fn read_timeout(&self, out: &mut [u8], timeout: Duration) -> Result<bool> {
        self.geometry.check_slot(out.len())?;
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            self.read_blocking(out)?;
            return Ok(true);
        };

        let mut state = self.state.lock();
        while state.cursors.is_empty() {
            let timed_out = self.not_empty.wait_until(&mut state, deadline).timed_out();
            if timed_out && state.cursors.is_empty() {
                return Ok(false);
            }
        }
        self.take_slot(&mut state, out);
        Ok(true)
    }

    /// Copy `slot` in at the write cursor and wake readers.
    fn put_slot(&self, state: &mut RingState, slot: &[u8]) {
        let offset = state.cursors.advance_write();
        state.storage[offset..offset + self.geometry.slot_size].copy_from_slice(slot);
        self.counters.inserted.fetch_add(1, Relaxed);
        self.not_empty.notify_all();
    }

    /// Copy the slot at the read cursor out (and into `last_read`) and wake writers.
    fn take_slot(&self, state: &mut RingState, out: &mut [u8]) {
        let offset = state.cursors.advance_read();
        let slot = &state.storage[offset..offset + self.geometry.slot_size];
        out.copy_from_slice(slot);
        state.last_read.copy_from_slice(slot);
        self.counters.read.fetch_add(1, Relaxed);
        self.not_full.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underrun_scrubs_storage_but_not_cursors() {
        let ring = RingBuffer::new(2, 4).unwrap();
        let mut out = [0u8; 2];
        for tag in [1u8, 2] {
            ring.try_insert(&[tag; 2]).unwrap();
        }
        while ring.try_read(&mut out).unwrap().is_read() {}

        let state = ring.state.lock();
        assert!(state.storage.iter().all(|&b| b == 0));
        assert!(state.cursors.is_empty());
        assert_eq!(state.cursors.read_pos(), state.cursors.write_pos());
        assert_eq!(&state.last_read[..], &[2, 2]);
    }

    #[test]
    fn overflow_leaves_storage_bytes_alone() {
        let ring = RingBuffer::new(1, 4).unwrap();
        for tag in [7u8, 8, 9] {
            ring.try_insert(&[tag]).unwrap();
        }
        // prefilled slots 0 and 1 are skipped; the 9 is dropped
        let state = ring.state.lock();
        assert_eq!(&state.storage[..], &[0, 0, 7, 8]);
        assert_eq!(state.cursors.read_pos(), 2);
        assert_eq!(state.cursors.full_slots(), 2);
    }
}
