// Plain value types shared by the ring, its handles and the C ABI

use crate::Core::error::{RingError, Result};

/// Fixed shape of a ring: slot size, slot count and the derived byte size.
///
/// Immutable for the lifetime of the ring it describes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SlotGeometry {
    /// Bytes per slot.
    pub slot_size: usize,
    /// Capacity in slots.
    pub num_slots: usize,
    /// `slot_size * num_slots`.
    pub total_size: usize,
}

impl SlotGeometry {
    /// Validate the construction arguments and derive `total_size`.
    pub fn new(slot_size: usize, num_slots: usize) -> Result<Self> {
        if slot_size == 0 {
            return Err(RingError::ZeroSlotSize);
        }
        if num_slots == 0 {
            return Err(RingError::ZeroSlots);
        }
        let total_size = slot_size
            .checked_mul(num_slots)
            .ok_or(RingError::CapacityOverflow { slot_size, num_slots })?;
        Ok(Self {
            slot_size,
            num_slots,
            total_size,
        })
    }

    /// Slots pre-seeded at construction and skipped by overflow recovery.
    #[inline]
    pub fn half_slots(&self) -> usize {
        self.num_slots / 2
    }

    /// Fail fast when a caller hands over a slice that is not exactly one slot.
    #[inline]
    pub fn check_slot(&self, len: usize) -> Result<()> {
        if len != self.slot_size {
            return Err(RingError::SlotSizeMismatch {
                expected: self.slot_size,
                actual: len,
            });
        }
        Ok(())
    }
}

/// Result of a non-blocking insert.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The slot was copied into the ring.
    Written,
    /// The ring was full: the slot was dropped and the reader skipped
    /// forward by half the capacity.
    Overflowed,
}

impl InsertOutcome {
    pub fn is_written(self) -> bool {
        matches!(self, InsertOutcome::Written)
    }
}

/// Result of a non-blocking read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A slot of real data was copied out.
    Read,
    /// The ring was empty: the output holds the underrun payload and the
    /// storage was scrubbed.
    Underrun,
}

impl ReadOutcome {
    pub fn is_read(self) -> bool {
        matches!(self, ReadOutcome::Read)
    }
}

/// Point-in-time statistics of a ring.
/// ABI-stable so it can be filled through the C interface.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RingStats {
    pub slot_size: u64,
    pub num_slots: u64,
    pub full_slots: u64,
    /// Slots written by any insert flavour.
    pub inserted: u64,
    /// Slots handed out by any read flavour (underrun payloads excluded).
    pub read: u64,
    /// Non-blocking inserts that found the ring full.
    pub overflows: u64,
    /// Non-blocking reads that found the ring empty.
    pub underruns: u64,
    /// Buffered slots discarded by overflow recovery.
    pub skipped: u64,
}
