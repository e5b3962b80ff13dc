// The slot ring shared between a producer and a consumer thread

use parking_lot::{Condvar, Mutex};

use super::layout::{Cursors, EventCounters};
use crate::Core::underrun::UnderrunFill;
use crate::Ring::Structs::SlotGeometry;

/// Everything guarded by the ring lock.
pub(crate) struct RingState {
    /// Read/write cursors and occupancy.
    pub(crate) cursors: Cursors,

    /// `total_size` bytes of slot storage, never exposed by reference.
    pub(crate) storage: Box<[u8]>,

    /// Copy of the most recently read slot.
    pub(crate) last_read: Box<[u8]>,
}

/// A fixed-capacity ring of equally sized byte slots.
///
/// ### Concurrency Design:
/// - One mutex guards the cursors, the storage arena and the last-read slot.
///   Every operation holds it for its whole critical section.
/// - **Blocking** operations wait on `not_full` / `not_empty` while the
///   precondition is false, re-checking after every wake.
/// - **Non-blocking** operations never wait. A full ring runs overflow
///   recovery (drop the new slot, skip the oldest half); an empty ring runs
///   underrun recovery (hand out the underrun payload, zero the storage).
/// - Data only crosses the boundary by copy into or out of caller memory.
///
/// The ring starts half full so a fresh producer/consumer pair has slack on
/// both sides.
pub struct RingBuffer {
    pub(crate) geometry: SlotGeometry,

    pub(crate) state: Mutex<RingState>,

    /// Signalled after every successful read.
    pub(crate) not_full: Condvar,

    /// Signalled after every successful insert.
    pub(crate) not_empty: Condvar,

    pub(crate) underrun_fill: Box<dyn UnderrunFill>,

    pub(crate) counters: EventCounters,
}
