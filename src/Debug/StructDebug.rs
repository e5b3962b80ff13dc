use std::fmt;
use std::sync::Arc;

use crate::Ring::Buffer::RingBuffer;
use crate::Ring::{Consumer, Producer};

/// Debug function for RingBuffer
///
/// Shows:
/// - Geometry (slot size, slot count)
/// - Current cursors and occupancy
/// - Overflow/underrun counters
///
/// Slot storage is never printed.
pub fn debug_ring_buffer(buffer: &RingBuffer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let cursors = buffer.snapshot();
    f.debug_struct("RingBuffer")
        .field("slot_size", &buffer.slot_size())
        .field("num_slots", &buffer.num_slots())
        .field("read_pos", &cursors.read_pos())
        .field("write_pos", &cursors.write_pos())
        .field("full_slots", &cursors.full_slots())
        .field("overflows", &buffer.overflow_count())
        .field("underruns", &buffer.underrun_count())
        .finish_non_exhaustive()
}

/// Debug function for Producer
pub fn debug_producer(producer: &Producer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    debug_handle("Producer", producer.ring(), f)
}

/// Debug function for Consumer
pub fn debug_consumer(consumer: &Consumer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    debug_handle("Consumer", consumer.ring(), f)
}

fn debug_handle(name: &str, ring: &Arc<RingBuffer>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct(name)
        .field("ring", &format_args!("{:p}", Arc::as_ptr(ring)))
        .field("slot_size", &ring.slot_size())
        .field("handles", &Arc::strong_count(ring))
        .finish()
}
