// Recovery policies for the non-blocking path.
//
// The two policies are asymmetric on purpose: overflow moves the reader
// without touching bytes, underrun scrubs bytes without touching cursors.

use tracing::{debug, warn};

use crate::Ring::Buffer::Cursors;

/// Writer found the ring full. The incoming slot is already dropped; skip the
/// reader past the oldest half of the backlog to make headroom.
///
/// Returns the number of buffered slots discarded.
pub(crate) fn overflow_reset(cursors: &mut Cursors) -> usize {
    let skipped = cursors.skip_oldest_half();
    warn!(
        skipped_slots = skipped,
        full_slots = cursors.full_slots(),
        "slot ring overflow: dropped incoming slot"
    );
    skipped
}

/// Reader found the ring empty. Zero the whole arena so a wrapped cursor can
/// never serve stale data later.
pub(crate) fn underrun_reset(storage: &mut [u8]) {
    storage.fill(0);
    debug!(bytes = storage.len(), "slot ring underrun: storage cleared");
}
