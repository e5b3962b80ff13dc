use crate::Core::error::RingError;
use crate::Ring::Buffer::RingBuffer;
use crate::Ring::Structs::{InsertOutcome, ReadOutcome, RingStats};
use std::ptr;

// Status codes
pub const SLOT_RING_SUCCESS: i32 = 0;
pub const SLOT_RING_ERROR_NULL_POINTER: i32 = -1;
pub const SLOT_RING_ERROR_INVALID_ARG: i32 = -2;
pub const SLOT_RING_ERROR_ALLOCATION_FAILED: i32 = -3;
pub const SLOT_RING_OVERFLOW: i32 = -4;
pub const SLOT_RING_UNDERRUN: i32 = -5;

/// Handle to a ring instance (opaque pointer)
pub struct SlotRingHandle {
    inner: RingBuffer,
}

fn error_code(err: &RingError) -> i32 {
    match err {
        RingError::OutOfMemory { .. } => SLOT_RING_ERROR_ALLOCATION_FAILED,
        RingError::ZeroSlotSize
        | RingError::ZeroSlots
        | RingError::CapacityOverflow { .. }
        | RingError::SlotSizeMismatch { .. } => SLOT_RING_ERROR_INVALID_ARG,
    }
}

/// Create a new ring, pre-loaded to half capacity with zero slots.
///
/// # Arguments
/// * `slot_size` - Bytes per slot.
/// * `num_slots` - Capacity in slots.
///
/// # Returns
/// * Pointer to `SlotRingHandle`, or NULL on failure.
#[no_mangle]
pub extern "C" fn slot_ring_new(slot_size: usize, num_slots: usize) -> *mut SlotRingHandle {
    match RingBuffer::new(slot_size, num_slots) {
        Ok(ring) => Box::into_raw(Box::new(SlotRingHandle { inner: ring })),
        Err(e) => {
            tracing::error!("slot_ring_new failed: {e}");
            ptr::null_mut()
        }
    }
}

/// Free a ring handle.
#[no_mangle]
pub extern "C" fn slot_ring_free(handle: *mut SlotRingHandle) {
    if !handle.is_null() {
        unsafe {
            let _ = Box::from_raw(handle); // Dropped automatically
        }
    }
}

/// Insert a slot, blocking while the ring is full.
///
/// # Arguments
/// * `handle` - Pointer to `SlotRingHandle`.
/// * `data` - Pointer to the slot bytes.
/// * `len` - Length of data; must equal the slot size.
///
/// # Returns
/// * 0 on success, negative error code otherwise.
#[no_mangle]
pub extern "C" fn slot_ring_insert_blocking(
    handle: *const SlotRingHandle,
    data: *const u8,
    len: usize,
) -> i32 {
    if handle.is_null() || data.is_null() {
        return SLOT_RING_ERROR_NULL_POINTER;
    }

    let ring = unsafe { &(*handle).inner };
    let slot = unsafe { std::slice::from_raw_parts(data, len) };

    match ring.insert_blocking(slot) {
        Ok(()) => SLOT_RING_SUCCESS,
        Err(e) => error_code(&e),
    }
}

/// Read a slot, blocking while the ring is empty.
///
/// # Arguments
/// * `handle` - Pointer to `SlotRingHandle`.
/// * `out_buf` - Buffer to copy the slot into.
/// * `len` - Size of `out_buf`; must equal the slot size.
///
/// # Returns
/// * 0 on success, negative error code otherwise.
#[no_mangle]
pub extern "C" fn slot_ring_read_blocking(
    handle: *const SlotRingHandle,
    out_buf: *mut u8,
    len: usize,
) -> i32 {
    if handle.is_null() || out_buf.is_null() {
        return SLOT_RING_ERROR_NULL_POINTER;
    }

    let ring = unsafe { &(*handle).inner };
    let out = unsafe { std::slice::from_raw_parts_mut(out_buf, len) };

    match ring.read_blocking(out) {
        Ok(()) => SLOT_RING_SUCCESS,
        Err(e) => error_code(&e),
    }
}

/// Insert a slot without waiting.
///
/// # Returns
/// * 0 if the slot was written.
/// * SLOT_RING_OVERFLOW if the ring was full: the slot was dropped and the
///   reader skipped half the backlog.
/// * Other negative codes on invalid arguments.
#[no_mangle]
pub extern "C" fn slot_ring_try_insert(
    handle: *const SlotRingHandle,
    data: *const u8,
    len: usize,
) -> i32 {
    if handle.is_null() || data.is_null() {
        return SLOT_RING_ERROR_NULL_POINTER;
    }

    let ring = unsafe { &(*handle).inner };
    let slot = unsafe { std::slice::from_raw_parts(data, len) };

    match ring.try_insert(slot) {
        Ok(InsertOutcome::Written) => SLOT_RING_SUCCESS,
        Ok(InsertOutcome::Overflowed) => SLOT_RING_OVERFLOW,
        Err(e) => error_code(&e),
    }
}

/// Read a slot without waiting.
///
/// # Returns
/// * 0 if `out_buf` holds real data.
/// * SLOT_RING_UNDERRUN if the ring was empty: `out_buf` holds the underrun
///   payload (zeros).
/// * Other negative codes on invalid arguments.
#[no_mangle]
pub extern "C" fn slot_ring_try_read(
    handle: *const SlotRingHandle,
    out_buf: *mut u8,
    len: usize,
) -> i32 {
    if handle.is_null() || out_buf.is_null() {
        return SLOT_RING_ERROR_NULL_POINTER;
    }

    let ring = unsafe { &(*handle).inner };
    let out = unsafe { std::slice::from_raw_parts_mut(out_buf, len) };

    match ring.try_read(out) {
        Ok(ReadOutcome::Read) => SLOT_RING_SUCCESS,
        Ok(ReadOutcome::Underrun) => SLOT_RING_UNDERRUN,
        Err(e) => error_code(&e),
    }
}

/// Fill `out` with the ring's current statistics.
#[no_mangle]
pub extern "C" fn slot_ring_stats(handle: *const SlotRingHandle, out: *mut RingStats) -> i32 {
    if handle.is_null() || out.is_null() {
        return SLOT_RING_ERROR_NULL_POINTER;
    }

    let ring = unsafe { &(*handle).inner };
    unsafe {
        ptr::write(out, ring.stats());
    }
    SLOT_RING_SUCCESS
}
