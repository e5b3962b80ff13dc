// In src/Ring/producer.rs
use std::sync::Arc;
use std::time::Duration;

use super::Buffer::RingBuffer;
use super::Structs::InsertOutcome;
use crate::Core::error::Result;

/// The writing half of a slot ring.
///
/// Cloning yields another producer on the same ring; the ring lock keeps
/// concurrent writers safe.
#[derive(Clone)]
pub struct Producer {
    ring: Arc<RingBuffer>,
}

impl Producer {
    pub(crate) fn new(ring: Arc<RingBuffer>) -> Self {
        Self { ring }
    }

    /// Sends one slot without waiting.
    ///
    /// # Returns
    /// * `Ok(InsertOutcome::Written)` if the slot was queued
    /// * `Ok(InsertOutcome::Overflowed)` if the ring was full and the slot was dropped
    /// * `Err(RingError::SlotSizeMismatch)` if `slot` is not exactly one slot long
    pub fn send(&self, slot: &[u8]) -> Result<InsertOutcome> {
        self.ring.try_insert(slot)
    }

    /// Sends one slot, blocking until the ring has space.
    pub fn send_blocking(&self, slot: &[u8]) -> Result<()> {
        self.ring.insert_blocking(slot)
    }

    /// Sends one slot, waiting up to `timeout` for space.
    ///
    /// # Returns
    /// * `Ok(true)` if the slot was queued
    /// * `Ok(false)` if the ring stayed full until the timeout
    pub fn send_timeout(&self, slot: &[u8], timeout: Duration) -> Result<bool> {
        self.ring.insert_timeout(slot, timeout)
    }

    pub fn slot_size(&self) -> usize {
        self.ring.slot_size()
    }

    /// Returns the underlying ring
    pub fn ring(&self) -> &Arc<RingBuffer> {
        &self.ring
    }
}
