// src/Ring/consumer.rs

use std::sync::Arc;
use std::time::Duration;

use super::Buffer::RingBuffer;
use super::Structs::ReadOutcome;
use crate::Core::error::Result;

/// The reading half of a slot ring.
#[derive(Clone)]
pub struct Consumer {
    ring: Arc<RingBuffer>,
}

impl Consumer {
    pub(crate) fn new(ring: Arc<RingBuffer>) -> Self {
        Self { ring }
    }

    /// Receives one slot into `out` without waiting.
    ///
    /// # Returns
    /// * `Ok(ReadOutcome::Read)` if `out` holds real data
    /// * `Ok(ReadOutcome::Underrun)` if the ring was empty and `out` holds the underrun payload
    /// * `Err(RingError::SlotSizeMismatch)` if `out` is not exactly one slot long
    pub fn receive(&self, out: &mut [u8]) -> Result<ReadOutcome> {
        self.ring.try_read(out)
    }

    /// Receives one slot, blocking until the ring has data.
    pub fn receive_blocking(&self, out: &mut [u8]) -> Result<()> {
        self.ring.read_blocking(out)
    }

    /// Receives one slot, waiting up to the specified timeout.
    ///
    /// # Returns
    /// * `Ok(true)` if a slot was received
    /// * `Ok(false)` if the timeout was reached; `out` is untouched
    pub fn receive_timeout(&self, out: &mut [u8], timeout: Duration) -> Result<bool> {
        self.ring.read_timeout(out, timeout)
    }

    /// Copies the most recently received slot into `out`.
    pub fn last_read(&self, out: &mut [u8]) -> Result<()> {
        self.ring.last_read(out)
    }

    pub fn slot_size(&self) -> usize {
        self.ring.slot_size()
    }

    /// Returns the underlying ring
    pub fn ring(&self) -> &Arc<RingBuffer> {
        &self.ring
    }
}
