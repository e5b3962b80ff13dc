use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

/// All errors produced by the slot ring.
///
/// Overflow and underrun are deliberately absent: they are resolved by the
/// recovery policies and reported through `InsertOutcome` / `ReadOutcome`.
#[derive(Debug, Error)]
pub enum RingError {
    #[error("slot size must be positive")]
    ZeroSlotSize,

    #[error("slot count must be positive")]
    ZeroSlots,

    #[error("ring size overflows usize ({slot_size} bytes x {num_slots} slots)")]
    CapacityOverflow { slot_size: usize, num_slots: usize },

    #[error("failed to allocate {bytes} bytes of slot storage")]
    OutOfMemory {
        bytes: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("slot length mismatch: expected {expected} bytes, got {actual}")]
    SlotSizeMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, RingError>;

impl From<RingError> for io::Error {
    fn from(err: RingError) -> Self {
        let kind = match err {
            RingError::OutOfMemory { .. } => io::ErrorKind::OutOfMemory,
            RingError::ZeroSlotSize
            | RingError::ZeroSlots
            | RingError::CapacityOverflow { .. }
            | RingError::SlotSizeMismatch { .. } => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err)
    }
}
