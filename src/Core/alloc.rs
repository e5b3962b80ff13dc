use super::error::{RingError, Result};

/// Allocate `len` zero-filled bytes without aborting the process on failure.
///
/// The ring storage is sized by the caller, so an absurd geometry must
/// surface as `RingError::OutOfMemory` instead of an allocation abort.
pub(crate) fn zeroed_bytes(len: usize) -> Result<Box<[u8]>> {
    let mut bytes: Vec<u8> = Vec::new();
    bytes
        .try_reserve_exact(len)
        .map_err(|source| RingError::OutOfMemory { bytes: len, source })?;
    bytes.resize(len, 0);
    Ok(bytes.into_boxed_slice())
}
