//! Payload written into the caller's slot when a non-blocking read finds the
//! ring empty.
//!
//! The fill strategy is injected at construction, so a comfort-noise or
//! last-known-good pattern can replace the default silence without touching
//! the ring's locking or bookkeeping.

/// Produces the underrun payload.
///
/// Called with the ring lock held. `out` and `last_read` are both exactly one
/// slot long; `last_read` is the most recent slot handed out by a successful
/// read (all zeros if nothing has been read yet).
pub trait UnderrunFill: Send + Sync {
    fn fill(&self, out: &mut [u8], last_read: &[u8]);
}

/// Zero bytes. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silence;

impl UnderrunFill for Silence {
    fn fill(&self, out: &mut [u8], _last_read: &[u8]) {
        out.fill(0);
    }
}

/// Repeat the last slot that was successfully read.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepeatLast;

impl UnderrunFill for RepeatLast {
    fn fill(&self, out: &mut [u8], last_read: &[u8]) {
        out.copy_from_slice(last_read);
    }
}

/// A constant byte, e.g. `0x80` for unsigned 8-bit PCM silence.
#[derive(Debug, Clone, Copy)]
pub struct Constant(pub u8);

impl UnderrunFill for Constant {
    fn fill(&self, out: &mut [u8], _last_read: &[u8]) {
        out.fill(self.0);
    }
}

impl<F> UnderrunFill for F
where
    F: Fn(&mut [u8], &[u8]) + Send + Sync,
{
    fn fill(&self, out: &mut [u8], last_read: &[u8]) {
        self(out, last_read)
    }
}
