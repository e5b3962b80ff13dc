pub mod alloc;
pub mod error;
pub(crate) mod recovery;
pub mod underrun;

pub use error::{RingError, Result};
pub use underrun::{Constant, RepeatLast, Silence, UnderrunFill};
