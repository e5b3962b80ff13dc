// Module naming follows project convention (Ring = slot ring, Core = shared plumbing)
#[allow(non_snake_case)]
pub mod Ring;

#[allow(non_snake_case)]
pub mod Core;

#[allow(non_snake_case)]
pub mod Debug;

pub mod ffi;

pub use Core::error::{RingError, Result};
pub use Core::underrun::{Constant, RepeatLast, Silence, UnderrunFill};
pub use Ring::Buffer::{Cursors, FillLevel, RingBuffer};
pub use Ring::Structs::{InsertOutcome, ReadOutcome, RingStats, SlotGeometry};
pub use Ring::{Consumer, Producer, RingBuilder};
