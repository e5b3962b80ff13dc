mod builder;
mod consumer;
mod debug;
mod producer;

pub use builder::RingBuilder;
pub use consumer::Consumer;
pub use producer::Producer;

pub mod Buffer {
    pub mod Buffer;
    pub mod Buffer_impl;
    pub mod getters;
    pub mod layout;
    pub use layout::{Cursors, FillLevel};
    pub use Buffer::RingBuffer; // re-export for stable path
}

pub mod Structs {
    pub mod Buffer_Structs;
    pub use Buffer_Structs::{InsertOutcome, ReadOutcome, RingStats, SlotGeometry}; // re-export for stable path
}
