use std::sync::Arc;

use super::Buffer::RingBuffer;
use super::Structs::SlotGeometry;
use super::{Consumer, Producer};
use crate::Core::error::Result;
use crate::Core::underrun::{Silence, UnderrunFill};

pub struct RingBuilder {
    slot_size: usize,
    num_slots: usize,
    underrun_fill: Box<dyn UnderrunFill>,
}

impl Default for RingBuilder {
    fn default() -> Self {
        Self {
            slot_size: 512,
            num_slots: 64,
            underrun_fill: Box::new(Silence),
        }
    }
}

impl RingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot_size(mut self, slot_size: usize) -> Self {
        self.slot_size = slot_size;
        self
    }

    pub fn with_num_slots(mut self, num_slots: usize) -> Self {
        self.num_slots = num_slots;
        self
    }

    /// Replace the payload handed out on underrun (silence by default).
    pub fn with_underrun_fill<F>(mut self, fill: F) -> Self
    where
        F: UnderrunFill + 'static,
    {
        self.underrun_fill = Box::new(fill);
        self
    }

    pub fn build(self) -> Result<RingBuffer> {
        let geometry = SlotGeometry::new(self.slot_size, self.num_slots)?;
        RingBuffer::from_parts(geometry, self.underrun_fill)
    }

    pub fn build_shared(self) -> Result<Arc<RingBuffer>> {
        self.build().map(Arc::new)
    }

    /// Build a ring and split it into its writing and reading halves.
    pub fn build_pair(self) -> Result<(Producer, Consumer)> {
        let ring = self.build_shared()?;
        Ok((Producer::new(Arc::clone(&ring)), Consumer::new(ring)))
    }
}
