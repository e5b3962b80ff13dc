use slotring::{Constant, ReadOutcome, RepeatLast, RingBuffer, RingBuilder};

fn drain(ring: &RingBuffer, out: &mut [u8]) {
    while ring.full_slots() > 0 {
        ring.try_read(out).unwrap();
    }
}

#[test]
fn repeat_last_replays_previous_slot() {
    let ring = RingBuffer::with_underrun_fill(3, 4, RepeatLast).unwrap();
    let mut out = [0u8; 3];
    drain(&ring, &mut out);

    ring.try_insert(&[10, 20, 30]).unwrap();
    assert_eq!(ring.try_read(&mut out).unwrap(), ReadOutcome::Read);

    let mut filler = [0u8; 3];
    assert_eq!(ring.try_read(&mut filler).unwrap(), ReadOutcome::Underrun);
    assert_eq!(filler, [10, 20, 30]);
}

#[test]
fn repeat_last_before_any_real_data_is_silence() {
    let ring = RingBuffer::with_underrun_fill(2, 1, RepeatLast).unwrap();
    let mut out = [0xAAu8; 2];
    assert_eq!(ring.try_read(&mut out).unwrap(), ReadOutcome::Underrun);
    assert_eq!(out, [0, 0]);
}

#[test]
fn constant_fill_through_builder() {
    let ring = RingBuilder::new()
        .with_slot_size(4)
        .with_num_slots(2)
        .with_underrun_fill(Constant(0x80))
        .build()
        .unwrap();
    let mut out = [0u8; 4];
    drain(&ring, &mut out);

    assert_eq!(ring.try_read(&mut out).unwrap(), ReadOutcome::Underrun);
    assert_eq!(out, [0x80; 4]);
}

#[test]
fn closure_fill_and_storage_still_scrubbed() {
    let ring = RingBuffer::with_underrun_fill(2, 2, |out: &mut [u8], _last: &[u8]| {
        out.copy_from_slice(&[0xDE, 0xAD]);
    })
    .unwrap();
    let mut out = [0u8; 2];
    drain(&ring, &mut out);

    ring.try_insert(&[5, 5]).unwrap();
    ring.try_read(&mut out).unwrap();
    assert_eq!(out, [5, 5]);

    assert_eq!(ring.try_read(&mut out).unwrap(), ReadOutcome::Underrun);
    assert_eq!(out, [0xDE, 0xAD]);

    // Blocking reads never see the underrun payload
    ring.try_insert(&[6, 6]).unwrap();
    ring.read_blocking(&mut out).unwrap();
    assert_eq!(out, [6, 6]);
}
