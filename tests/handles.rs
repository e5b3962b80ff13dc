use slotring::{InsertOutcome, ReadOutcome, RingBuilder, RingError};
use std::io;
use std::thread;
use std::time::Duration;

#[test]
fn builder_defaults() {
    let ring = RingBuilder::new().build().unwrap();
    assert_eq!(ring.slot_size(), 512);
    assert_eq!(ring.num_slots(), 64);
    assert_eq!(ring.full_slots(), 32);
}

#[test]
fn builder_validates_geometry() {
    assert!(matches!(
        RingBuilder::new().with_num_slots(0).build(),
        Err(RingError::ZeroSlots)
    ));
    assert!(matches!(
        RingBuilder::new().with_slot_size(0).build_pair(),
        Err(RingError::ZeroSlotSize)
    ));
}

#[test]
fn ring_errors_convert_to_io_errors() {
    let err: io::Error = RingError::SlotSizeMismatch { expected: 4, actual: 2 }.into();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    assert!(err.to_string().contains("expected 4 bytes, got 2"));

    let err = RingBuilder::new().with_slot_size(0).build_shared().map_err(io::Error::from);
    assert_eq!(err.unwrap_err().kind(), io::ErrorKind::InvalidInput);
}

#[test]
fn pair_moves_slots_between_threads() {
    let (producer, consumer) = RingBuilder::new()
        .with_slot_size(4)
        .with_num_slots(8)
        .build_pair()
        .unwrap();
    assert_eq!(producer.slot_size(), 4);
    assert_eq!(consumer.slot_size(), 4);

    let mut out = [0u8; 4];
    while consumer.receive(&mut out).unwrap().is_read() {}

    let sender = thread::spawn(move || {
        for i in 0..100u32 {
            producer.send_blocking(&i.to_be_bytes()).unwrap();
        }
        producer
    });

    for i in 0..100u32 {
        assert!(consumer.receive_timeout(&mut out, Duration::from_secs(10)).unwrap());
        assert_eq!(u32::from_be_bytes(out), i);
    }
    let producer = sender.join().unwrap();

    let mut last = [0u8; 4];
    consumer.last_read(&mut last).unwrap();
    assert_eq!(u32::from_be_bytes(last), 99);

    assert_eq!(consumer.receive(&mut out).unwrap(), ReadOutcome::Underrun);
    assert!(producer.send_timeout(&[1; 4], Duration::from_millis(5)).unwrap());
    consumer.receive_blocking(&mut out).unwrap();
    assert_eq!(out, [1; 4]);
}

#[test]
fn cloned_producers_share_one_ring() {
    let (producer, consumer) = RingBuilder::new()
        .with_slot_size(1)
        .with_num_slots(4)
        .build_pair()
        .unwrap();
    let second = producer.clone();

    assert_eq!(producer.send(&[1]).unwrap(), InsertOutcome::Written);
    assert_eq!(second.send(&[2]).unwrap(), InsertOutcome::Written);
    assert_eq!(second.send(&[3]).unwrap(), InsertOutcome::Overflowed);
    assert_eq!(consumer.ring().full_slots(), 2);
    assert!(std::sync::Arc::ptr_eq(producer.ring(), consumer.ring()));
}

#[test]
fn debug_output_hides_storage() {
    let (producer, consumer) = RingBuilder::new()
        .with_slot_size(2)
        .with_num_slots(4)
        .build_pair()
        .unwrap();

    let ring = format!("{:?}", producer.ring());
    assert!(ring.starts_with("RingBuffer"));
    assert!(ring.contains("full_slots: 2"));
    assert!(!ring.contains("storage"));

    assert!(format!("{:?}", producer).contains("Producer"));
    assert!(format!("{:?}", consumer).contains("handles: 2"));

    // Only logs; must not deadlock on the lock it takes
    producer.ring().debug_dump();
}
