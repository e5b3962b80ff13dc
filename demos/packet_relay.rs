// In demos/packet_relay.rs
//
// A sender and a receiver relaying fixed-size packets through the ring with
// the blocking calls. Both sides hash every packet; matching digests show the
// ring delivered the stream intact and in order.
//
// cargo run --example packet_relay [num_packets]
use sha2::{Digest, Sha256};
use slotring::RingBuilder;
use std::env;
use std::thread;

const PACKET_SIZE: usize = 188; // MPEG-TS packet

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let num_packets: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(10_000);

    let (producer, consumer) = RingBuilder::new()
        .with_slot_size(PACKET_SIZE)
        .with_num_slots(32)
        .build_pair()?;

    // The ring starts half full of zero packets; the receiver skips those
    let prefilled = consumer.ring().full_slots();

    println!("Relay: sending {} packets of {} bytes", num_packets, PACKET_SIZE);
    let start = std::time::Instant::now();

    let sender = thread::spawn(move || -> slotring::Result<String> {
        let mut hasher = Sha256::new();
        let mut packet = [0u8; PACKET_SIZE];
        for seq in 0..num_packets {
            packet[0] = 0x47; // sync byte
            packet[1..9].copy_from_slice(&seq.to_be_bytes());
            for (i, byte) in packet[9..].iter_mut().enumerate() {
                *byte = (seq as usize + i) as u8;
            }
            hasher.update(packet);
            producer.send_blocking(&packet)?;
        }
        Ok(format!("{:x}", hasher.finalize()))
    });

    let receiver = thread::spawn(move || -> slotring::Result<String> {
        let mut hasher = Sha256::new();
        let mut packet = [0u8; PACKET_SIZE];
        for _ in 0..prefilled {
            consumer.receive_blocking(&mut packet)?;
        }
        for received in 1..=num_packets {
            consumer.receive_blocking(&mut packet)?;
            hasher.update(packet);
            if received % 1000 == 0 {
                println!("Received {} packets", received);
            }
        }
        Ok(format!("{:x}", hasher.finalize()))
    });

    let sent_digest = sender.join().expect("sender thread panicked")?;
    let received_digest = receiver.join().expect("receiver thread panicked")?;

    println!("Relay: done in {:.2?}", start.elapsed());
    println!("Relay: sent     {}", sent_digest);
    println!("Relay: received {}", received_digest);

    if sent_digest == received_digest {
        println!("All packets received successfully");
        Ok(())
    } else {
        Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "digest mismatch between sender and receiver",
        ))
    }
}
