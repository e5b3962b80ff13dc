// In demos/audio_jitter.rs
//
// A capture thread and a playback thread running at the same nominal rate
// but with jitter on the capture side. Both use the non-blocking calls, so
// the ring absorbs the jitter and recovers from overflow/underrun on its own.
//
// cargo run --example audio_jitter [seconds]
use slotring::{ReadOutcome, RingBuilder};
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

const FRAME_MS: u64 = 10;
const SAMPLES_PER_FRAME: usize = 480; // 10ms at 48kHz, mono i16

fn main() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();
    let seconds: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);

    let (producer, consumer) = RingBuilder::new()
        .with_slot_size(SAMPLES_PER_FRAME * 2)
        .with_num_slots(8)
        .build_pair()?;

    let running = Arc::new(AtomicBool::new(true));
    let running_for_handler = Arc::clone(&running);

    // Handle Ctrl+C to stop early
    ctrlc::set_handler(move || {
        running_for_handler.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl+C handler");

    println!(
        "Audio: {} byte frames every {}ms for {}s (Ctrl+C to stop)",
        producer.slot_size(),
        FRAME_MS,
        seconds
    );

    let capture = {
        let running = Arc::clone(&running);
        thread::spawn(move || -> slotring::Result<u64> {
            let mut frame = vec![0u8; producer.slot_size()];
            let mut phase = 0f32;
            let mut dropped = 0;
            while running.load(Ordering::Relaxed) {
                for sample in frame.chunks_exact_mut(2) {
                    let value = (phase.sin() * i16::MAX as f32 * 0.25) as i16;
                    sample.copy_from_slice(&value.to_le_bytes());
                    phase += 2.0 * std::f32::consts::PI * 440.0 / 48_000.0;
                }
                if !producer.send(&frame)?.is_written() {
                    dropped += 1;
                }
                // Bursty capture: sometimes late, sometimes early
                let jitter = fastrand::u64(0..=2 * FRAME_MS);
                thread::sleep(Duration::from_millis(jitter));
            }
            Ok(dropped)
        })
    };

    let playback = {
        let running = Arc::clone(&running);
        thread::spawn(move || -> slotring::Result<u64> {
            let mut frame = vec![0u8; consumer.slot_size()];
            let mut silent = 0;
            let mut next = Instant::now();
            while running.load(Ordering::Relaxed) {
                if consumer.receive(&mut frame)? == ReadOutcome::Underrun {
                    silent += 1;
                }
                next += Duration::from_millis(FRAME_MS);
                thread::sleep(next.saturating_duration_since(Instant::now()));
            }
            consumer.ring().debug_dump();
            println!("Audio: final ring state {:?}", consumer.ring());
            Ok(silent)
        })
    };

    let deadline = Instant::now() + Duration::from_secs(seconds);
    while running.load(Ordering::SeqCst) && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(50));
    }
    running.store(false, Ordering::SeqCst);

    let dropped = capture.join().expect("capture thread panicked")?;
    let silent = playback.join().expect("playback thread panicked")?;

    println!("Audio: {} frames dropped on overflow", dropped);
    println!("Audio: {} silent frames played on underrun", silent);
    Ok(())
}
