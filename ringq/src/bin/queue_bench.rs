//! Ring queue throughput benchmark.
//!
//! Usage:
//!     cargo run --release --bin queue_bench
//!
//! Environment variables:
//!     RINGQ_ITERATIONS=16777216  Elements pushed per run (default: 2^24)
//!     RUST_LOG=ringq=trace       Resize events (needs `--features tracing`)

use std::env;
use std::hint::black_box;

use minstant::Instant;
use ringq::RingQueue;

const DEFAULT_ITERATIONS: usize = 1 << 24;

/// Queue depth for the steady-state run. Deliberately short of a power of
/// two so the extra in-flight element never triggers a grow.
const STEADY_DEPTH: usize = 1000;

type Payload = u64;

fn get_iterations() -> usize {
    env::var("RINGQ_ITERATIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_ITERATIONS)
}

fn report(label: &str, ops: usize, elapsed: std::time::Duration) {
    let ops_per_ms = ops as u128 * 1_000_000 / elapsed.as_nanos().max(1);
    println!("  {label:<12} {ops_per_ms} ops/ms");
}

/// Fill to `iterations` then drain, walking every grow and shrink step.
fn bench_fill_drain(iterations: usize) {
    let mut queue = RingQueue::new();

    let start = Instant::now();

    for i in 0..iterations as Payload {
        queue.enqueue(i);
    }
    for expected in 0..iterations as Payload {
        match queue.dequeue() {
            Ok(value) if value == expected => {}
            Ok(value) => panic!("Data corruption: expected {expected}, got {value}"),
            Err(e) => panic!("Queue drained early at {expected}: {e}"),
        }
    }

    let elapsed = start.elapsed();
    assert_eq!(queue.capacity(), queue.min_capacity());

    report("fill/drain", iterations * 2, elapsed);
}

/// Hold a fixed depth while streaming elements through, so the buffer wraps
/// constantly but never resizes after warm-up.
fn bench_steady(iterations: usize) {
    let mut queue = RingQueue::new();
    for i in 0..STEADY_DEPTH as Payload {
        queue.enqueue(i);
    }
    let capacity = queue.capacity();

    let start = Instant::now();

    for i in 0..iterations as Payload {
        queue.enqueue(i);
        black_box(queue.dequeue().ok());
    }

    let elapsed = start.elapsed();
    assert_eq!(queue.capacity(), capacity, "steady state must not resize");

    report("steady", iterations * 2, elapsed);
}

fn main() {
    ringq::init_tracing();

    let iterations = get_iterations();

    println!("ringq RingQueue (iters={iterations}):");
    bench_fill_drain(iterations);
    bench_steady(iterations);
}
