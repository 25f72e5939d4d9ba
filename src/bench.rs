//! Benchmark utilities and performance testing
//!
//! This module provides simple benchmarking functions for measuring
//! encoding and decoding throughput. Only available with std feature.

#[cfg(feature = "std")]
use std::time::{Duration, Instant};

use alloc::vec::Vec;

use crate::decoder;
use crate::encoder::{self, Terminator};
use crate::error::Result;

/// Simple benchmark statistics
#[derive(Debug, Clone)]
pub struct BenchStats {
    /// Number of operations
    pub count: usize,
    /// Total duration
    pub total_duration: Duration,
    /// Average time per operation
    pub avg_ns_per_op: u64,
    /// Operations per second
    pub ops_per_sec: f64,
}

impl BenchStats {
    /// Create new stats from measurements
    pub fn new(count: usize, total_duration: Duration) -> Self {
        let total_ns = total_duration.as_nanos() as u64;
        let avg_ns_per_op = if count > 0 {
            total_ns / count as u64
        } else {
            0
        };
        let ops_per_sec = if total_ns > 0 {
            (count as f64) * 1_000_000_000.0 / (total_ns as f64)
        } else {
            0.0
        };

        Self {
            count,
            total_duration,
            avg_ns_per_op,
            ops_per_sec,
        }
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for BenchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ops, {:.2}ms total, {} ns/op, {:.0} ops/sec",
            self.count,
            self.total_duration.as_secs_f64() * 1000.0,
            self.avg_ns_per_op,
            self.ops_per_sec
        )
    }
}

/// Mixed sample strings: ASCII identifiers, descriptors, CJK, NUL, emoji
const SAMPLES: [&str; 5] = [
    "java/lang/Object",
    "(Ljava/lang/String;I)V",
    "\u{4E2D}\u{6587}\u{5B57}\u{7B26}\u{4E32}",
    "nul\u{0}inside",
    "smile \u{1F600} and \u{00E9}",
];

fn sample_units() -> Vec<Vec<u16>> {
    SAMPLES.iter().map(|s| s.encode_utf16().collect()).collect()
}

/// Benchmark encoding of the sample strings
#[cfg(feature = "std")]
pub fn bench_encode(count: usize) -> Result<BenchStats> {
    let samples = sample_units();
    let start = Instant::now();

    for i in 0..count {
        let bytes = encoder::encode(&samples[i % samples.len()], Terminator::None);
        std::hint::black_box(bytes);
    }

    let duration = start.elapsed();
    Ok(BenchStats::new(count, duration))
}

/// Benchmark decoding of the sample strings
#[cfg(feature = "std")]
pub fn bench_decode(count: usize) -> Result<BenchStats> {
    // Pre-encode test strings
    let encoded: Vec<Vec<u8>> = sample_units()
        .iter()
        .map(|units| encoder::encode(units, Terminator::None))
        .collect();

    let start = Instant::now();

    for i in 0..count {
        let units = decoder::decode(&encoded[i % encoded.len()])?;
        std::hint::black_box(units);
    }

    let duration = start.elapsed();
    Ok(BenchStats::new(count, duration))
}

/// Benchmark encode + decode roundtrip
#[cfg(feature = "std")]
pub fn bench_roundtrip(count: usize) -> Result<BenchStats> {
    let samples = sample_units();
    let start = Instant::now();

    for i in 0..count {
        let bytes = encoder::encode(&samples[i % samples.len()], Terminator::None);
        let units = decoder::decode(&bytes)?;
        std::hint::black_box(units);
    }

    let duration = start.elapsed();
    Ok(BenchStats::new(count, duration))
}

/// Run simple performance test suite
#[cfg(feature = "std")]
pub fn run_perf_test() -> Result<()> {
    std::println!("mutf8 Performance Test Suite");
    std::println!("============================");

    const TEST_COUNT: usize = 100_000;

    std::println!("\nTesting with {} operations...", TEST_COUNT);

    let encode_stats = bench_encode(TEST_COUNT)?;
    std::println!("Encode: {}", encode_stats);

    let decode_stats = bench_decode(TEST_COUNT)?;
    std::println!("Decode: {}", decode_stats);

    let roundtrip_stats = bench_roundtrip(TEST_COUNT)?;
    std::println!("Roundtrip: {}", roundtrip_stats);

    let total_bytes: usize = sample_units().iter().map(|u| encoder::encoded_len(u)).sum();
    let avg_bytes = total_bytes as f64 / SAMPLES.len() as f64;

    std::println!("\nSize analysis:");
    std::println!("Average encoded string: {:.1} bytes", avg_bytes);
    std::println!(
        "Throughput at {:.0} strings/s: {:.2} MB/s",
        roundtrip_stats.ops_per_sec,
        roundtrip_stats.ops_per_sec * avg_bytes / 1_000_000.0
    );

    Ok(())
}
