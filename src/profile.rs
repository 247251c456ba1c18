//! Timing harness for [`SampleBuffer`] implementations.
//!
//! Each measured iteration appends one chunk and then reads the whole buffer
//! back, which is the access pattern of a live display fed by a sensor
//! stream. Chunks are allocated outside the timed region.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::RingBufferError;
use crate::ring_buffer::RingBuffer;
use crate::sample_buffer::SampleBuffer;

/// Stream parameters that size the profiled buffers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileConfig {
    /// Rows per second.
    pub sample_rate: usize,
    /// Seconds of history the buffer retains.
    pub buffer_seconds: usize,
    /// Values per row.
    pub channels: usize,
    /// Timed iterations per chunked scenario.
    pub iterations: usize,
    /// Timed iterations for the single-row scenario.
    pub single_row_iterations: usize,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            sample_rate: 1000,
            buffer_seconds: 60,
            channels: 128,
            iterations: 100,
            single_row_iterations: 10_000,
        }
    }
}

impl ProfileConfig {
    /// Rows in `buffer_seconds` of stream.
    pub fn buffer_rows(&self) -> usize {
        self.sample_rate * self.buffer_seconds
    }

    /// The standard scenarios, from whole-buffer chunks down to single rows.
    pub fn scenarios(&self) -> Vec<Scenario> {
        let rows = self.buffer_rows();
        let chunked = |label: &'static str, capacity: usize, chunk_rows: usize| Scenario {
            label,
            capacity,
            channels: self.channels,
            chunk_rows,
            iterations: self.iterations,
        };

        vec![
            chunked("full", rows, rows),
            // One row short, so every chunk is truncated and wraps.
            chunked("full-1", rows.saturating_sub(1).max(1), rows),
            chunked("/10", rows, rows / 10),
            chunked("/100", rows, rows / 100),
            chunked("/1000", rows, rows / 1000),
            Scenario {
                label: "1",
                capacity: rows,
                channels: self.channels,
                chunk_rows: 1,
                iterations: self.single_row_iterations,
            },
        ]
    }
}

/// One buffer shape and chunk size to measure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Short name used in reports.
    pub label: &'static str,
    /// Buffer capacity in rows.
    pub capacity: usize,
    /// Values per row.
    pub channels: usize,
    /// Rows appended per timed iteration.
    pub chunk_rows: usize,
    /// Timed iterations.
    pub iterations: usize,
}

impl Scenario {
    /// Builds a fresh buffer from `candidate` and profiles it.
    pub fn run(&self, candidate: &Candidate) -> Result<Vec<Duration>, RingBufferError> {
        info!(
            candidate = candidate.name,
            scenario = self.label,
            capacity = self.capacity,
            chunk_rows = self.chunk_rows,
            "profiling"
        );
        let mut buffer = candidate.build((self.capacity, self.channels))?;
        profile(&mut *buffer, self.chunk_rows, self.iterations)
    }
}

/// A named buffer implementation the harness can construct.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    /// Display name.
    pub name: &'static str,
    build: fn((usize, usize)) -> Result<Box<dyn SampleBuffer<f64>>, RingBufferError>,
}

impl Candidate {
    /// Constructs an empty buffer of the given `(capacity, channels)` shape.
    pub fn build(
        &self,
        shape: (usize, usize),
    ) -> Result<Box<dyn SampleBuffer<f64>>, RingBufferError> {
        (self.build)(shape)
    }
}

fn ring_buffer(shape: (usize, usize)) -> Result<Box<dyn SampleBuffer<f64>>, RingBufferError> {
    let rb = RingBuffer::<f64>::new(shape)?;
    Ok(Box::new(rb))
}

/// Every buffer implementation available for profiling.
pub fn candidates() -> Vec<Candidate> {
    vec![Candidate {
        name: "RingBuffer",
        build: ring_buffer,
    }]
}

/// Times `iterations` append-then-get cycles of `chunk_rows` rows each.
///
/// The buffer is filled to capacity first so every measured cycle runs
/// against a full buffer.
pub fn profile(
    buffer: &mut dyn SampleBuffer<f64>,
    chunk_rows: usize,
    iterations: usize,
) -> Result<Vec<Duration>, RingBufferError> {
    let (capacity, channels) = buffer.shape();
    buffer.append(&vec![0.0; capacity * channels])?;

    let mut times = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let chunk = vec![0.0; chunk_rows * channels];
        let start = Instant::now();
        buffer.append(&chunk)?;
        black_box(buffer.get());
        times.push(start.elapsed());
    }

    debug!(iterations, chunk_rows, "profile finished");
    Ok(times)
}

/// Summary statistics of a run, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSummary {
    /// Fastest iteration.
    pub min: f64,
    /// Slowest iteration.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
}

impl TimingSummary {
    /// Returns `None` for an empty run.
    pub fn from_durations(times: &[Duration]) -> Option<Self> {
        if times.is_empty() {
            return None;
        }
        let ms: Vec<f64> = times.iter().map(|t| t.as_secs_f64() * 1000.0).collect();
        let n = ms.len() as f64;
        let mean = ms.iter().sum::<f64>() / n;
        let variance = ms.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;

        Some(Self {
            min: ms.iter().copied().fold(f64::INFINITY, f64::min),
            max: ms.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            mean,
            std: variance.sqrt(),
        })
    }
}

impl fmt::Display for TimingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Min: {:7.3}, Max: {:7.3}, Mean: {:7.3}, Std: {:7.3}",
            self.min, self.max, self.mean, self.std
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenarios() {
        let config = ProfileConfig::default();
        assert_eq!(config.buffer_rows(), 60_000);

        let scenarios = config.scenarios();
        let labels: Vec<_> = scenarios.iter().map(|s| s.label).collect();
        assert_eq!(labels, ["full", "full-1", "/10", "/100", "/1000", "1"]);

        assert_eq!(scenarios[1].capacity, 59_999);
        assert_eq!(scenarios[1].chunk_rows, 60_000);
        assert_eq!(scenarios[4].chunk_rows, 60);
        assert_eq!(scenarios[5].iterations, 10_000);
        assert!(scenarios.iter().all(|s| s.channels == 128));
    }

    #[test]
    fn test_profile_counts_iterations() {
        let mut rb = RingBuffer::<f64>::new((16, 2)).unwrap();
        let times = profile(&mut rb, 5, 7).unwrap();
        assert_eq!(times.len(), 7);
        assert!(rb.is_full());
    }

    #[test]
    fn test_scenario_run() {
        let config = ProfileConfig {
            sample_rate: 10,
            buffer_seconds: 2,
            channels: 3,
            iterations: 4,
            single_row_iterations: 9,
        };
        let candidate = candidates()[0];
        assert_eq!(candidate.name, "RingBuffer");
        for scenario in config.scenarios() {
            let times = scenario.run(&candidate).unwrap();
            assert_eq!(times.len(), scenario.iterations);
        }
    }

    #[test]
    fn test_summary() {
        let times = [
            Duration::from_millis(1),
            Duration::from_millis(2),
            Duration::from_millis(3),
        ];
        let summary = TimingSummary::from_durations(&times).unwrap();
        assert!((summary.min - 1.0).abs() < 1e-9);
        assert!((summary.max - 3.0).abs() < 1e-9);
        assert!((summary.mean - 2.0).abs() < 1e-9);
        assert!((summary.std - (2.0f64 / 3.0).sqrt()).abs() < 1e-9);
        assert!(summary.to_string().starts_with("Min:   1.000, Max:   3.000"));

        assert_eq!(TimingSummary::from_durations(&[]), None);
    }
}
