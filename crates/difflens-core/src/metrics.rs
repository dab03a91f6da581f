//! Job timing collection for the worker layer.
//!
//! The calling layer measures how long each diff/transcode job took and
//! records the duration into a [`MetricsSink`]. The sink is injected per
//! worker instance rather than held in a process-wide global, so the core
//! stays free of hidden shared state and the collector is independently
//! testable. Core algorithms never read clocks themselves.

use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::VecDeque;

/// Number of samples retained per operation.
const MAX_SAMPLES: usize = 100;

/// Receiver for per-job timing samples.
pub trait MetricsSink {
    /// Record one completed job of the named operation.
    fn record(&mut self, op: &str, duration_ms: f64);
}

/// A sink that discards every sample.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl MetricsSink for NullSink {
    fn record(&mut self, _op: &str, _duration_ms: f64) {}
}

/// Aggregated view of one operation's samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpMetrics {
    /// Operation name as passed to `record`.
    pub name: String,
    /// Mean duration over the retained samples.
    pub average_ms: f64,
    /// Number of retained samples (at most 100).
    pub count: usize,
    /// Most recently recorded duration.
    pub latest_ms: f64,
}

/// In-memory sink keeping the last 100 samples per operation.
#[derive(Debug, Default)]
pub struct MetricsRecorder {
    samples: BTreeMap<String, VecDeque<f64>>,
}

impl MetricsRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mean duration for an operation, or 0.0 if none recorded.
    pub fn average_ms(&self, op: &str) -> f64 {
        match self.samples.get(op) {
            Some(samples) if !samples.is_empty() => {
                samples.iter().sum::<f64>() / samples.len() as f64
            }
            _ => 0.0,
        }
    }

    /// Aggregate every operation, ordered by name.
    pub fn snapshot(&self) -> Vec<OpMetrics> {
        self.samples
            .iter()
            .filter(|(_, samples)| !samples.is_empty())
            .map(|(name, samples)| OpMetrics {
                name: name.clone(),
                average_ms: samples.iter().sum::<f64>() / samples.len() as f64,
                count: samples.len(),
                latest_ms: *samples.back().unwrap_or(&0.0),
            })
            .collect()
    }

    /// Drop all recorded samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl MetricsSink for MetricsRecorder {
    fn record(&mut self, op: &str, duration_ms: f64) {
        let samples = self.samples.entry(op.to_string()).or_default();
        samples.push_back(duration_ms);
        if samples.len() > MAX_SAMPLES {
            samples.pop_front();
        }
    }
}
