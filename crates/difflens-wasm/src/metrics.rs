//! Job metrics WASM bindings.
//!
//! Exposes a worker-local metrics recorder to JavaScript. The worker
//! script constructs one recorder per worker instance, times each job, and
//! records the duration after posting the result; the UI reads snapshots
//! on demand. There is no module-level global: each worker owns its
//! recorder explicitly.
//!
//! # Example
//!
//! ```typescript
//! import { JsMetricsRecorder } from '@difflens/wasm';
//!
//! const metrics = new JsMetricsRecorder();
//!
//! const start = performance.now();
//! const diff = detect_changes(a, b, undefined);
//! metrics.record('detectChanges', performance.now() - start);
//!
//! console.log(metrics.snapshot());
//! // [{ name: 'detectChanges', average_ms: 12.4, count: 1, latest_ms: 12.4 }]
//! ```

use difflens_core::metrics::{MetricsRecorder, MetricsSink};
use wasm_bindgen::prelude::*;

/// A per-worker metrics recorder for JavaScript.
#[wasm_bindgen]
pub struct JsMetricsRecorder {
    inner: MetricsRecorder,
}

impl Default for JsMetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsMetricsRecorder {
    /// Create an empty recorder.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsMetricsRecorder {
        JsMetricsRecorder {
            inner: MetricsRecorder::new(),
        }
    }

    /// Record one completed job of the named operation.
    ///
    /// Only the last 100 samples per operation are retained.
    pub fn record(&mut self, op: &str, duration_ms: f64) {
        self.inner.record(op, duration_ms);
    }

    /// Mean duration for an operation, or 0 if none recorded.
    pub fn average_ms(&self, op: &str) -> f64 {
        self.inner.average_ms(op)
    }

    /// All operations' aggregates as an array of
    /// `{ name, average_ms, count, latest_ms }` objects, ordered by name.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Drop all recorded samples.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
