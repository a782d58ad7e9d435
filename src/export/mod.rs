//! # Injection Exports
//!
//! File-based instrument backend. An injection export is a JSON snapshot of
//! one injection: its metadata, the instrument method symbol tree, raw signal
//! data and the peak results table of every signal.
//!
//! ```json
//! {
//!   "name": "Sample-42",
//!   "injectTime": "2025-06-02T14:05:00Z",
//!   "injectionVolume": 1.0,
//!   "instrumentMethodName": "VOC_screening",
//!   "symbols": { "name": "Root", "children": [ ... ] },
//!   "signals": [{
//!     "name": "FID_front",
//!     "detectorDevice": "FID",
//!     "signalUnit": "pA",
//!     "timeUnit": "min",
//!     "dataPoints": [[0.0, 1.02], [0.01, 1.05]],
//!     "peakResults": [
//!       { "peak.name": "Benzene", "peak.retention_time": 3.42, "peak.area": 152.3 }
//!     ]
//!   }]
//! }
//! ```
//!
//! Peak results are keyed by reporting formula. [`TabulatedEvaluator`] serves
//! them through the [`FormulaEvaluator`](crate::backend::FormulaEvaluator)
//! contract, so exports go through the same extraction path as a live data
//! system. [`ExportDirectory`] resolves injection URIs to export files.

mod directory;
mod evaluator;
mod model;


pub use directory::{ExportDirectory, EXPORT_EXTENSION};
pub use evaluator::{PeakTable, TabulatedEvaluator};
pub use model::{InjectionExport, SignalExport};
