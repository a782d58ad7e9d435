//! # Peak Extraction
//!
//! Peak results are not stored as a table by the data system: they are
//! computed on demand by its formula engine. This module pulls them out one
//! peak at a time.
//!
//! [`FormulaPeakExtractor`] walks peak indices from 0 upwards, asking the
//! backend for `peak.number` at each index. The first error result ends the
//! walk. For every index that answers, a fixed battery of formulas (see
//! [`formulas`]) is evaluated and normalised into a [`PeakData`] record with
//! times in seconds.
//!
//! Extraction never fails. Backend errors end the walk early and the peaks
//! collected so far are returned.

mod extractor;
pub mod formulas;
mod types;

#[cfg(test)]
mod tests;

pub use extractor::{FormulaPeakExtractor, PeakIter, MAX_PEAKS_PER_SIGNAL};
pub use types::PeakData;

use crate::backend::Injection;

/// Source of normalised peak records for one signal
pub trait PeakDataProvider: Send + Sync {
    /// Peaks of `signal_name`, in ascending index order.
    ///
    /// An empty list covers both "no peaks" and "extraction aborted before the
    /// first peak".
    fn peaks(&self, injection: &Injection, signal_name: &str) -> Vec<PeakData>;
}
