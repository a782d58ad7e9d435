use log::{debug, warn};

use crate::backend::{BackendError, EvaluationContext, Injection};

use super::formulas;
use super::{PeakData, PeakDataProvider};

/// Upper bound on peak indices queried per signal
pub const MAX_PEAKS_PER_SIGNAL: usize = 10_000;

const SECONDS_PER_MINUTE: f64 = 60.0;

/// [`PeakDataProvider`] driven by the backend formula engine
#[derive(Debug, Clone, Copy)]
pub struct FormulaPeakExtractor {
    max_peaks: usize,
}

impl Default for FormulaPeakExtractor {
    fn default() -> Self {
        Self {
            max_peaks: MAX_PEAKS_PER_SIGNAL,
        }
    }
}

impl FormulaPeakExtractor {
    /// Create an extractor with the default safety cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the maximum number of peak indices queried per signal
    pub fn with_max_peaks(mut self, max_peaks: usize) -> Self {
        self.max_peaks = max_peaks;
        self
    }

    /// Lazily iterate the peaks of `signal_name`.
    ///
    /// Every call starts a fresh walk from index 0.
    pub fn iter<'a>(&self, injection: &'a Injection, signal_name: &'a str) -> PeakIter<'a> {
        PeakIter {
            injection,
            signal_name,
            next_index: 0,
            max_peaks: self.max_peaks,
            exhausted: signal_name.is_empty(),
        }
    }
}

impl PeakDataProvider for FormulaPeakExtractor {
    fn peaks(&self, injection: &Injection, signal_name: &str) -> Vec<PeakData> {
        let peaks: Vec<PeakData> = self.iter(injection, signal_name).collect();
        debug!(
            "Extracted {} peaks from signal '{}' of injection '{}'",
            peaks.len(),
            signal_name,
            injection.name
        );
        peaks
    }
}

/// Pull-based iterator over the peaks of one signal.
///
/// Ends at the first error result for `peak.number`, at the first backend
/// failure, or at the safety cap, whichever comes first.
#[derive(Debug)]
pub struct PeakIter<'a> {
    injection: &'a Injection,
    signal_name: &'a str,
    /// Next 0-based context index to query
    next_index: usize,
    max_peaks: usize,
    exhausted: bool,
}

impl PeakIter<'_> {
    fn number(&self, formula: &str, context: &EvaluationContext) -> Result<Option<f64>, BackendError> {
        Ok(self.injection.evaluate(formula, context)?.as_f64())
    }

    fn minutes_as_seconds(
        &self,
        formula: &str,
        context: &EvaluationContext,
    ) -> Result<Option<f64>, BackendError> {
        Ok(self
            .number(formula, context)?
            .map(|minutes| minutes * SECONDS_PER_MINUTE))
    }

    fn text(&self, formula: &str, context: &EvaluationContext) -> Result<Option<String>, BackendError> {
        let result = self.injection.evaluate(formula, context)?;
        Ok(result
            .as_text()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string))
    }

    /// Evaluate the formula battery for one peak.
    ///
    /// A field whose formula gives no number is left `None`; the peak is
    /// still returned.
    fn read_peak(&self, context: &EvaluationContext) -> Result<PeakData, BackendError> {
        let retention_time_s = self.minutes_as_seconds(formulas::RETENTION_TIME, context)?;
        let start_time_s = self.minutes_as_seconds(formulas::START_TIME, context)?;
        let end_time_s = self.minutes_as_seconds(formulas::STOP_TIME, context)?;
        let area = self.number(formulas::AREA, context)?;
        let height = self.number(formulas::HEIGHT, context)?;

        let missing: Vec<&str> = [
            ("retention time", retention_time_s),
            ("start time", start_time_s),
            ("end time", end_time_s),
            ("area", area),
            ("height", height),
        ]
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(field, _)| *field)
        .collect();
        if !missing.is_empty() {
            warn!(
                "Peak {} of signal '{}' has no {}",
                context.peak_index + 1,
                self.signal_name,
                missing.join(", ")
            );
        }

        Ok(PeakData {
            index: context.peak_index + 1,
            name: self.text(formulas::NAME, context)?,
            retention_time_s,
            start_time_s,
            end_time_s,
            area,
            height,
            width_baseline_s: self.minutes_as_seconds(formulas::WIDTH_BASELINE, context)?,
            width_half_height_s: self.minutes_as_seconds(formulas::WIDTH_HALF_HEIGHT, context)?,
            width_5_percent_s: self.minutes_as_seconds(formulas::WIDTH_5_PERCENT, context)?,
            resolution_baseline: self.number(formulas::RESOLUTION_BASELINE, context)?,
            resolution_half_height: self.number(formulas::RESOLUTION_HALF_HEIGHT, context)?,
            resolution_statistical_moments: self
                .number(formulas::RESOLUTION_STATISTICAL_MOMENTS, context)?,
            plates_tangent: self.number(formulas::PLATES_TANGENT, context)?,
            plates_half_height: self.number(formulas::PLATES_HALF_HEIGHT, context)?,
            asymmetry: self.number(formulas::ASYMMETRY, context)?,
            capacity_factor: self.number(formulas::CAPACITY_FACTOR, context)?,
            relative_height: self.number(formulas::RELATIVE_HEIGHT, context)?,
            relative_area: self.number(formulas::RELATIVE_AREA, context)?,
            skewness: self.number(formulas::SKEWNESS, context)?,
        })
    }

    fn abort(&mut self, context: &EvaluationContext, error: &BackendError) {
        warn!(
            "Peak extraction for signal '{}' aborted at index {}: {}",
            self.signal_name, context.peak_index, error
        );
        self.exhausted = true;
    }
}

impl Iterator for PeakIter<'_> {
    type Item = PeakData;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.exhausted {
            if self.next_index >= self.max_peaks {
                warn!(
                    "Signal '{}' reached the limit of {} peaks, remaining peaks are ignored",
                    self.signal_name, self.max_peaks
                );
                self.exhausted = true;
                break;
            }

            let context = EvaluationContext::new(self.signal_name, self.next_index);
            match self.injection.evaluate(formulas::PEAK_NUMBER, &context) {
                Ok(sentinel) if sentinel.is_error() => {
                    debug!(
                        "No peak at index {} of signal '{}'",
                        context.peak_index, self.signal_name
                    );
                    self.exhausted = true;
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    self.abort(&context, &e);
                    break;
                }
            }

            self.next_index += 1;
            match self.read_peak(&context) {
                Ok(peak) => return Some(peak),
                Err(e) => self.abort(&context, &e),
            }
        }
        None
    }
}
