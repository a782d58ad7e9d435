use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;
use crate::backend::{
    BackendError, EvaluationContext, FormulaEvaluator, FormulaResult, Injection, Signal,
};

/// Evaluator answering from per-peak formula tables.
///
/// Index `i` exists when `i < peaks.len()`; `fail_at` makes every call at that
/// index a backend failure.
#[derive(Debug, Default)]
struct ScriptedEvaluator {
    signal: String,
    peaks: Vec<HashMap<&'static str, FormulaResult>>,
    fail_at: Option<usize>,
    endless: bool,
    sentinel_calls: AtomicUsize,
}

impl ScriptedEvaluator {
    fn new(signal: &str, peaks: Vec<HashMap<&'static str, FormulaResult>>) -> Self {
        Self {
            signal: signal.to_string(),
            peaks,
            ..Self::default()
        }
    }
}

impl FormulaEvaluator for ScriptedEvaluator {
    fn evaluate(
        &self,
        formula: &str,
        context: &EvaluationContext,
    ) -> Result<FormulaResult, BackendError> {
        if self.fail_at == Some(context.peak_index) {
            return Err(BackendError::Evaluation("session lost".to_string()));
        }
        if formula == formulas::PEAK_NUMBER {
            self.sentinel_calls.fetch_add(1, Ordering::SeqCst);
            let exists = context.signal_name == self.signal
                && (self.endless || context.peak_index < self.peaks.len());
            return Ok(if exists {
                FormulaResult::Numeric((context.peak_index + 1) as f64)
            } else {
                FormulaResult::Error("index out of range".to_string())
            });
        }
        let table = if self.endless {
            self.peaks.first()
        } else {
            self.peaks.get(context.peak_index)
        };
        Ok(table
            .and_then(|t| t.get(formula).cloned())
            .unwrap_or_else(|| FormulaResult::Error("not available".to_string())))
    }
}

fn basic_peak(rt_min: f64) -> HashMap<&'static str, FormulaResult> {
    HashMap::from([
        (formulas::RETENTION_TIME, FormulaResult::Numeric(rt_min)),
        (formulas::START_TIME, FormulaResult::Numeric(rt_min - 0.05)),
        (formulas::STOP_TIME, FormulaResult::Numeric(rt_min + 0.05)),
        (formulas::AREA, FormulaResult::Numeric(120.0)),
        (formulas::HEIGHT, FormulaResult::Numeric(35.5)),
    ])
}

fn injection_with(evaluator: ScriptedEvaluator) -> (Injection, Arc<ScriptedEvaluator>) {
    let evaluator = Arc::new(evaluator);
    let injection = Injection::builder("Inj-001")
        .add_signal(Signal::builder("FID_1").build())
        .evaluator(evaluator.clone())
        .build();
    (injection, evaluator)
}

#[test]
fn test_extracts_until_sentinel_error() {
    let (injection, evaluator) = injection_with(ScriptedEvaluator::new(
        "FID_1",
        vec![basic_peak(1.0), basic_peak(2.0), basic_peak(3.5)],
    ));

    let peaks = FormulaPeakExtractor::new().peaks(&injection, "FID_1");

    assert_eq!(peaks.len(), 3);
    assert_eq!(
        peaks.iter().map(|p| p.index).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    // 3 peaks plus the terminating query
    assert_eq!(evaluator.sentinel_calls.load(Ordering::SeqCst), 4);
}

#[test]
fn test_times_converted_to_seconds() {
    let mut peak = basic_peak(2.5);
    peak.insert(formulas::WIDTH_BASELINE, FormulaResult::Numeric(0.1));
    peak.insert(formulas::WIDTH_HALF_HEIGHT, FormulaResult::Numeric(0.05));
    peak.insert(formulas::WIDTH_5_PERCENT, FormulaResult::Numeric(0.08));
    peak.insert(formulas::NAME, FormulaResult::Text("Benzene".to_string()));
    peak.insert(formulas::RESOLUTION_BASELINE, FormulaResult::Numeric(1.8));
    peak.insert(formulas::PLATES_HALF_HEIGHT, FormulaResult::Numeric(48000.0));
    peak.insert(formulas::RELATIVE_AREA, FormulaResult::Numeric(12.5));
    let (injection, _) = injection_with(ScriptedEvaluator::new("FID_1", vec![peak]));

    let peaks = FormulaPeakExtractor::new().peaks(&injection, "FID_1");
    let peak = &peaks[0];

    assert!((peak.retention_time_s.unwrap() - 150.0).abs() < 1e-9);
    assert!((peak.start_time_s.unwrap() - 147.0).abs() < 1e-9);
    assert!((peak.end_time_s.unwrap() - 153.0).abs() < 1e-9);
    assert!((peak.width_baseline_s.unwrap() - 6.0).abs() < 1e-9);
    assert!((peak.width_half_height_s.unwrap() - 3.0).abs() < 1e-9);
    assert!((peak.width_5_percent_s.unwrap() - 4.8).abs() < 1e-9);
    // Non-time values are passed through unscaled
    assert_eq!(peak.area, Some(120.0));
    assert_eq!(peak.height, Some(35.5));
    assert_eq!(peak.resolution_baseline, Some(1.8));
    assert_eq!(peak.plates_half_height, Some(48000.0));
    assert_eq!(peak.relative_area, Some(12.5));
    assert_eq!(peak.name.as_deref(), Some("Benzene"));
}

#[test]
fn test_unavailable_statistics_are_none() {
    let (injection, _) = injection_with(ScriptedEvaluator::new("FID_1", vec![basic_peak(1.0)]));

    let peak = FormulaPeakExtractor::new()
        .peaks(&injection, "FID_1")
        .remove(0);

    assert_eq!(peak.name, None);
    assert_eq!(peak.width_baseline_s, None);
    assert_eq!(peak.resolution_half_height, None);
    assert_eq!(peak.resolution_statistical_moments, None);
    assert_eq!(peak.plates_tangent, None);
    assert_eq!(peak.asymmetry, None);
    assert_eq!(peak.capacity_factor, None);
    assert_eq!(peak.relative_height, None);
    assert_eq!(peak.skewness, None);
}

#[test]
fn test_text_result_for_numeric_field_is_none() {
    let mut peak = basic_peak(1.0);
    peak.insert(formulas::ASYMMETRY, FormulaResult::Text("n.a.".to_string()));
    peak.insert(formulas::NAME, FormulaResult::Numeric(7.0));
    let (injection, _) = injection_with(ScriptedEvaluator::new("FID_1", vec![peak]));

    let peaks = FormulaPeakExtractor::new().peaks(&injection, "FID_1");

    assert_eq!(peaks.len(), 1);
    assert_eq!(peaks[0].asymmetry, None);
    assert_eq!(peaks[0].name, None);
}

#[test]
fn test_non_finite_results_are_none() {
    let mut peak = basic_peak(1.0);
    peak.insert(formulas::HEIGHT, FormulaResult::Numeric(f64::NAN));
    peak.insert(formulas::SKEWNESS, FormulaResult::Numeric(f64::INFINITY));
    peak.insert(formulas::WIDTH_BASELINE, FormulaResult::Numeric(f64::NEG_INFINITY));
    let (injection, _) = injection_with(ScriptedEvaluator::new("FID_1", vec![peak]));

    let peaks = FormulaPeakExtractor::new().peaks(&injection, "FID_1");

    assert_eq!(peaks.len(), 1);
    assert_eq!(peaks[0].height, None);
    assert_eq!(peaks[0].skewness, None);
    assert_eq!(peaks[0].width_baseline_s, None);
    assert_eq!(peaks[0].area, Some(120.0));
}

#[test]
fn test_backend_failure_keeps_collected_peaks() {
    let mut evaluator = ScriptedEvaluator::new(
        "FID_1",
        vec![basic_peak(1.0), basic_peak(2.0), basic_peak(3.0), basic_peak(4.0)],
    );
    evaluator.fail_at = Some(2);
    let (injection, _) = injection_with(evaluator);

    let peaks = FormulaPeakExtractor::new().peaks(&injection, "FID_1");

    assert_eq!(peaks.len(), 2);
    assert_eq!(peaks[1].index, 2);
}

#[test]
fn test_backend_failure_on_first_peak_yields_empty() {
    let mut evaluator = ScriptedEvaluator::new("FID_1", vec![basic_peak(1.0)]);
    evaluator.fail_at = Some(0);
    let (injection, _) = injection_with(evaluator);

    assert!(FormulaPeakExtractor::new()
        .peaks(&injection, "FID_1")
        .is_empty());
}

#[test]
fn test_peak_missing_core_value_is_kept() {
    let mut incomplete = basic_peak(2.0);
    incomplete.remove(formulas::AREA);
    incomplete.insert(formulas::STOP_TIME, FormulaResult::Error("no baseline".to_string()));
    let (injection, evaluator) = injection_with(ScriptedEvaluator::new(
        "FID_1",
        vec![basic_peak(1.0), incomplete, basic_peak(3.0)],
    ));

    let peaks = FormulaPeakExtractor::new().peaks(&injection, "FID_1");

    assert_eq!(
        peaks.iter().map(|p| p.index).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(peaks[1].area, None);
    assert_eq!(peaks[1].end_time_s, None);
    assert_eq!(peaks[1].height, Some(35.5));
    assert!((peaks[1].retention_time_s.unwrap() - 120.0).abs() < 1e-9);
    assert_eq!(peaks[2].area, Some(120.0));
    assert_eq!(evaluator.sentinel_calls.load(Ordering::SeqCst), 4);
}

#[test]
fn test_unknown_or_empty_signal_yields_no_peaks() {
    let (injection, evaluator) =
        injection_with(ScriptedEvaluator::new("FID_1", vec![basic_peak(1.0)]));
    let extractor = FormulaPeakExtractor::new();

    assert!(extractor.peaks(&injection, "TCD_2").is_empty());
    assert!(extractor.peaks(&injection, "").is_empty());
    // The empty name is rejected before any query
    assert_eq!(evaluator.sentinel_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_safety_cap_stops_endless_backend() {
    let mut evaluator = ScriptedEvaluator::new("FID_1", vec![basic_peak(1.0)]);
    evaluator.endless = true;
    let (injection, evaluator) = injection_with(evaluator);

    let peaks = FormulaPeakExtractor::new()
        .with_max_peaks(25)
        .peaks(&injection, "FID_1");

    assert_eq!(peaks.len(), 25);
    assert_eq!(evaluator.sentinel_calls.load(Ordering::SeqCst), 25);
}

#[test]
fn test_iterator_is_lazy_and_restartable() {
    let (injection, evaluator) = injection_with(ScriptedEvaluator::new(
        "FID_1",
        vec![basic_peak(1.0), basic_peak(2.0), basic_peak(3.0)],
    ));
    let extractor = FormulaPeakExtractor::new();

    let first = extractor.iter(&injection, "FID_1").next().unwrap();
    assert_eq!(first.index, 1);
    assert_eq!(evaluator.sentinel_calls.load(Ordering::SeqCst), 1);

    // A second walk starts over from the first peak
    assert_eq!(extractor.iter(&injection, "FID_1").count(), 3);
}

#[test]
fn test_display_name_fallback() {
    let unnamed = PeakData::new(4, 60.0, 58.0, 62.0, 10.0, 2.0);
    assert_eq!(unnamed.display_name(), "Peak 4");
    assert_eq!(unnamed.with_name("Toluene").display_name(), "Toluene");
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// k answering indices followed by an error yield exactly k peaks, in order
        #[test]
        fn test_sentinel_error_at_k_yields_k_peaks(k in 0usize..40) {
            let tables = (0..k).map(|i| basic_peak(i as f64 + 1.0)).collect();
            let (injection, _) = injection_with(ScriptedEvaluator::new("FID_1", tables));

            let peaks = FormulaPeakExtractor::new().peaks(&injection, "FID_1");

            prop_assert_eq!(peaks.len(), k);
            prop_assert!(peaks.windows(2).all(|w| w[0].index < w[1].index));
        }

        /// Peaks lacking an area still count towards the k records
        #[test]
        fn test_missing_area_keeps_peak_count(without_area in proptest::collection::vec(any::<bool>(), 0..30)) {
            let tables = without_area
                .iter()
                .enumerate()
                .map(|(i, &drop_area)| {
                    let mut table = basic_peak(i as f64 + 1.0);
                    if drop_area {
                        table.remove(formulas::AREA);
                    }
                    table
                })
                .collect();
            let (injection, _) = injection_with(ScriptedEvaluator::new("FID_1", tables));

            let peaks = FormulaPeakExtractor::new().peaks(&injection, "FID_1");

            prop_assert_eq!(peaks.len(), without_area.len());
            for (i, (peak, &drop_area)) in peaks.iter().zip(&without_area).enumerate() {
                prop_assert_eq!(peak.index, i + 1);
                prop_assert_eq!(peak.area.is_none(), drop_area);
            }
        }
    }
}
