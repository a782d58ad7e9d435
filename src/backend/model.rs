use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{BackendError, EvaluationContext, FormulaEvaluator, FormulaResult, Symbol};

/// One chromatographic run, as seen by the converter.
#[derive(Debug, Clone)]
pub struct Injection {
    /// Injection name (also used as sample identifier)
    pub name: String,

    /// Time of injection
    pub inject_time: Option<DateTime<Utc>>,

    /// Injected volume in uL
    pub injection_volume_ul: Option<f64>,

    /// Name of the instrument method used for the run
    pub instrument_method_name: Option<String>,

    /// Free-text comment entered for the injection
    pub comment: Option<String>,

    /// Detector channels in acquisition order
    pub signals: Vec<Signal>,

    /// Root of the instrument method symbol tree
    pub root_symbol: Option<Arc<dyn Symbol>>,

    /// Formula engine holding the processed results of this injection
    pub evaluator: Arc<dyn FormulaEvaluator>,
}

impl Injection {
    /// Start building an injection with the given name
    pub fn builder(name: impl Into<String>) -> InjectionBuilder {
        InjectionBuilder::new(name)
    }

    /// Root symbol of the instrument method, if the method carries one
    pub fn root_symbol(&self) -> Option<&dyn Symbol> {
        self.root_symbol.as_deref()
    }

    /// Evaluate a reporting formula against this injection's results
    pub fn evaluate(
        &self,
        formula: &str,
        context: &EvaluationContext,
    ) -> Result<FormulaResult, BackendError> {
        self.evaluator.evaluate(formula, context)
    }

    /// Find a signal by name
    pub fn signal(&self, name: &str) -> Option<&Signal> {
        self.signals.iter().find(|s| s.name == name)
    }
}

/// Detector channel metadata
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalMetadata {
    /// Detector device name
    pub detector_device: Option<String>,

    /// User who acquired the signal
    pub user: Option<String>,

    /// Channel name on the detector
    pub channel_name: Option<String>,

    /// Unit of the signal (y) axis, e.g. "mAU" or "pA"
    pub signal_unit: Option<String>,

    /// Unit of the time (x) axis, e.g. "min"
    pub time_unit: Option<String>,
}

/// A raw chromatogram sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    /// Time in the signal's time unit
    pub x: f64,
    /// Detector response in the signal unit
    pub y: f64,
}

/// One detector channel of an injection.
///
/// Signals are owned by their [`Injection`]; code that needs both receives
/// them side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    /// Unique signal identifier
    pub id: Uuid,

    /// Signal name, used as the formula evaluation scope
    pub name: String,

    /// Detector/user/unit metadata
    pub metadata: SignalMetadata,

    /// Raw data points in acquisition order
    pub data_points: Vec<DataPoint>,
}

impl Signal {
    /// Start building a signal with the given name
    pub fn builder(name: impl Into<String>) -> SignalBuilder {
        SignalBuilder::new(name)
    }
}

/// Evaluator for injections without processed results.
///
/// Every formula evaluates to an error result, so peak extraction yields no
/// peaks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPeakResults;

impl FormulaEvaluator for NoPeakResults {
    fn evaluate(
        &self,
        formula: &str,
        _context: &EvaluationContext,
    ) -> Result<FormulaResult, BackendError> {
        Ok(FormulaResult::Error(format!("no results for '{}'", formula)))
    }
}

/// Builder for [`Injection`]
#[derive(Debug)]
pub struct InjectionBuilder {
    injection: Injection,
}

impl InjectionBuilder {
    /// Create a builder for an injection without signals or results
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            injection: Injection {
                name: name.into(),
                inject_time: None,
                injection_volume_ul: None,
                instrument_method_name: None,
                comment: None,
                signals: Vec::new(),
                root_symbol: None,
                evaluator: Arc::new(NoPeakResults),
            },
        }
    }

    /// Set the injection time
    pub fn inject_time(mut self, time: DateTime<Utc>) -> Self {
        self.injection.inject_time = Some(time);
        self
    }

    /// Set the injection volume in uL
    pub fn injection_volume_ul(mut self, volume: f64) -> Self {
        self.injection.injection_volume_ul = Some(volume);
        self
    }

    /// Set the instrument method name
    pub fn instrument_method_name(mut self, name: impl Into<String>) -> Self {
        self.injection.instrument_method_name = Some(name.into());
        self
    }

    /// Set the injection comment
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.injection.comment = Some(comment.into());
        self
    }

    /// Append a signal
    pub fn add_signal(mut self, signal: Signal) -> Self {
        self.injection.signals.push(signal);
        self
    }

    /// Append several signals
    pub fn signals(mut self, signals: impl IntoIterator<Item = Signal>) -> Self {
        self.injection.signals.extend(signals);
        self
    }

    /// Attach the instrument method symbol tree
    pub fn root_symbol(mut self, root: Arc<dyn Symbol>) -> Self {
        self.injection.root_symbol = Some(root);
        self
    }

    /// Attach the formula engine holding the processed results
    pub fn evaluator(mut self, evaluator: Arc<dyn FormulaEvaluator>) -> Self {
        self.injection.evaluator = evaluator;
        self
    }

    /// Build the injection
    pub fn build(self) -> Injection {
        self.injection
    }
}

/// Builder for [`Signal`]
#[derive(Debug)]
pub struct SignalBuilder {
    signal: Signal,
}

impl SignalBuilder {
    /// Create a builder with a random identifier and no data
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            signal: Signal {
                id: Uuid::new_v4(),
                name: name.into(),
                metadata: SignalMetadata::default(),
                data_points: Vec::new(),
            },
        }
    }

    /// Set the signal identifier
    pub fn id(mut self, id: Uuid) -> Self {
        self.signal.id = id;
        self
    }

    /// Set the detector device name
    pub fn detector(mut self, detector: impl Into<String>) -> Self {
        self.signal.metadata.detector_device = Some(detector.into());
        self
    }

    /// Set the acquiring user
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.signal.metadata.user = Some(user.into());
        self
    }

    /// Set the detector channel name
    pub fn channel_name(mut self, channel: impl Into<String>) -> Self {
        self.signal.metadata.channel_name = Some(channel.into());
        self
    }

    /// Set the signal axis unit
    pub fn signal_unit(mut self, unit: impl Into<String>) -> Self {
        self.signal.metadata.signal_unit = Some(unit.into());
        self
    }

    /// Set the time axis unit
    pub fn time_unit(mut self, unit: impl Into<String>) -> Self {
        self.signal.metadata.time_unit = Some(unit.into());
        self
    }

    /// Append one raw data point
    pub fn add_point(mut self, x: f64, y: f64) -> Self {
        self.signal.data_points.push(DataPoint { x, y });
        self
    }

    /// Replace the raw data points
    pub fn data_points(mut self, points: Vec<DataPoint>) -> Self {
        self.signal.data_points = points;
        self
    }

    /// Build the signal
    pub fn build(self) -> Signal {
        self.signal
    }
}
