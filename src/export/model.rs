use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PeakTable, TabulatedEvaluator};
use crate::backend::{BackendError, DataPoint, Injection, Signal, SymbolNode};

/// JSON snapshot of one injection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectionExport {
    /// Injection name
    pub name: String,

    /// Time of injection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inject_time: Option<DateTime<Utc>>,

    /// Injected volume in uL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injection_volume: Option<f64>,

    /// Instrument method name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument_method_name: Option<String>,

    /// Injection comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Root of the instrument method symbol tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbols: Option<SymbolNode>,

    /// Detector channels
    #[serde(default)]
    pub signals: Vec<SignalExport>,
}

/// JSON snapshot of one signal and its peak results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalExport {
    /// Signal identifier; a random one is assigned when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    /// Signal name
    pub name: String,

    /// Detector device
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detector_device: Option<String>,

    /// Acquiring user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Detector channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,

    /// Unit of the response axis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_unit: Option<String>,

    /// Unit of the time axis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<String>,

    /// Raw `[time, response]` pairs
    #[serde(default)]
    pub data_points: Vec<[f64; 2]>,

    /// Peak results keyed by reporting formula, one entry per peak
    #[serde(default)]
    pub peak_results: PeakTable,
}

impl InjectionExport {
    /// Load an export file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BackendError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse an export from JSON
    pub fn from_json(json: &str) -> Result<Self, BackendError> {
        let export: Self = serde_json::from_str(json)?;
        export.validate()?;
        Ok(export)
    }

    fn validate(&self) -> Result<(), BackendError> {
        let mut seen = std::collections::HashSet::new();
        for signal in &self.signals {
            if signal.name.is_empty() {
                return Err(BackendError::InvalidExport(format!(
                    "signal without name in injection '{}'",
                    self.name
                )));
            }
            if !seen.insert(signal.name.as_str()) {
                return Err(BackendError::InvalidExport(format!(
                    "duplicate signal '{}' in injection '{}'",
                    signal.name, self.name
                )));
            }
        }
        Ok(())
    }

    /// Build the backend view of this injection
    pub fn into_injection(self) -> Injection {
        let mut evaluator = TabulatedEvaluator::new();
        let mut signals = Vec::with_capacity(self.signals.len());

        for export in self.signals {
            let mut builder = Signal::builder(export.name.clone()).data_points(
                export
                    .data_points
                    .iter()
                    .map(|&[x, y]| DataPoint { x, y })
                    .collect(),
            );
            if let Some(id) = export.id {
                builder = builder.id(id);
            }
            if let Some(detector) = export.detector_device {
                builder = builder.detector(detector);
            }
            if let Some(user) = export.user {
                builder = builder.user(user);
            }
            if let Some(channel) = export.channel_name {
                builder = builder.channel_name(channel);
            }
            if let Some(unit) = export.signal_unit {
                builder = builder.signal_unit(unit);
            }
            if let Some(unit) = export.time_unit {
                builder = builder.time_unit(unit);
            }
            evaluator = evaluator.with_signal(export.name, export.peak_results);
            signals.push(builder.build());
        }

        let mut builder = Injection::builder(self.name)
            .signals(signals)
            .evaluator(Arc::new(evaluator));
        if let Some(time) = self.inject_time {
            builder = builder.inject_time(time);
        }
        if let Some(volume) = self.injection_volume {
            builder = builder.injection_volume_ul(volume);
        }
        if let Some(method) = self.instrument_method_name {
            builder = builder.instrument_method_name(method);
        }
        if let Some(comment) = self.comment {
            builder = builder.comment(comment);
        }
        if let Some(root) = self.symbols {
            builder = builder.root_symbol(Arc::new(root));
        }
        builder.build()
    }
}
