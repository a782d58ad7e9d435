use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::backend::{BackendError, EvaluationContext, FormulaEvaluator, FormulaResult};
use crate::peaks::formulas;

/// Peak results of one signal: one formula → value map per peak
pub type PeakTable = Vec<BTreeMap<String, Value>>;

/// [`FormulaEvaluator`] answering from exported peak result tables.
///
/// A row exists for every peak of a signal; `peak.number` is synthesised from
/// the row position when the export does not carry it.
#[derive(Debug, Clone, Default)]
pub struct TabulatedEvaluator {
    tables: HashMap<String, PeakTable>,
}

impl TabulatedEvaluator {
    /// Create an evaluator without any results
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the peak table of a signal
    pub fn with_signal(mut self, signal_name: impl Into<String>, table: PeakTable) -> Self {
        self.tables.insert(signal_name.into(), table);
        self
    }

    /// Number of peaks stored for `signal_name`
    pub fn peak_count(&self, signal_name: &str) -> usize {
        self.tables.get(signal_name).map_or(0, Vec::len)
    }
}

impl FormulaEvaluator for TabulatedEvaluator {
    fn evaluate(
        &self,
        formula: &str,
        context: &EvaluationContext,
    ) -> Result<FormulaResult, BackendError> {
        let Some(row) = self
            .tables
            .get(&context.signal_name)
            .and_then(|table| table.get(context.peak_index))
        else {
            return Ok(FormulaResult::Error(format!(
                "no peak {} in signal '{}'",
                context.peak_index, context.signal_name
            )));
        };

        let result = match row.get(formula) {
            Some(Value::Number(n)) => match n.as_f64() {
                Some(value) => FormulaResult::Numeric(value),
                None => FormulaResult::Error(format!("'{}' is out of range", formula)),
            },
            Some(Value::String(s)) => FormulaResult::Text(s.clone()),
            Some(Value::Bool(b)) => FormulaResult::Text(b.to_string()),
            Some(Value::Null) | None if formula == formulas::PEAK_NUMBER => {
                FormulaResult::Numeric((context.peak_index + 1) as f64)
            }
            Some(Value::Null) | None => {
                FormulaResult::Error(format!("'{}' not available", formula))
            }
            Some(_) => FormulaResult::Error(format!("'{}' is not a scalar", formula)),
        };
        Ok(result)
    }
}
