//! # Instrument Backend Contract
//!
//! The converter never talks to a vendor SDK directly. Everything it needs from
//! the chromatography data system is expressed here as a small set of traits
//! and read-only views:
//!
//! - [`Symbol`]: one node of the hierarchical instrument/method symbol tree,
//!   with dotted-path lookup and prioritised value access
//! - [`FormulaEvaluator`]: evaluates a reporting formula (e.g. `peak.area`)
//!   against a `(signal, peak index)` [`EvaluationContext`] and returns a
//!   tagged [`FormulaResult`]
//! - [`InjectionSource`]: resolves an injection URI to an [`Injection`]
//!
//! [`Injection`] and [`Signal`] are plain snapshots of the vendor objects. They
//! are built once per conversion and never mutated by the core.
//!
//! The `export` module provides a file-backed implementation of this contract;
//! tests implement the traits directly.

mod error;
mod model;
pub mod symbol_tree;


use std::fmt;

pub use error::BackendError;
pub use model::{
    DataPoint, Injection, InjectionBuilder, NoPeakResults, Signal, SignalBuilder, SignalMetadata,
};
pub use symbol_tree::SymbolNode;

/// A node of the instrument symbol tree.
///
/// Implementors expose their children by name and up to three value
/// representations. The priority between those representations is fixed by
/// [`Symbol::current_value`]: offline value, then online value, then generic
/// value.
pub trait Symbol: fmt::Debug + Send + Sync {
    /// Name of this node (one path segment).
    fn name(&self) -> &str;

    /// Direct child with the given name.
    fn child(&self, name: &str) -> Option<&dyn Symbol>;

    /// Value stored in the instrument method (offline).
    fn offline_value(&self) -> Option<String> {
        None
    }

    /// Value reported by the running instrument (online).
    fn online_value(&self) -> Option<String> {
        None
    }

    /// Untyped fallback value.
    fn generic_value(&self) -> Option<String> {
        None
    }

    /// First available value representation, in priority order.
    fn current_value(&self) -> Option<String> {
        self.offline_value()
            .or_else(|| self.online_value())
            .or_else(|| self.generic_value())
    }

    /// Walk a dot-separated path below this node.
    ///
    /// Returns `None` as soon as one segment is missing. An empty path never
    /// matches.
    fn find_child(&self, path: &str) -> Option<&dyn Symbol> {
        let mut segments = path.split('.');
        let mut current = self.child(segments.next()?)?;
        for segment in segments {
            current = current.child(segment)?;
        }
        Some(current)
    }
}

/// Scope of one formula evaluation: a signal channel and a 0-based peak index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvaluationContext {
    /// Name of the signal channel
    pub signal_name: String,

    /// 0-based peak index within the signal
    pub peak_index: usize,
}

impl EvaluationContext {
    /// Create a context for the given signal and peak index
    pub fn new(signal_name: impl Into<String>, peak_index: usize) -> Self {
        Self {
            signal_name: signal_name.into(),
            peak_index,
        }
    }
}

/// Tagged result of a formula evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaResult {
    /// Numeric result
    Numeric(f64),
    /// Text result
    Text(String),
    /// The backend could not compute the formula in this context
    Error(String),
}

impl FormulaResult {
    /// Whether this result is the error variant
    pub fn is_error(&self) -> bool {
        matches!(self, FormulaResult::Error(_))
    }

    /// Finite numeric value, or `None` for text, error and non-finite results
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FormulaResult::Numeric(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }

    /// Text value, or `None` for numeric and error results
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormulaResult::Text(value) => Some(value),
            _ => None,
        }
    }
}

/// Formula engine of the data system.
///
/// `Ok(FormulaResult::Error(..))` means "this quantity is not available here"
/// and is part of normal operation. `Err(..)` means the backend itself failed.
pub trait FormulaEvaluator: fmt::Debug + Send + Sync {
    /// Evaluate `formula` in `context`
    fn evaluate(
        &self,
        formula: &str,
        context: &EvaluationContext,
    ) -> Result<FormulaResult, BackendError>;
}

/// Lookup of injections by URI.
pub trait InjectionSource {
    /// Resolve `uri`. `Ok(None)` when nothing matches.
    fn find_injection(&self, uri: &str) -> Result<Option<Injection>, BackendError>;
}
