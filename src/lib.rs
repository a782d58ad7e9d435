//! # chromasm - Chromatography Injections as Allotrope Simple Model Documents
//!
//! `chromasm` converts one chromatography injection (raw detector signals, peak
//! results and instrument method metadata) into an Allotrope Simple Model
//! (ASM) gas chromatography JSON document.
//!
//! ## Key Features
//!
//! - **Backend independent**: the data system is reached only through the
//!   traits in [`backend`]. A file-based backend ([`export`]) lets the whole
//!   pipeline run on JSON snapshots of injections.
//!
//! - **Multi-vendor metadata**: serial number, manufacturer and column details
//!   are found by probing Agilent, Thermo, HP and generic symbol paths.
//!
//! - **Lazy peak extraction**: peaks are pulled from the reporting formula
//!   engine one index at a time until the backend signals the end of the list.
//!
//! - **Peak name translation**: an optional chain of name resolvers (Wikidata
//!   lookup with in-memory caching) rewrites component names.
//!
//! - **Degrades instead of failing**: a missing column, a broken formula or an
//!   unreachable knowledge base never aborts a conversion.
//!
//! ## Quick Start
//!
//! ```rust
//! use chromasm::backend::{Injection, Signal};
//! use chromasm::converter::ChromatographyConverter;
//! use chromasm::naming::Passthrough;
//!
//! let injection = Injection::builder("Sample-42")
//!     .add_signal(
//!         Signal::builder("FID_front")
//!             .detector("FID")
//!             .signal_unit("pA")
//!             .time_unit("min")
//!             .add_point(0.0, 1.02)
//!             .add_point(0.5, 1.10)
//!             .build(),
//!     )
//!     .build();
//!
//! let converter = ChromatographyConverter::with_name_resolver(Box::new(Passthrough));
//! let document = converter.convert(&injection)?;
//!
//! let json = document.to_json_pretty()?;
//! assert!(json.contains("gas chromatography aggregate document"));
//! # Ok::<(), chromasm::converter::ConversionError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`backend`]: data system contract (symbols, formula evaluation, injections)
//! - [`export`]: injection snapshot files and a directory-backed injection source
//! - [`metadata`]: vendor-tolerant instrument and column metadata
//! - [`peaks`]: peak extraction through reporting formulas
//! - [`naming`]: peak name resolution strategies
//! - [`mapping`]: pure functions from domain values to ASM fragments
//! - [`asm`]: serde model of the output document
//! - [`converter`]: the orchestrator tying everything together
//!
//! ## Units
//!
//! | Quantity | Output unit |
//! |----------|-------------|
//! | retention, start, end times and widths | s |
//! | peak area | `<signal unit> s` |
//! | peak height | signal unit |
//! | column length | m |
//! | column inner diameter | mm |
//! | column film thickness | μm |
//! | injection volume | μL |

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod asm;
pub mod backend;
pub mod converter;
pub mod export;
pub mod mapping;
pub mod metadata;
pub mod naming;
pub mod peaks;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::asm::{AsmDocument, MeasurementDocument, Peak, ASM_MANIFEST};
    pub use crate::backend::{
        BackendError, EvaluationContext, FormulaEvaluator, FormulaResult, Injection,
        InjectionSource, Signal, Symbol, SymbolNode,
    };
    pub use crate::converter::{ChromatographyConverter, ConversionError, ConversionStats};
    pub use crate::export::{ExportDirectory, InjectionExport, TabulatedEvaluator};
    pub use crate::metadata::{ColumnDetails, InstrumentDataProvider, MultiVendorResolver};
    pub use crate::naming::{factory, PeakNameConfig, PeakNameResolver};
    pub use crate::peaks::{FormulaPeakExtractor, PeakData, PeakDataProvider};
}
