//! Injection to ASM conversion
//!
//! [`ChromatographyConverter`] drives one injection through the metadata,
//! peak and mapping layers and assembles the final [`AsmDocument`]. It holds
//! no extraction logic of its own: every step is delegated to the pluggable
//! providers it is built with.

mod error;


use std::io::Write;
use std::path::Path;

use log::{debug, info};

pub use error::ConversionError;

use crate::asm::{
    AsmDocument, DeviceControlAggregateDocument, GasChromatographyAggregateDocument,
    GasChromatographyDocument, MeasurementAggregateDocument, MeasurementDocument,
    ProcessedDataAggregateDocument, NOT_APPLICABLE,
};
use crate::backend::{Injection, InjectionSource, Signal, Symbol};
use crate::mapping;
use crate::metadata::{InstrumentDataProvider, MultiVendorResolver};
use crate::naming::{factory, PeakNameResolver};
use crate::peaks::{FormulaPeakExtractor, PeakDataProvider};

/// Statistics from a conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Measurements written (one per signal)
    pub measurement_count: usize,
    /// Peaks written across all measurements
    pub peak_count: usize,
    /// Peaks carrying a reported component name
    pub named_peak_count: usize,
}

/// Converter from injections to gas chromatography ASM documents.
///
/// # Example
///
/// ```rust
/// use chromasm::backend::{Injection, Signal};
/// use chromasm::converter::ChromatographyConverter;
/// use chromasm::naming::Passthrough;
///
/// let injection = Injection::builder("Inj-001")
///     .add_signal(Signal::builder("FID_1").time_unit("min").add_point(0.0, 1.0).build())
///     .build();
///
/// let converter = ChromatographyConverter::with_name_resolver(Box::new(Passthrough));
/// let document = converter.convert(&injection)?;
/// assert_eq!(document.measurements().count(), 1);
/// # Ok::<(), chromasm::converter::ConversionError>(())
/// ```
pub struct ChromatographyConverter {
    instrument: Box<dyn InstrumentDataProvider>,
    peaks: Box<dyn PeakDataProvider>,
    names: Box<dyn PeakNameResolver>,
}

impl Default for ChromatographyConverter {
    fn default() -> Self {
        Self::with_name_resolver(factory::create_from_default_file())
    }
}

impl ChromatographyConverter {
    /// Create a converter with the default providers.
    ///
    /// The peak name strategy is read from `peakname-config.json` in the
    /// working directory, falling back to pass-through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter reading its peak name strategy from `path`
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Self {
        Self::with_name_resolver(factory::create_from_file(path))
    }

    /// Create a converter with the default providers and the given name strategy
    pub fn with_name_resolver(names: Box<dyn PeakNameResolver>) -> Self {
        Self::with_components(
            Box::new(MultiVendorResolver::new()),
            Box::new(FormulaPeakExtractor::new()),
            names,
        )
    }

    /// Create a converter from explicit providers
    pub fn with_components(
        instrument: Box<dyn InstrumentDataProvider>,
        peaks: Box<dyn PeakDataProvider>,
        names: Box<dyn PeakNameResolver>,
    ) -> Self {
        Self {
            instrument,
            peaks,
            names,
        }
    }

    /// Peak name strategy in use
    pub fn name_resolver(&self) -> &dyn PeakNameResolver {
        self.names.as_ref()
    }

    /// Convert one injection
    pub fn convert(&self, injection: &Injection) -> Result<AsmDocument, ConversionError> {
        self.convert_with_stats(injection).map(|(document, _)| document)
    }

    /// Convert one injection and report what was written
    pub fn convert_with_stats(
        &self,
        injection: &Injection,
    ) -> Result<(AsmDocument, ConversionStats), ConversionError> {
        if injection.name.trim().is_empty() {
            return Err(ConversionError::InvalidInjection(
                "injection has no name".to_string(),
            ));
        }

        info!(
            "Converting injection '{}' ({} signals, peak names: {})",
            injection.name,
            injection.signals.len(),
            self.names.describe()
        );

        let root = injection.root_symbol();
        let mut stats = ConversionStats::default();

        let measurements: Vec<MeasurementDocument> = injection
            .signals
            .iter()
            .map(|signal| self.map_measurement(injection, signal, root, &mut stats))
            .collect();

        let document = AsmDocument::new(GasChromatographyAggregateDocument {
            device_system: mapping::map_device(self.instrument.as_ref(), root),
            documents: vec![GasChromatographyDocument {
                analyst: analyst(injection),
                device_method_identifier: injection.instrument_method_name.clone(),
                measurement_aggregate: MeasurementAggregateDocument { measurements },
            }],
        });

        info!(
            "Converted injection '{}': {} measurements, {} peaks",
            injection.name, stats.measurement_count, stats.peak_count
        );
        Ok((document, stats))
    }

    /// Resolve `uri` through `source` and convert the injection it names
    pub fn convert_uri<S>(&self, source: &S, uri: &str) -> Result<AsmDocument, ConversionError>
    where
        S: InjectionSource + ?Sized,
    {
        let injection = source
            .find_injection(uri)?
            .ok_or_else(|| ConversionError::InjectionNotFound(uri.to_string()))?;
        self.convert(&injection)
    }

    /// Convert one injection and write the JSON document to `writer`
    pub fn convert_to_writer<W: Write>(
        &self,
        injection: &Injection,
        mut writer: W,
        pretty: bool,
    ) -> Result<ConversionStats, ConversionError> {
        let (document, stats) = self.convert_with_stats(injection)?;
        if pretty {
            serde_json::to_writer_pretty(&mut writer, &document)?;
        } else {
            serde_json::to_writer(&mut writer, &document)?;
        }
        writer.flush()?;
        Ok(stats)
    }

    fn map_measurement(
        &self,
        injection: &Injection,
        signal: &Signal,
        root: Option<&dyn Symbol>,
        stats: &mut ConversionStats,
    ) -> MeasurementDocument {
        let peaks = self.peaks.peaks(injection, &signal.name);
        debug!(
            "Signal '{}': {} data points, {} peaks",
            signal.name,
            signal.data_points.len(),
            peaks.len()
        );

        stats.measurement_count += 1;
        stats.peak_count += peaks.len();
        stats.named_peak_count += peaks.iter().filter(|p| p.name.is_some()).count();

        MeasurementDocument {
            measurement_identifier: signal.id.to_string(),
            detection_type: mapping::detector_name(signal).to_string(),
            chromatogram_data_cube: mapping::map_data_cube(signal),
            column: mapping::map_column(self.instrument.as_ref(), root),
            sample: mapping::map_sample(injection),
            processed_data: ProcessedDataAggregateDocument {
                documents: vec![mapping::map_processed_data(
                    signal,
                    &peaks,
                    self.names.as_ref(),
                )],
            },
            device_control: DeviceControlAggregateDocument {
                documents: vec![mapping::map_device_control(
                    signal,
                    self.instrument.as_ref(),
                    root,
                )],
            },
            injection: mapping::map_injection(injection),
        }
    }
}

/// User of the first signal, `"N/A"` when unknown
fn analyst(injection: &Injection) -> String {
    injection
        .signals
        .first()
        .and_then(|signal| signal.metadata.user.clone())
        .filter(|user| !user.trim().is_empty())
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}
