use crate::asm::{Peak, PeakList, ProcessedDataDocument, Quantity};
use crate::backend::Signal;
use crate::naming::PeakNameResolver;
use crate::peaks::PeakData;

use super::signal_unit;

/// Map the peaks of one signal to its processed data document.
///
/// Always returns a document; no peaks gives an empty peak list.
pub fn map_processed_data(
    signal: &Signal,
    peaks: &[PeakData],
    resolver: &dyn PeakNameResolver,
) -> ProcessedDataDocument {
    let unit = signal_unit(signal);
    ProcessedDataDocument {
        peak_list: PeakList {
            peak: peaks
                .iter()
                .map(|peak| map_peak(peak, unit, resolver))
                .collect(),
        },
    }
}

/// Map one peak record.
///
/// Reported names go through `resolver`; unnamed peaks are written as
/// `"Peak <index>"`.
pub fn map_peak(peak: &PeakData, signal_unit: &str, resolver: &dyn PeakNameResolver) -> Peak {
    let written_name = match peak.name.as_deref() {
        Some(name) => resolver.resolve(name),
        None => peak.display_name(),
    };

    Peak {
        identifier: peak.index.to_string(),
        written_name,
        retention_time: peak.retention_time_s.map(Quantity::seconds),
        peak_start: peak.start_time_s.map(Quantity::seconds),
        peak_end: peak.end_time_s.map(Quantity::seconds),
        peak_area: peak
            .area
            .map(|area| Quantity::new(area, format!("{} s", signal_unit))),
        peak_height: peak.height.map(|height| Quantity::new(height, signal_unit)),
        peak_width_at_baseline: peak.width_baseline_s.map(Quantity::seconds),
        peak_width_at_half_height: peak.width_half_height_s.map(Quantity::seconds),
        peak_width_at_5_percent_of_height: peak.width_5_percent_s.map(Quantity::seconds),
        asymmetry_factor: peak.asymmetry.map(Quantity::unitless),
        statistical_skew: peak.skewness.map(Quantity::unitless),
        plates_by_tangent_method: peak.plates_tangent.map(Quantity::unitless),
        plates_by_half_height: peak.plates_half_height.map(Quantity::unitless),
        resolution_using_baseline_widths: peak.resolution_baseline.map(Quantity::unitless),
        resolution_using_half_height_width: peak.resolution_half_height.map(Quantity::unitless),
        resolution_using_statistical_moments: peak
            .resolution_statistical_moments
            .map(Quantity::unitless),
        capacity_factor: peak.capacity_factor.map(Quantity::unitless),
        relative_peak_height: peak.relative_height.map(Quantity::percent),
        relative_peak_area: peak.relative_area.map(Quantity::percent),
    }
}
