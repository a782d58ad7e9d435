use crate::asm::{
    units, ChromatographyColumnDocument, DeviceControlDocument, DeviceSystemDocument, Quantity,
    NOT_APPLICABLE,
};
use crate::backend::{Signal, Symbol};
use crate::metadata::InstrumentDataProvider;

/// Detector reported when a signal does not name one
const UNKNOWN_DETECTOR: &str = "Unknown";

/// Map the instrument identification.
///
/// The serial number doubles as device identifier and the manufacturer as
/// brand name.
pub fn map_device(
    provider: &dyn InstrumentDataProvider,
    root: Option<&dyn Symbol>,
) -> DeviceSystemDocument {
    let serial = provider.serial_number(root);
    let brand = provider.manufacturer(root);

    DeviceSystemDocument {
        asset_management_identifier: NOT_APPLICABLE.to_string(),
        equipment_serial_number: serial.clone(),
        device_identifier: serial,
        brand_name: brand.clone(),
        product_manufacturer: brand,
    }
}

/// Map the column metadata.
///
/// Without a resolvable column the document only carries the placeholder
/// serial number.
pub fn map_column(
    provider: &dyn InstrumentDataProvider,
    root: Option<&dyn Symbol>,
) -> ChromatographyColumnDocument {
    let Some(details) = provider.column_details(root) else {
        return ChromatographyColumnDocument {
            serial_number: NOT_APPLICABLE.to_string(),
            chemistry_type: None,
            product_manufacturer: None,
            length: None,
            inner_diameter: None,
            particle_size: None,
        };
    };

    ChromatographyColumnDocument {
        serial_number: NOT_APPLICABLE.to_string(),
        chemistry_type: details.description,
        product_manufacturer: Some(provider.manufacturer(root)),
        length: details.length_m.map(|v| Quantity::new(v, units::METERS)),
        inner_diameter: details
            .internal_diameter_mm
            .map(|v| Quantity::new(v, units::MILLIMETERS)),
        particle_size: details
            .film_thickness_um
            .map(|v| Quantity::new(v, units::MICROMETERS)),
    }
}

/// Map the detector of one signal
pub fn map_device_control(
    signal: &Signal,
    provider: &dyn InstrumentDataProvider,
    root: Option<&dyn Symbol>,
) -> DeviceControlDocument {
    DeviceControlDocument {
        device_type: detector_name(signal).to_string(),
        equipment_serial_number: Some(provider.serial_number(root)),
        product_manufacturer: Some(provider.manufacturer(root)),
    }
}

/// Detector device of `signal`, `"Unknown"` when not reported
pub fn detector_name(signal: &Signal) -> &str {
    signal
        .metadata
        .detector_device
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(UNKNOWN_DETECTOR)
}
