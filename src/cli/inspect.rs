use anyhow::{Context, Result};
use std::path::PathBuf;

#[cfg(feature = "colorized_output")]
use console::style;

use chromasm::export::InjectionExport;
use chromasm::mapping::{detector_name, signal_unit};
use chromasm::metadata::{InstrumentDataProvider, MultiVendorResolver};
use chromasm::peaks::FormulaPeakExtractor;

/// Display a summary of an injection export
pub fn run(file: PathBuf) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let injection = InjectionExport::from_file(&file)
        .with_context(|| format!("Failed to read export {}", file.display()))?
        .into_injection();

    let instrument = MultiVendorResolver::new();
    let root = injection.root_symbol();
    let extractor = FormulaPeakExtractor::new();

    println!("{}", heading("Injection Information"));
    println!("{}", heading("====================="));
    println!("File: {}", file.display());
    println!("Name: {}", injection.name);
    if let Some(time) = injection.inject_time {
        println!("Injected: {}", time.to_rfc3339());
    }
    if let Some(method) = &injection.instrument_method_name {
        println!("Method: {}", method);
    }
    println!();

    println!("{}", heading("Instrument:"));
    println!("  Manufacturer: {}", instrument.manufacturer(root));
    println!("  Serial number: {}", instrument.serial_number(root));
    match instrument.column_details(root) {
        Some(column) => {
            println!(
                "  Column: {}",
                column.description.as_deref().unwrap_or("(no description)")
            );
            if let Some(length) = column.length_m {
                println!("    Length: {} m", length);
            }
            if let Some(diameter) = column.internal_diameter_mm {
                println!("    Inner diameter: {} mm", diameter);
            }
            if let Some(film) = column.film_thickness_um {
                println!("    Film thickness: {} μm", film);
            }
        }
        None => println!("  Column: {}", missing("not found")),
    }
    println!();

    println!("{}", heading("Signals:"));
    if injection.signals.is_empty() {
        println!("  {}", missing("none"));
    }
    for (i, signal) in injection.signals.iter().enumerate() {
        let peaks = extractor.iter(&injection, &signal.name).count();
        println!(
            "  {:3}. {} [{}] {} points, {} peaks, unit {}",
            i + 1,
            signal.name,
            detector_name(signal),
            signal.data_points.len(),
            peaks,
            signal_unit(signal)
        );
    }

    Ok(())
}

#[cfg(feature = "colorized_output")]
fn heading(text: &str) -> String {
    style(text).bold().cyan().to_string()
}

#[cfg(not(feature = "colorized_output"))]
fn heading(text: &str) -> String {
    text.to_string()
}

#[cfg(feature = "colorized_output")]
fn missing(text: &str) -> String {
    style(text).yellow().to_string()
}

#[cfg(not(feature = "colorized_output"))]
fn missing(text: &str) -> String {
    text.to_string()
}
