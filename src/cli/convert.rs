use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chromasm::backend::{Injection, InjectionSource};
use chromasm::converter::{ChromatographyConverter, ConversionError};
use chromasm::export::{ExportDirectory, InjectionExport};
use chromasm::naming::PeakNameResolver;

/// Where the injection comes from
pub enum Source {
    /// A single export file
    File(PathBuf),
    /// A URI resolved below an export directory
    Uri { root: PathBuf, uri: String },
}

impl Source {
    fn load(&self) -> Result<Injection> {
        match self {
            Source::File(path) => {
                if !path.exists() {
                    anyhow::bail!("Input file does not exist: {}", path.display());
                }
                let export = InjectionExport::from_file(path)
                    .with_context(|| format!("Failed to read export {}", path.display()))?;
                Ok(export.into_injection())
            }
            Source::Uri { root, uri } => {
                let directory = ExportDirectory::new(root);
                directory
                    .find_injection(uri)
                    .with_context(|| format!("Failed to load {}", uri))?
                    .ok_or_else(|| ConversionError::InjectionNotFound(uri.clone()).into())
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            Source::File(path) => path.display().to_string(),
            Source::Uri { root, uri } => format!("{} (in {})", uri, root.display()),
        }
    }
}

/// Convert one injection to an ASM document
pub fn run(
    source: Source,
    output: Option<PathBuf>,
    pretty: bool,
    names: Box<dyn PeakNameResolver>,
) -> Result<()> {
    info!("chromasm - injection to ASM");
    info!("===========================");
    info!("Input:  {}", source.describe());
    match &output {
        Some(path) => info!("Output: {}", path.display()),
        None => info!("Output: <stdout>"),
    }

    let injection = source.load()?;
    let converter = ChromatographyConverter::with_name_resolver(names);

    let stats = match &output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            let stats = converter
                .convert_to_writer(&injection, &mut writer, pretty)
                .context("Conversion failed")?;
            writer.flush().context("Failed to flush output")?;
            stats
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            let stats = converter
                .convert_to_writer(&injection, &mut writer, pretty)
                .context("Conversion failed")?;
            writeln!(writer).context("Failed to write output")?;
            stats
        }
    };

    info!("Conversion complete!");
    info!("  Measurements: {}", stats.measurement_count);
    info!(
        "  Peaks: {} ({} named)",
        stats.peak_count, stats.named_peak_count
    );

    Ok(())
}
