//! # chromasm Converter
//!
//! A command-line tool for converting chromatography injections to Allotrope
//! Simple Model (ASM) gas chromatography documents.
//!
//! ## Usage
//!
//! ```bash
//! # Convert an injection export
//! chromasm-convert convert --input Sample-42.json --output Sample-42.asm.json --pretty
//!
//! # Convert by URI from an export directory
//! chromasm-convert convert --uri chrom://lab/project/seq/inj1 --root /data/exports
//!
//! # Summarise an export
//! chromasm-convert inspect Sample-42.json
//!
//! # Try the configured peak name strategy
//! chromasm-convert resolve-name Toluene --peak-name-config peakname-config.json
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
