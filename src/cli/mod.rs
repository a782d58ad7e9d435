use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::{Path, PathBuf};

use chromasm::naming::{factory, PeakNameResolver, DEFAULT_CONFIG_FILE};

mod config;
mod convert;
mod inspect;
mod resolve;

use config::Config;

/// chromasm - Chromatography to Allotrope Simple Model converter
#[derive(Parser)]
#[command(name = "chromasm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an injection to an ASM gas chromatography document
    Convert {
        /// Injection export file
        #[arg(short, long, value_name = "FILE", conflicts_with = "uri")]
        input: Option<PathBuf>,

        /// Injection URI, resolved below --root
        #[arg(short, long, value_name = "URI", requires = "root")]
        uri: Option<String>,

        /// Directory holding injection exports
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Pretty-print the JSON document
        #[arg(long)]
        pretty: bool,

        /// Peak name configuration (JSON)
        #[arg(long, value_name = "FILE")]
        peak_name_config: Option<PathBuf>,
    },

    /// Summarise an injection export: signals, peaks, instrument and column
    Inspect {
        /// Injection export file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Run the configured peak name strategy on one name
    ResolveName {
        /// Peak name to resolve
        #[arg(value_name = "NAME")]
        name: String,

        /// Peak name configuration (JSON)
        #[arg(long, value_name = "FILE")]
        peak_name_config: Option<PathBuf>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Convert {
            input,
            uri,
            root,
            output,
            pretty,
            peak_name_config,
        } => {
            let source = match (input, uri, root) {
                (Some(file), _, _) => convert::Source::File(file),
                (None, Some(uri), Some(root)) => convert::Source::Uri { root, uri },
                _ => anyhow::bail!("Either --input or --uri with --root is required"),
            };
            let names = name_resolver(peak_name_config.as_deref(), &config);
            let pretty = pretty || config.conversion.pretty.unwrap_or(false);
            convert::run(source, output, pretty, names)
        }
        Commands::Inspect { file } => inspect::run(file),
        Commands::ResolveName {
            name,
            peak_name_config,
        } => resolve::run(&name, name_resolver(peak_name_config.as_deref(), &config)),
    }
}

/// Build the peak name strategy. CLI flags win over the TOML file.
fn name_resolver(flag: Option<&Path>, config: &Config) -> Box<dyn PeakNameResolver> {
    let path = flag
        .or(config.conversion.peak_name_config.as_deref())
        .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

    let loaded = match factory::load_config(path) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("Ignoring peak name config {}: {}", path.display(), e);
            None
        }
    };

    let resolver = match loaded {
        Some(mut naming) => {
            if let Some(timeout) = config.conversion.lookup_timeout_secs {
                naming.lookup_timeout_secs = timeout;
            }
            factory::create(Some(&naming))
        }
        None => factory::create(None),
    };
    info!("Peak names: {}", resolver.describe());
    resolver
}
