//! yang2cpp CLI
//!
//! Generates a C++ object model (header, source and scaffolding header)
//! from a YANG module.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// yang2cpp - YANG to C++ object model generator
#[derive(Parser)]
#[command(name = "yang2cpp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YANG module to translate
    input: PathBuf,

    /// Prefix of the generated header/source pair (defaults to the module name)
    #[arg(short, long, value_name = "PREFIX")]
    output: Option<String>,

    /// Directory the files are written to (defaults to the current directory)
    #[arg(short = 'd', long, value_name = "DIR")]
    output_directory: Option<PathBuf>,

    /// Import search paths for pyang (may be repeated)
    #[arg(short, long = "path", value_name = "PATHS")]
    paths: Vec<String>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Treat the input as already normalized YIN instead of running pyang
    #[arg(long)]
    yin: bool,

    /// Print the schema tree instead of writing files
    #[arg(long, value_enum, value_name = "FORMAT")]
    dump: Option<DumpFormat>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Output format of `--dump`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    /// Indented outline
    Text,
    /// Pretty-printed JSON
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for --dump
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = commands::Settings::resolve(
        cli.config.as_deref(),
        cli.output,
        cli.output_directory,
        &cli.paths,
        cli.yin,
    )?;

    match cli.dump {
        Some(format) => commands::dump::run(&settings, &cli.input, format).await?,
        None => commands::generate::run(&settings, &cli.input).await?,
    }

    Ok(())
}
