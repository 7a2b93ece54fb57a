//! CLI command implementations

pub mod dump;
pub mod generate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use yang2cpp_codegen::{CompileOptions, Compiler, PyangNormalizer, SchemaNormalizer, YinNormalizer};
use yang2cpp_core::Config;

/// Effective settings after merging flags, config file and defaults
#[derive(Debug, Clone)]
pub struct Settings {
    /// Compiler options
    pub options: CompileOptions,
    /// pyang executable
    pub pyang: String,
    /// Input is already YIN
    pub yin: bool,
}

impl Settings {
    /// Merge command line values over the optional config file
    pub fn resolve(
        config_path: Option<&Path>,
        output_prefix: Option<String>,
        output_directory: Option<PathBuf>,
        paths: &[String],
        yin: bool,
    ) -> Result<Self> {
        if let Some(path) = config_path {
            tracing::info!("Loading configuration from {}", path.display());
        }
        let config = Config::load_optional(config_path).context("Failed to load configuration")?;

        let output_dir = output_directory
            .or_else(|| config.output_directory.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            options: CompileOptions {
                output_dir,
                output_prefix,
                search_paths: config.merged_search_paths(paths),
            },
            pyang: config.pyang,
            yin,
        })
    }

    /// Build a compiler with the configured normalizer
    pub fn compiler(&self) -> Compiler {
        let normalizer: Box<dyn SchemaNormalizer> = if self.yin {
            Box::new(YinNormalizer)
        } else {
            Box::new(PyangNormalizer::new(&self.pyang))
        };
        Compiler::new(self.options.clone(), normalizer)
    }
}
