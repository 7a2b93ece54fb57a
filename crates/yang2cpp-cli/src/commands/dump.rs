//! Print the schema tree

use std::path::Path;

use anyhow::{Context, Result};
use yang2cpp_codegen::dump::{dump_json, dump_text};

use super::Settings;
use crate::DumpFormat;

/// Run the dump command; nothing is written to disk
pub async fn run(settings: &Settings, input: &Path, format: DumpFormat) -> Result<()> {
    let tree = settings
        .compiler()
        .load(input)
        .await
        .with_context(|| format!("Failed to load {}", input.display()))?;

    let output = match format {
        DumpFormat::Text => dump_text(&tree),
        DumpFormat::Json => dump_json(&tree).context("Failed to serialize schema tree")?,
    };

    print!("{output}");
    if format == DumpFormat::Json {
        println!();
    }

    Ok(())
}
