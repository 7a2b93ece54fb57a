//! Generate the C++ model files

use std::path::Path;

use anyhow::{Context, Result};

use super::Settings;

/// Run the generate command
pub async fn run(settings: &Settings, input: &Path) -> Result<()> {
    let compiler = settings.compiler();

    let sources = compiler
        .compile(input)
        .await
        .with_context(|| format!("Failed to generate C++ model from {}", input.display()))?;

    let written = compiler.write(&sources).with_context(|| {
        format!(
            "Failed to write output to {}",
            settings.options.output_dir.display()
        )
    })?;

    tracing::info!("Generated {} files for module '{}':", written.len(), sources.module_name);
    for path in &written {
        tracing::info!("  ✓ {}", path.display());
    }

    Ok(())
}
