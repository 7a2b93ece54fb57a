//! Generation pipeline
//!
//! normalize → build schema tree → emit → render → write. Everything up to
//! rendering happens in memory; files are only touched once all three
//! outputs exist, and they are staged so that either all of them land or
//! none do.

use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::generator::{GeneratedSources, Generator};
use crate::ir::SchemaNode;
use crate::normalizer::SchemaNormalizer;
use crate::parser::Parser;

/// Options for the compiler
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Output directory for generated files
    pub output_dir: PathBuf,

    /// Prefix of the header/source pair (defaults to the module name)
    pub output_prefix: Option<String>,

    /// Import search paths forwarded to the normalizer
    pub search_paths: Vec<String>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            output_prefix: None,
            search_paths: Vec::new(),
        }
    }
}

/// YANG to C++ compiler
pub struct Compiler {
    options: CompileOptions,
    normalizer: Box<dyn SchemaNormalizer>,
    parser: Parser,
    generator: Generator,
}

impl Compiler {
    /// Create a new compiler with the given options and normalizer
    pub fn new(options: CompileOptions, normalizer: Box<dyn SchemaNormalizer>) -> Self {
        Self {
            options,
            normalizer,
            parser: Parser::new(),
            generator: Generator::new(),
        }
    }

    /// Normalize `input` and build its schema tree
    pub async fn load(&self, input: impl AsRef<Path>) -> Result<SchemaNode> {
        let input = input.as_ref();
        tracing::info!("Normalizing {}", input.display());

        let root = self
            .normalizer
            .normalize(input, &self.options.search_paths)
            .await?;

        self.parser.build_tree(&root)
    }

    /// Generate all output files for `input` without writing them
    pub async fn compile(&self, input: impl AsRef<Path>) -> Result<GeneratedSources> {
        let tree = self.load(input).await?;
        tracing::info!("Generating C++ model for module '{}'", tree.name);

        self.generator
            .generate(&tree, self.options.output_prefix.as_deref())
    }

    /// Write generated files into the output directory
    ///
    /// All files are first staged next to their destination and renamed
    /// into place only after every one of them was written.
    pub fn write(&self, sources: &GeneratedSources) -> Result<Vec<PathBuf>> {
        let dir = &self.options.output_dir;
        std::fs::create_dir_all(dir)?;

        let mut staged = Vec::new();
        for (name, contents) in sources.files() {
            let mut file = NamedTempFile::new_in(dir)?;
            std::io::Write::write_all(&mut file, contents.as_bytes())?;
            tracing::debug!("Staged {} at {}", name, file.path().display());
            staged.push((dir.join(name), file));
        }

        let mut written = Vec::new();
        for (target, file) in staged {
            file.persist(&target).map_err(|e| Error::Io(e.error))?;
            tracing::info!("Wrote {}", target.display());
            written.push(target);
        }

        Ok(written)
    }

    /// Compile `input` and write the results
    pub async fn run(&self, input: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let sources = self.compile(input).await?;
        self.write(&sources)
    }
}
