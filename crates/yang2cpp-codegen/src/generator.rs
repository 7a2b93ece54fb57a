//! Output file rendering
//!
//! Wraps the emitted declaration and definition text into the final
//! header/source pair and pairs them with the scaffolding header.

use minijinja::{Environment, context};

use crate::emit::emit;
use crate::error::{Error, Result};
use crate::ir::SchemaNode;
use crate::scaffolding::{SCAFFOLDING, SCAFFOLDING_FILE_NAME};

const BANNER_TEMPLATE: &str = r#"/**************************************************************************************************/
/**
 * \file
 * \brief {{ module }} YANG module representation.
 *
 * WARNING WARNING --> This is an auto generated file <-- WARNING WARNING
 *
 */
/**************************************************************************************************/
"#;

const HEADER_TEMPLATE: &str = r#"{% include "banner" %}
#ifndef {{ guard }}
#define {{ guard }}

#include "{{ scaffolding }}"

{{ declarations }}#endif /* {{ guard }} */
"#;

const SOURCE_TEMPLATE: &str = r#"{% include "banner" %}
#include "{{ header }}"

{{ definitions }}"#;

/// The three output files of one run, fully rendered in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSources {
    /// Root module name
    pub module_name: String,
    /// Header file name (`<prefix>.h`)
    pub header_name: String,
    /// Header contents
    pub header: String,
    /// Source file name (`<prefix>.cc`)
    pub source_name: String,
    /// Source contents
    pub source: String,
    /// Scaffolding header contents
    pub scaffolding: String,
}

impl GeneratedSources {
    /// `(file name, contents)` for every output file
    pub fn files(&self) -> [(&str, &str); 3] {
        [
            (self.header_name.as_str(), self.header.as_str()),
            (self.source_name.as_str(), self.source.as_str()),
            (SCAFFOLDING_FILE_NAME, self.scaffolding.as_str()),
        ]
    }
}

/// Renders schema trees into output files
#[derive(Debug, Default)]
pub struct Generator;

impl Generator {
    /// Create a new generator
    pub fn new() -> Self {
        Self
    }

    /// Render all output files for `root`
    ///
    /// `prefix` names the header/source pair; it defaults to the root name.
    pub fn generate(&self, root: &SchemaNode, prefix: Option<&str>) -> Result<GeneratedSources> {
        let prefix = prefix.unwrap_or(&root.name);
        let header_name = format!("{prefix}.h");
        let source_name = format!("{prefix}.cc");
        for file_name in [&header_name, &source_name] {
            if file_name == SCAFFOLDING_FILE_NAME {
                return Err(Error::ReservedOutputName {
                    file_name: file_name.clone(),
                });
            }
        }

        let code = emit(root)?;

        let env = Self::environment()?;

        let header = env.get_template("header.h")?.render(context! {
            module => &root.name,
            guard => include_guard(&root.name),
            scaffolding => SCAFFOLDING_FILE_NAME,
            declarations => code.declarations,
        })?;

        let source = env.get_template("source.cc")?.render(context! {
            module => &root.name,
            header => &header_name,
            definitions => code.definitions,
        })?;

        tracing::debug!(
            "Rendered {} ({} bytes) and {} ({} bytes)",
            header_name,
            header.len(),
            source_name,
            source.len()
        );

        Ok(GeneratedSources {
            module_name: root.name.clone(),
            header_name,
            header,
            source_name,
            source,
            scaffolding: SCAFFOLDING.to_string(),
        })
    }

    fn environment() -> Result<Environment<'static>> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_template("banner", BANNER_TEMPLATE)?;
        env.add_template("header.h", HEADER_TEMPLATE)?;
        env.add_template("source.cc", SOURCE_TEMPLATE)?;
        Ok(env)
    }
}

/// Include guard macro for a module: `ietf-ip` → `__AUTOGEN_IETF_IP_H__`
pub fn include_guard(module: &str) -> String {
    let stem: String = module
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("__AUTOGEN_{stem}_H__")
}
