//! Constructor definition codegen

use super::{BASE_NODE, RULE, cpp_string, validate};
use crate::error::Result;
use crate::ir::{NodeKind, SchemaNode};

/// Helper for generating constructor definitions
pub struct DefinitionCodegen;

impl DefinitionCodegen {
    /// Generate constructor definitions for `node` and everything below it
    pub fn generate(node: &SchemaNode) -> Result<String> {
        if !node.is_container_like() {
            return Ok(String::new());
        }
        validate(node)?;

        let mut code = String::new();
        let mut initializers = Vec::new();

        if !matches!(node.kind, NodeKind::Module(_)) {
            initializers.push(format!("{BASE_NODE}({})", cpp_string(&node.path)));
        }

        for child in node.children() {
            code.push_str(&Self::generate(child)?);
            if let Some(initializer) = Self::initializer(child)? {
                initializers.push(initializer);
            }
        }

        code.push_str(&Self::constructor(node, &initializers)?);
        Ok(code)
    }

    /// Member initializer for `child`; only leaves need one
    pub fn initializer(child: &SchemaNode) -> Result<Option<String>> {
        match child.kind {
            NodeKind::Leaf(_) => Ok(Some(format!(
                "{}({})",
                child.variable_name()?,
                cpp_string(&child.path)
            ))),
            _ => Ok(None),
        }
    }

    fn constructor(node: &SchemaNode, initializers: &[String]) -> Result<String> {
        let class = node.class_name()?;

        let mut code = String::new();
        code.push_str(RULE);
        code.push_str("\n\n");
        code.push_str(&format!("{class}::{class}()\n"));

        if !initializers.is_empty() {
            code.push_str("    : ");
            code.push_str(&initializers.join(",\n      "));
            code.push('\n');
        }

        code.push_str("{\n}\n\n");
        Ok(code)
    }
}
