//! Class declaration codegen

use super::{BASE_NODE, LEAF, RULE, list_key_type, validate};
use crate::error::Result;
use crate::ir::{NodeKind, SchemaNode};
use crate::naming::primitive_type_of;

/// Helper for generating class declarations
pub struct DeclarationCodegen;

impl DeclarationCodegen {
    /// Generate declarations for `node` and everything below it
    ///
    /// Leaves produce no text of their own; they only appear as fields of
    /// their parent.
    pub fn generate(node: &SchemaNode) -> Result<String> {
        if !node.is_container_like() {
            return Ok(String::new());
        }
        validate(node)?;

        let mut code = String::new();
        let mut fields = Vec::new();

        for child in node.children() {
            code.push_str(&Self::generate(child)?);
            fields.push(Self::field(child)?);
        }

        code.push_str(&Self::class_block(node, &fields)?);
        Ok(code)
    }

    /// Member declaration line for `child` inside its parent's class
    pub fn field(child: &SchemaNode) -> Result<String> {
        let ty = match &child.kind {
            NodeKind::Leaf(leaf) => {
                format!("{LEAF}<{}>", primitive_type_of(&leaf.value_type, &child.path)?)
            }
            NodeKind::List(list) => format!(
                "std::map<{LEAF}<{}>, {}>",
                list_key_type(child, list)?,
                child.class_name()?
            ),
            NodeKind::Module(_) | NodeKind::Container(_) | NodeKind::Augment(_) => {
                child.class_name()?
            }
        };

        Ok(format!("    {} {};\n", ty, child.variable_name()?))
    }

    fn class_block(node: &SchemaNode, fields: &[String]) -> Result<String> {
        let class = node.class_name()?;
        let inheritance = match node.kind {
            NodeKind::Module(_) => String::new(),
            _ => format!(" : public {BASE_NODE}"),
        };

        let mut code = String::new();
        code.push_str(RULE);
        code.push('\n');
        code.push_str(&Self::doc_comment(node.description.as_deref()));
        code.push_str(&format!("class {class}{inheritance} {{\n"));
        code.push_str("   public:\n");
        code.push_str("    /**\n");
        code.push_str("     * \\brief Constructor\n");
        code.push_str("     */\n");
        code.push_str(&format!("    {class}();\n"));

        if !fields.is_empty() {
            code.push_str("\n   private:\n");
            for field in fields {
                code.push_str(field);
            }
        }

        code.push_str("};\n\n");
        Ok(code)
    }

    /// Doxygen block carrying the node description
    fn doc_comment(description: Option<&str>) -> String {
        let mut code = String::from("/**\n");

        match description {
            Some(text) => {
                // A literal "*/" would close the comment early
                let text = text.replace("*/", "* /");
                for (i, line) in text.lines().enumerate() {
                    let line = line.trim();
                    match (i, line.is_empty()) {
                        (0, _) => code.push_str(&format!(" * \\brief {line}")),
                        (_, true) => code.push_str(" *"),
                        (_, false) => code.push_str(&format!(" *        {line}")),
                    }
                    code.push('\n');
                }
            }
            None => code.push_str(" * \\brief\n"),
        }

        code.push_str(" */\n");
        code
    }
}
