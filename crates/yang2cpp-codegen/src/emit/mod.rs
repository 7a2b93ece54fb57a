//! C++ emission passes
//!
//! Two recursive passes over the schema tree, kept in lock-step: every
//! container-like node yields one class declaration and one constructor
//! definition, children first and the node itself last.

pub mod declarations;
pub mod definitions;

use std::collections::HashSet;

pub use declarations::DeclarationCodegen;
pub use definitions::DefinitionCodegen;

use crate::error::{Error, Result};
use crate::ir::{ListNode, NodeKind, SchemaNode};
use crate::naming::primitive_type_of;

/// Addressable base class supplied by the scaffolding header
pub const BASE_NODE: &str = "CppYangModel::BasicNode";

/// Generic leaf class supplied by the scaffolding header
pub const LEAF: &str = "CppYangModel::Leaf";

/// Separator rule printed above every class and constructor
pub const RULE: &str =
    "/**************************************************************************************************/";

/// Declaration and definition text for one schema tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedCode {
    /// Class declarations (header body)
    pub declarations: String,
    /// Constructor definitions (source body)
    pub definitions: String,
}

/// Run both passes on `root`
pub fn emit(root: &SchemaNode) -> Result<EmittedCode> {
    check_class_names(root)?;
    Ok(EmittedCode {
        declarations: DeclarationCodegen::generate(root)?,
        definitions: DefinitionCodegen::generate(root)?,
    })
}

/// Declaration pass
pub fn emit_declarations(root: &SchemaNode) -> Result<String> {
    check_class_names(root)?;
    DeclarationCodegen::generate(root)
}

/// Definition pass
pub fn emit_definitions(root: &SchemaNode) -> Result<String> {
    check_class_names(root)?;
    DefinitionCodegen::generate(root)
}

/// Reject two classes with the same name anywhere under `root`
///
/// All classes share one header, so cousins collide as much as siblings.
/// The error carries the path of the second class.
pub fn check_class_names(root: &SchemaNode) -> Result<()> {
    fn walk(node: &SchemaNode, seen: &mut HashSet<String>) -> Result<()> {
        if !node.is_container_like() {
            return Ok(());
        }
        let class = node.class_name()?;
        if !seen.insert(class.clone()) {
            return Err(collision(node, class));
        }
        node.children().iter().try_for_each(|child| walk(child, seen))
    }

    walk(root, &mut HashSet::new())
}

/// Checks shared by both passes for a container-like node
///
/// Fails on a missing augment target, a missing name, an unresolved list
/// key, or two fields mapping to the same variable name.
pub(crate) fn validate(node: &SchemaNode) -> Result<()> {
    node.class_name()?;

    if let NodeKind::List(list) = &node.kind {
        list_key_type(node, list)?;
    }

    let mut variables = HashSet::new();
    for child in node.children() {
        let variable = child.variable_name()?;
        if !variables.insert(variable.clone()) {
            return Err(collision(node, variable));
        }
    }

    Ok(())
}

/// C++ type of a list's key leaf
pub(crate) fn list_key_type(node: &SchemaNode, list: &ListNode) -> Result<&'static str> {
    match list.key.as_deref() {
        Some(SchemaNode {
            kind: NodeKind::Leaf(leaf),
            path,
            ..
        }) => primitive_type_of(&leaf.value_type, path),
        _ => Err(Error::MissingListKey {
            path: node.path.clone(),
            key: list.key_name.clone(),
        }),
    }
}

/// Quote `value` as a C++ string literal
pub(crate) fn cpp_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

fn collision(node: &SchemaNode, identifier: String) -> Error {
    Error::NameCollision {
        path: node.path.clone(),
        identifier,
    }
}
