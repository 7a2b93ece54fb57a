//! Schema node tree
//!
//! The typed tree built from the attributed input. It is built once,
//! read by both emission passes and never mutated after construction.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::naming::{class_name_of, variable_name_of};

/// Path separator (also the root path)
pub const SEPARATOR: &str = "/";

/// A node of the schema tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaNode {
    /// Schema identifier (augments carry their derived slug)
    pub name: String,

    /// Absolute path, always ending with a separator
    pub path: String,

    /// Free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Variant payload
    pub kind: NodeKind,
}

/// Node variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Root-like container without the addressable base
    Module(ContainerNode),

    /// Plain container
    Container(ContainerNode),

    /// Keyed list
    List(ListNode),

    /// Augmentation of another schema location
    Augment(AugmentNode),

    /// Typed value
    Leaf(LeafNode),
}

/// Children shared by every container-like variant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContainerNode {
    /// Child nodes in document order
    pub children: Vec<SchemaNode>,
}

/// List payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListNode {
    /// Ordinary children (never includes the key)
    #[serde(flatten)]
    pub body: ContainerNode,

    /// Declared key identifier
    pub key_name: String,

    /// The child named `key_name`, kept out of `body`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Box<SchemaNode>>,
}

/// Augment payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AugmentNode {
    /// Augmenting children
    #[serde(flatten)]
    pub body: ContainerNode,

    /// Referenced schema location (`target-node`)
    pub target: Option<String>,
}

/// Leaf payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeafNode {
    /// Schema primitive type name
    pub value_type: String,
}

impl SchemaNode {
    /// Create a node with no children
    pub fn new(name: impl Into<String>, path: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            description: None,
            kind,
        }
    }

    /// Builder-style description setter
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Short variant name, used in logs and dumps
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Module(_) => "module",
            NodeKind::Container(_) => "container",
            NodeKind::List(_) => "list",
            NodeKind::Augment(_) => "augment",
            NodeKind::Leaf(_) => "leaf",
        }
    }

    /// Shared container record, `None` for leaves
    pub fn body(&self) -> Option<&ContainerNode> {
        match &self.kind {
            NodeKind::Module(body) | NodeKind::Container(body) => Some(body),
            NodeKind::List(list) => Some(&list.body),
            NodeKind::Augment(augment) => Some(&augment.body),
            NodeKind::Leaf(_) => None,
        }
    }

    /// Ordinary children (empty for leaves; a list's key is not included)
    pub fn children(&self) -> &[SchemaNode] {
        self.body().map(|b| b.children.as_slice()).unwrap_or(&[])
    }

    /// Whether this node is emitted as a class
    pub fn is_container_like(&self) -> bool {
        self.body().is_some()
    }

    /// Attach a child, returning where it now lives
    ///
    /// A list diverts the child whose name equals its key into the key slot.
    /// Leaves cannot hold children and return `None`, dropping the child.
    pub fn attach(&mut self, child: SchemaNode) -> Option<&mut SchemaNode> {
        match &mut self.kind {
            NodeKind::Module(body) | NodeKind::Container(body) => push(body, child),
            NodeKind::List(list) => {
                if !list.key_name.is_empty() && child.name == list.key_name {
                    list.key = Some(Box::new(child));
                    list.key.as_deref_mut()
                } else {
                    push(&mut list.body, child)
                }
            }
            NodeKind::Augment(augment) => push(&mut augment.body, child),
            NodeKind::Leaf(_) => None,
        }
    }

    /// Generated C++ class name
    pub fn class_name(&self) -> Result<String> {
        match &self.kind {
            NodeKind::Augment(augment) if augment.target.is_none() => {
                Err(Error::MissingAugmentTarget {
                    path: self.path.clone(),
                })
            }
            _ if self.name.is_empty() => Err(Error::UnnamedNode {
                path: self.path.clone(),
            }),
            NodeKind::Augment(_) => Ok(self.name.clone()),
            _ => Ok(class_name_of(&self.name)),
        }
    }

    /// Generated C++ member variable name
    pub fn variable_name(&self) -> Result<String> {
        if let NodeKind::Augment(AugmentNode { target: None, .. }) = &self.kind {
            return Err(Error::MissingAugmentTarget {
                path: self.path.clone(),
            });
        }
        if self.name.is_empty() {
            return Err(Error::UnnamedNode {
                path: self.path.clone(),
            });
        }
        Ok(variable_name_of(&self.name))
    }
}

fn push(body: &mut ContainerNode, child: SchemaNode) -> Option<&mut SchemaNode> {
    body.children.push(child);
    body.children.last_mut()
}
