//! Attributed tree to schema tree builder
//!
//! Walks the normalized element tree in pre-order and builds the typed
//! [`SchemaNode`] tree. Only five element kinds become nodes; everything
//! else is dropped together with its subtree.

use yang2cpp_core::{AttributedElement, parse_yin};

use crate::error::{Error, Result};
use crate::ir::*;
use crate::naming::augment_slug;

/// Data-definition statements that carry schema content but are not
/// supported by the generator. Dropping them loses data, so it is logged
/// at `warn` level.
const UNSUPPORTED_DATA_DEFINITIONS: &[&str] = &[
    "leaf-list",
    "uses",
    "choice",
    "case",
    "anydata",
    "anyxml",
    "grouping",
    "rpc",
    "action",
    "notification",
];

/// Classification of an input element by tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// One of the recognized node kinds
    Node(NodeTag),
    /// Description of the enclosing element
    Description,
    /// Anything else: dropped with its subtree
    Other,
}

/// Recognized node kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeTag {
    /// `module`
    Module,
    /// `container`
    Container,
    /// `list`
    List,
    /// `leaf`
    Leaf,
    /// `augment`
    Augment,
}

impl ElementKind {
    /// Classify an element tag
    pub fn classify(tag: &str) -> Self {
        match tag {
            "module" => ElementKind::Node(NodeTag::Module),
            "container" => ElementKind::Node(NodeTag::Container),
            "list" => ElementKind::Node(NodeTag::List),
            "leaf" => ElementKind::Node(NodeTag::Leaf),
            "augment" => ElementKind::Node(NodeTag::Augment),
            "description" => ElementKind::Description,
            _ => ElementKind::Other,
        }
    }
}

/// Builder for schema trees
#[derive(Debug, Default)]
pub struct Parser;

impl Parser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a YIN string into a schema tree
    pub fn parse_yin(&self, yin: &str) -> Result<SchemaNode> {
        let root = parse_yin(yin)?;
        self.build_tree(&root)
    }

    /// Build the schema tree rooted at `root`
    ///
    /// The root must be a container-like kind.
    pub fn build_tree(&self, root: &AttributedElement) -> Result<SchemaNode> {
        let tag = match ElementKind::classify(&root.tag) {
            ElementKind::Node(NodeTag::Leaf) | ElementKind::Description | ElementKind::Other => {
                return Err(Error::InvalidRoot {
                    tag: root.tag.clone(),
                });
            }
            ElementKind::Node(tag) => tag,
        };

        let mut node = create_node(tag, root, SEPARATOR);
        populate(&mut node, root);

        tracing::debug!(
            "Built schema tree '{}' with {} top-level nodes",
            node.name,
            node.children().len()
        );
        Ok(node)
    }
}

/// Construct the node for `element` without its children
fn create_node(tag: NodeTag, element: &AttributedElement, parent_path: &str) -> SchemaNode {
    let description = describe(element);

    let node = match tag {
        NodeTag::Augment => {
            let target = element.attribute("target-node").map(str::to_string);
            let (name, path) = match &target {
                Some(t) => (augment_slug(t), format!("{t}{SEPARATOR}")),
                None => (String::new(), parent_path.to_string()),
            };
            let augment = AugmentNode {
                body: ContainerNode::default(),
                target,
            };
            SchemaNode::new(name, path, NodeKind::Augment(augment))
        }
        NodeTag::Module => {
            named_node(element, parent_path, NodeKind::Module(ContainerNode::default()))
        }
        NodeTag::Container => {
            named_node(element, parent_path, NodeKind::Container(ContainerNode::default()))
        }
        NodeTag::List => {
            let list = ListNode {
                key_name: property(element, "key", "value"),
                ..Default::default()
            };
            named_node(element, parent_path, NodeKind::List(list))
        }
        NodeTag::Leaf => {
            let leaf = LeafNode {
                value_type: property(element, "type", "name"),
            };
            named_node(element, parent_path, NodeKind::Leaf(leaf))
        }
    };

    tracing::trace!("Created {} at {}", node.kind_name(), node.path);
    node.with_description(description)
}

/// Node whose name and path come from the element's `name` attribute
fn named_node(element: &AttributedElement, parent_path: &str, kind: NodeKind) -> SchemaNode {
    let name = element.attribute("name").unwrap_or_default();
    let path = if name.is_empty() {
        parent_path.to_string()
    } else {
        format!("{parent_path}{name}{SEPARATOR}")
    };
    SchemaNode::new(name, path, kind)
}

/// Create, attach and recurse into every recognized child of `element`
fn populate(node: &mut SchemaNode, element: &AttributedElement) {
    for child in &element.children {
        match ElementKind::classify(&child.tag) {
            ElementKind::Node(tag) => {
                let created = create_node(tag, child, &node.path);
                let (kind, path) = (created.kind_name(), created.path.clone());

                match node.attach(created) {
                    Some(attached) => populate(attached, child),
                    None => tracing::warn!(
                        "Dropping {} at {}: {} cannot hold children",
                        kind,
                        path,
                        node.path
                    ),
                }
            }
            // Consumed by `describe` when the node was created
            ElementKind::Description => {}
            ElementKind::Other => {
                if UNSUPPORTED_DATA_DEFINITIONS.contains(&child.tag.as_str()) {
                    tracing::warn!(
                        "Dropping unsupported '{}' {} under {}",
                        child.tag,
                        child.attribute("name").unwrap_or_default(),
                        node.path
                    );
                } else {
                    tracing::trace!("Skipping '{}' under {}", child.tag, node.path);
                }
            }
        }
    }
}

/// Attribute `attr` of the first immediate child tagged `tag`, or empty
fn property(element: &AttributedElement, tag: &str, attr: &str) -> String {
    element
        .child(tag)
        .and_then(|p| p.attribute(attr))
        .unwrap_or_default()
        .to_string()
}

/// Description of `element` from its immediate children; the last one wins
fn describe(element: &AttributedElement) -> Option<String> {
    element
        .children
        .iter()
        .rev()
        .find(|c| ElementKind::classify(&c.tag) == ElementKind::Description)
        .and_then(|d| {
            d.children
                .first()
                .and_then(|text| text.text.clone())
                .or_else(|| d.text.clone())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elem(tag: &str, name: &str) -> AttributedElement {
        AttributedElement::new(tag).with_attribute("name", name)
    }

    fn typed_leaf(name: &str, ty: &str) -> AttributedElement {
        elem("leaf", name).with_child(AttributedElement::new("type").with_attribute("name", ty))
    }

    fn description(text: &str) -> AttributedElement {
        AttributedElement::new("description")
            .with_child(AttributedElement::new("text").with_text(text))
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            ElementKind::classify("container"),
            ElementKind::Node(NodeTag::Container)
        );
        assert_eq!(
            ElementKind::classify("description"),
            ElementKind::Description
        );
        assert_eq!(ElementKind::classify("leaf-list"), ElementKind::Other);
        assert_eq!(ElementKind::classify("type"), ElementKind::Other);
    }

    #[test]
    fn test_paths_accumulate() {
        let root = elem("module", "sensor")
            .with_child(elem("container", "config").with_child(typed_leaf("rate", "uint16")));

        let tree = Parser::new().build_tree(&root).unwrap();
        assert_eq!(tree.path, "/sensor/");
        let config = &tree.children()[0];
        assert_eq!(config.path, "/sensor/config/");
        assert_eq!(config.children()[0].path, "/sensor/config/rate/");
    }

    #[test]
    fn test_nameless_module_is_root_path() {
        let tree = Parser::new()
            .build_tree(&AttributedElement::new("module"))
            .unwrap();
        assert_eq!(tree.path, "/");
        assert!(tree.name.is_empty());
    }

    #[test]
    fn test_leaf_type_first_match_wins() {
        let root = elem("module", "m").with_child(
            typed_leaf("a", "uint8").with_child(AttributedElement::new("type").with_attribute("name", "string")),
        );

        let tree = Parser::new().build_tree(&root).unwrap();
        match &tree.children()[0].kind {
            NodeKind::Leaf(leaf) => assert_eq!(leaf.value_type, "uint8"),
            _ => panic!("Expected leaf"),
        }
    }

    #[test]
    fn test_list_key_promoted() {
        let root = elem("module", "m").with_child(
            elem("list", "entry")
                .with_child(AttributedElement::new("key").with_attribute("value", "id"))
                .with_child(typed_leaf("id", "uint32"))
                .with_child(typed_leaf("value", "string")),
        );

        let tree = Parser::new().build_tree(&root).unwrap();
        let entry = &tree.children()[0];
        assert_eq!(entry.children().len(), 1);
        assert_eq!(entry.children()[0].name, "value");
        match &entry.kind {
            NodeKind::List(list) => {
                assert_eq!(list.key_name, "id");
                let key = list.key.as_ref().unwrap();
                assert_eq!(key.path, "/m/entry/id/");
            }
            _ => panic!("Expected list"),
        }
    }

    #[test]
    fn test_list_without_matching_key_child() {
        let root = elem("module", "m").with_child(
            elem("list", "entry")
                .with_child(AttributedElement::new("key").with_attribute("value", "name"))
                .with_child(typed_leaf("id", "uint32")),
        );

        let tree = Parser::new().build_tree(&root).unwrap();
        match &tree.children()[0].kind {
            NodeKind::List(list) => assert!(list.key.is_none()),
            _ => panic!("Expected list"),
        }
    }

    #[test]
    fn test_augment_uses_target() {
        let root = elem("module", "m").with_child(
            AttributedElement::new("augment")
                .with_attribute("target-node", "/a:b/c-d")
                .with_child(typed_leaf("extra", "string")),
        );

        let tree = Parser::new().build_tree(&root).unwrap();
        let augment = &tree.children()[0];
        assert_eq!(augment.name, "A_B__C_D");
        assert_eq!(augment.path, "/a:b/c-d/");
        assert_eq!(augment.children()[0].path, "/a:b/c-d/extra/");
    }

    #[test]
    fn test_augment_without_target() {
        let root = elem("module", "m").with_child(AttributedElement::new("augment"));

        let tree = Parser::new().build_tree(&root).unwrap();
        let augment = &tree.children()[0];
        assert_eq!(augment.path, "/m/");
        match &augment.kind {
            NodeKind::Augment(a) => assert!(a.target.is_none()),
            _ => panic!("Expected augment"),
        }
    }

    #[test]
    fn test_unrecognized_subtree_dropped() {
        let root = elem("module", "m")
            .with_child(elem("leaf-list", "tags").with_child(typed_leaf("hidden", "string")))
            .with_child(elem("grouping", "g").with_child(elem("container", "inner")))
            .with_child(typed_leaf("kept", "string"));

        let tree = Parser::new().build_tree(&root).unwrap();
        let names: Vec<&str> = tree.children().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["kept"]);
    }

    #[test]
    fn test_description_attaches_to_enclosing_node() {
        let root = elem("module", "m")
            .with_child(description("module text"))
            .with_child(elem("container", "c").with_child(description("container text")));

        let tree = Parser::new().build_tree(&root).unwrap();
        assert_eq!(tree.description.as_deref(), Some("module text"));
        assert_eq!(
            tree.children()[0].description.as_deref(),
            Some("container text")
        );
    }

    #[test]
    fn test_last_description_wins() {
        let root = elem("module", "m")
            .with_child(description("first"))
            .with_child(description("second"));

        let tree = Parser::new().build_tree(&root).unwrap();
        assert_eq!(tree.description.as_deref(), Some("second"));
    }

    #[test]
    fn test_description_own_text_fallback() {
        let root = elem("module", "m").with_child(AttributedElement::new("description").with_text("plain"));

        let tree = Parser::new().build_tree(&root).unwrap();
        assert_eq!(tree.description.as_deref(), Some("plain"));
    }

    #[test]
    fn test_invalid_root() {
        let result = Parser::new().build_tree(&typed_leaf("x", "uint8"));
        assert!(matches!(result, Err(Error::InvalidRoot { .. })));

        let result = Parser::new().build_tree(&elem("submodule", "s"));
        assert!(matches!(result, Err(Error::InvalidRoot { .. })));
    }

    #[test]
    fn test_children_under_leaf_dropped() {
        let root = elem("module", "m").with_child(typed_leaf("a", "uint8").with_child(typed_leaf("b", "uint8")));

        let tree = Parser::new().build_tree(&root).unwrap();
        assert!(tree.children()[0].children().is_empty());
    }

    #[test]
    fn test_parse_yin_string() {
        let tree = Parser::new()
            .parse_yin(r#"<module name="m"><container name="c"/></module>"#)
            .unwrap();
        assert_eq!(tree.children()[0].path, "/m/c/");
    }
}
