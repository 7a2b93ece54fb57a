//! Debug views of a schema tree

use crate::error::Result;
use crate::ir::{NodeKind, SchemaNode};

const INDENT: &str = "|   ";

/// Indented text outline of `root`, one block per node
pub fn dump_text(root: &SchemaNode) -> String {
    let mut out = String::new();
    write_node(&mut out, root, "");
    out
}

/// Pretty-printed JSON of `root`
pub fn dump_json(root: &SchemaNode) -> Result<String> {
    Ok(serde_json::to_string_pretty(root)?)
}

fn write_node(out: &mut String, node: &SchemaNode, prefix: &str) {
    let heading = match &node.kind {
        NodeKind::Module(_) => format!("Module {}", node.name),
        NodeKind::Container(_) => format!("Container {}", node.name),
        NodeKind::List(list) => {
            let key_type = match list.key.as_deref().map(|key| &key.kind) {
                Some(NodeKind::Leaf(leaf)) => leaf.value_type.as_str(),
                _ => "?",
            };
            format!("List {} [ {key_type} {} ]", node.name, list.key_name)
        }
        NodeKind::Augment(_) => format!("Augment {}", node.path),
        NodeKind::Leaf(leaf) => {
            format!("Leaf {}\n{prefix}{INDENT}Type: {}", node.name, leaf.value_type)
        }
    };
    out.push_str(&format!("{prefix}{heading}\n"));

    if !matches!(node.kind, NodeKind::Module(_)) {
        out.push_str(&format!("{prefix}{INDENT}Path: {}\n", node.path));
    }

    let nested = format!("{prefix}{INDENT}");
    for child in node.children() {
        write_node(out, child, &nested);
    }

    out.push_str(&format!("{prefix}'\n"));
}
