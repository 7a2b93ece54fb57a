//! Attributed element tree
//!
//! The normalized form of a schema document: a tree of tagged elements,
//! each carrying ordered attributes, optional character data and ordered
//! children. This is the only shape the code generator reads.

use serde::{Deserialize, Serialize};

/// A single element of the normalized schema document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributedElement {
    /// Local tag name (namespace prefix removed)
    pub tag: String,

    /// Attributes in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,

    /// Trimmed character data directly inside this element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Child elements in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AttributedElement>,
}

impl AttributedElement {
    /// Create an element with no attributes, text or children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Builder-style text setter
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder-style child appender
    pub fn with_child(mut self, child: AttributedElement) -> Self {
        self.children.push(child);
        self
    }

    /// First value of the attribute named `key`
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First immediate child with the given tag
    pub fn child(&self, tag: &str) -> Option<&AttributedElement> {
        self.children.iter().find(|c| c.tag == tag)
    }
}
