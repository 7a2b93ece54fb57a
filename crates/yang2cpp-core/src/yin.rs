//! YIN reader
//!
//! Streams a YIN document (the XML rendering of a YANG module) into an
//! [`AttributedElement`] tree. Namespace prefixes are stripped from tag and
//! attribute names and namespace declarations are not kept as attributes.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesRef, BytesStart, Event};

use crate::element::AttributedElement;
use crate::error::{Error, Result};

/// Read and parse a YIN file
pub fn read_yin_file(path: impl AsRef<Path>) -> Result<AttributedElement> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_yin(&content)
}

/// Parse a YIN document into its root element
pub fn parse_yin(xml: &str) -> Result<AttributedElement> {
    let mut reader = Reader::from_str(xml);

    let mut open: Vec<OpenElement> = Vec::new();
    let mut root: Option<AttributedElement> = None;

    loop {
        match reader.read_event() {
            Err(e) => {
                return Err(Error::xml(format!(
                    "at byte {}: {}",
                    reader.error_position(),
                    e
                )));
            }
            Ok(Event::Start(start)) => open.push(OpenElement::from_start(&start)?),
            Ok(Event::Empty(start)) => {
                let element = OpenElement::from_start(&start)?.finish();
                attach(element, &mut open, &mut root)?;
            }
            Ok(Event::End(_)) => {
                let element = open
                    .pop()
                    .ok_or_else(|| Error::xml("closing tag without matching opening tag"))?
                    .finish();
                attach(element, &mut open, &mut root)?;
            }
            Ok(Event::Text(text)) => {
                if let Some(current) = open.last_mut() {
                    let decoded = text.decode().map_err(|e| Error::xml(e.to_string()))?;
                    current.text.push_str(&decoded);
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(current) = open.last_mut() {
                    let decoded = data.decode().map_err(|e| Error::xml(e.to_string()))?;
                    current.text.push_str(&decoded);
                }
            }
            Ok(Event::GeneralRef(reference)) => {
                if let Some(current) = open.last_mut() {
                    current.text.push_str(&resolve_reference(&reference)?);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(Error::xml(format!(
            "unexpected end of document inside <{}>",
            unclosed.element.tag
        )));
    }

    root.ok_or_else(|| Error::xml("document has no root element"))
}

/// Element whose closing tag has not been seen yet
struct OpenElement {
    element: AttributedElement,
    text: String,
}

impl OpenElement {
    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let tag = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut element = AttributedElement::new(tag);

        for attr in start.attributes() {
            let attr = attr.map_err(|e| Error::xml(e.to_string()))?;
            let qualified = attr.key.as_ref();
            if qualified == b"xmlns" || qualified.starts_with(b"xmlns:") {
                continue;
            }
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| Error::xml(e.to_string()))?
                .into_owned();
            element.attributes.push((key, value));
        }

        Ok(Self {
            element,
            text: String::new(),
        })
    }

    fn finish(mut self) -> AttributedElement {
        let trimmed = self.text.trim();
        if !trimmed.is_empty() {
            self.element.text = Some(trimmed.to_string());
        }
        self.element
    }
}

fn attach(
    element: AttributedElement,
    open: &mut [OpenElement],
    root: &mut Option<AttributedElement>,
) -> Result<()> {
    match open.last_mut() {
        Some(parent) => parent.element.children.push(element),
        None if root.is_some() => {
            return Err(Error::xml(format!(
                "second root element <{}>",
                element.tag
            )));
        }
        None => *root = Some(element),
    }
    Ok(())
}

fn resolve_reference(reference: &BytesRef<'_>) -> Result<String> {
    if let Some(ch) = reference
        .resolve_char_ref()
        .map_err(|e| Error::xml(e.to_string()))?
    {
        return Ok(ch.to_string());
    }

    let name = reference.decode().map_err(|e| Error::xml(e.to_string()))?;
    match quick_xml::escape::resolve_predefined_entity(&name) {
        Some(resolved) => Ok(resolved.to_string()),
        None => Err(Error::xml(format!("unknown entity reference &{};", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENSOR_YIN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<module name="sensor"
        xmlns="urn:ietf:params:xml:ns:yang:yin:1"
        xmlns:s="urn:example:sensor">
  <namespace uri="urn:example:sensor"/>
  <prefix value="s"/>
  <description>
    <text>Sensor model</text>
  </description>
  <leaf name="id">
    <type name="uint32"/>
  </leaf>
</module>
"#;

    #[test]
    fn test_parse_module_structure() {
        let root = parse_yin(SENSOR_YIN).unwrap();

        assert_eq!(root.tag, "module");
        assert_eq!(root.attribute("name"), Some("sensor"));
        let tags: Vec<&str> = root.children.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, vec!["namespace", "prefix", "description", "leaf"]);
    }

    #[test]
    fn test_namespace_declarations_are_not_attributes() {
        let root = parse_yin(SENSOR_YIN).unwrap();
        assert_eq!(root.attributes.len(), 1);
    }

    #[test]
    fn test_text_is_trimmed() {
        let root = parse_yin(SENSOR_YIN).unwrap();
        let text = root.child("description").unwrap().child("text").unwrap();
        assert_eq!(text.text.as_deref(), Some("Sensor model"));
        assert!(root.text.is_none());
    }

    #[test]
    fn test_prefixed_tags_are_stripped() {
        let root = parse_yin(
            r#"<yin:module xmlns:yin="urn:ietf:params:xml:ns:yang:yin:1" name="m"><yin:container name="c"/></yin:module>"#,
        )
        .unwrap();

        assert_eq!(root.tag, "module");
        assert_eq!(root.children[0].tag, "container");
    }

    #[test]
    fn test_entity_references_are_resolved() {
        let root = parse_yin(
            r#"<description><text>rate &amp; period &lt;ms&gt; &#65;</text></description>"#,
        )
        .unwrap();
        assert_eq!(
            root.children[0].text.as_deref(),
            Some("rate & period <ms> A")
        );
    }

    #[test]
    fn test_attribute_values_are_unescaped() {
        let root = parse_yin(r#"<augment target-node="/a:b/c-d" note="x &amp; y"/>"#).unwrap();
        assert_eq!(root.attribute("target-node"), Some("/a:b/c-d"));
        assert_eq!(root.attribute("note"), Some("x & y"));
    }

    #[test]
    fn test_mismatched_tags_error() {
        assert!(parse_yin("<module><leaf></module>").is_err());
    }

    #[test]
    fn test_unclosed_document_error() {
        let err = parse_yin("<module><leaf/>").unwrap_err();
        assert!(err.to_string().contains("module"));
    }

    #[test]
    fn test_empty_document_error() {
        let err = parse_yin("   ").unwrap_err();
        assert!(err.to_string().contains("no root element"));
    }

    #[test]
    fn test_read_yin_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sensor.yin");
        std::fs::write(&path, SENSOR_YIN).unwrap();

        let root = read_yin_file(&path).unwrap();
        assert_eq!(root.attribute("name"), Some("sensor"));
    }
}
