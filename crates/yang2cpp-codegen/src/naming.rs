//! Naming and type transform
//!
//! Pure functions mapping schema identifiers to C++ identifiers and schema
//! primitive types to C++ types.

use crate::error::{Error, Result};

/// Schema primitive types and their C++ counterparts
pub const PRIMITIVE_TYPES: &[(&str, &str)] = &[
    ("int8", "int8_t"),
    ("uint8", "uint8_t"),
    ("int16", "int16_t"),
    ("uint16", "uint16_t"),
    ("int32", "int32_t"),
    ("uint32", "uint32_t"),
    ("string", "std::string"),
];

/// Class name for a schema node name: `interface-state` → `InterfaceState`
///
/// Not injective: `a-b` and `a_b` both map to `AB`.
pub fn class_name_of(schema_name: &str) -> String {
    schema_name.split(['-', '_']).map(title_case).collect()
}

/// Member variable name for a schema node name: `Max-Rate` → `max_rate_`
pub fn variable_name_of(schema_name: &str) -> String {
    let mut name = schema_name.to_lowercase().replace('-', "_");
    name.push('_');
    name
}

/// C++ type for a schema primitive type
///
/// `path` is the location of the leaf being typed and is only used for the
/// error report.
pub fn primitive_type_of(type_name: &str, path: &str) -> Result<&'static str> {
    PRIMITIVE_TYPES
        .iter()
        .find(|(schema, _)| *schema == type_name)
        .map(|(_, cpp)| *cpp)
        .ok_or_else(|| Error::UnknownPrimitiveType {
            type_name: type_name.to_string(),
            path: path.to_string(),
        })
}

/// Class name for an augment target: `/if:interfaces/if:interface` →
/// `If_Interfaces__If_Interface`
///
/// A double underscore marks a path segment boundary.
pub fn augment_slug(target: &str) -> String {
    let relative = target.strip_prefix('/').unwrap_or(target);
    title_case(relative)
        .replace(':', "_")
        .replace('-', "_")
        .replace('/', "__")
}

/// Upper-case the first letter of every run of letters, lower-case the rest
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }

    out
}
