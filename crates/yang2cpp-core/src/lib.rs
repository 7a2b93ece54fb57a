//! yang2cpp Core Library
//!
//! This crate provides the input side of yang2cpp:
//! - The attributed element tree produced by schema normalization
//! - A YIN (XML) reader for that tree
//! - Generator configuration files
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    YANG     │────▶│    YIN      │────▶│ Attributed  │
//! │   (pyang)   │     │   (XML)     │     │    Tree     │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use yang2cpp_core::parse_yin;
//!
//! let root = parse_yin(r#"<module name="sensor"/>"#)?;
//! assert_eq!(root.attribute("name"), Some("sensor"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod element;
pub mod error;
pub mod yin;

pub use config::Config;
pub use element::AttributedElement;
pub use error::{Error, Result};
pub use yin::{parse_yin, read_yin_file};
