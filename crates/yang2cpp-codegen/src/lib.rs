//! yang2cpp Code Generation
//!
//! This crate turns a YANG module into a C++ object model.
//!
//! # Pipeline Overview
//!
//! ```text
//! ┌─────────┐     ┌─────────┐     ┌─────────┐     ┌─────────┐
//! │  YANG   │────▶│   YIN   │────▶│ Schema  │────▶│  C++    │
//! │ Module  │     │(Normal.)│     │  Tree   │     │ .h/.cc  │
//! └─────────┘     └─────────┘     └─────────┘     └─────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use yang2cpp_codegen::{CompileOptions, Compiler, PyangNormalizer};
//!
//! let compiler = Compiler::new(CompileOptions::default(), Box::new(PyangNormalizer::default()));
//! let written = compiler.run("modules/sensor.yang").await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod compiler;
pub mod dump;
pub mod emit;
pub mod error;
pub mod generator;
pub mod ir;
pub mod naming;
pub mod normalizer;
pub mod parser;
pub mod scaffolding;

pub use compiler::{CompileOptions, Compiler};
pub use error::{Error, Result};
pub use generator::{GeneratedSources, Generator};
pub use ir::{NodeKind, SchemaNode};
pub use normalizer::{PyangNormalizer, SchemaNormalizer, YinNormalizer};
pub use parser::Parser;
