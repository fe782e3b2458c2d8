//! Receipt Template - layout composition engine
//!
//! This crate provides:
//! - Layout JSON schema types (rows, printable elements, registry)
//! - Dotted-path resolution against a data object
//! - `{{ path | op:arg }}` placeholder expansion with a formatting pipeline
//! - Document composition (text, barcode, row, iterator, sectionref)
//!
//! # Example
//!
//! ```
//! use receipt_template::{build_receipt, parse_registry, PrintableElement};
//! use serde_json::json;
//!
//! let registry = parse_registry(r#"{
//!     "header": { "rows": [ { "type": "text", "text": "Hello {{name|default:'Guest'}}" } ] }
//! }"#)?;
//!
//! let receipt = build_receipt("header", &registry, &json!({ "name": "Ana" }))?;
//! match &receipt.elements[0] {
//!     PrintableElement::Text(t) => assert_eq!(t.text, "Hello Ana"),
//!     other => panic!("unexpected element {other:?}"),
//! }
//! # Ok::<(), receipt_template::TemplateError>(())
//! ```

mod composer;
mod options;
pub mod parser;
pub mod pipeline;
pub mod placeholder;
mod receipt;
mod schema;

pub use composer::{compose, Composer};
pub use options::{ComposeOptions, EmptyValuePolicy, UNCHECKED_DEPTH_LIMIT};
pub use parser::{parse_layout, parse_registry, resolve_path};
pub use placeholder::{expand, TemplateString};
pub use receipt::{build_receipt, build_receipt_with, Receipt, Warning};
pub use schema::*;

use thiserror::Error;

/// Errors that can occur during layout composition
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to parse layout: {0}")]
    ParseError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Cyclic section reference: {}", .chain.join(" -> "))]
    CyclicReference { chain: Vec<String> },

    #[error("Layout nesting exceeds the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
