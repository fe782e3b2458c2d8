//! Engine entry point

use crate::composer::Composer;
use crate::options::ComposeOptions;
use crate::schema::{LayoutRegistry, PrintableElement};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Non-fatal finding reported alongside composed output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Warning {
    /// The requested top-level layout is not in the registry
    MissingLayout { name: String },
    /// A sectionref pointed at a layout that is not in the registry
    MissingSection { name: String },
}

impl Warning {
    /// Whether the host should surface this warning to the user
    ///
    /// Only a missing top-level layout is. A missing section just means the
    /// section does not apply to this document.
    pub fn is_reportable(&self) -> bool {
        matches!(self, Warning::MissingLayout { .. })
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingLayout { name } => write!(f, "Layout '{name}' not found"),
            Warning::MissingSection { name } => write!(f, "Section '{name}' not found"),
        }
    }
}

/// Composed document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Printable elements in print order
    pub elements: Vec<PrintableElement>,

    /// Non-fatal findings
    #[serde(default)]
    pub warnings: Vec<Warning>,
}

impl Receipt {
    /// Plain-text preview, one line per top-level element
    ///
    /// Row children are joined with a space; passthrough elements are left
    /// out.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for line in self.elements.iter().filter_map(preview_line) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

fn preview_line(element: &PrintableElement) -> Option<String> {
    match element {
        PrintableElement::Text(t) => Some(t.text.clone()),
        PrintableElement::Barcode(b) => Some(format!(
            "[barcode {}: {}]",
            b.barcode_type.as_deref().unwrap_or("-"),
            b.code
        )),
        PrintableElement::Row(r) => Some(
            r.children
                .iter()
                .filter_map(preview_line)
                .collect::<Vec<_>>()
                .join(" "),
        ),
        PrintableElement::Other(_) => None,
    }
}

/// Build a receipt from the layout `name` with default options
///
/// A name missing from `registry` yields an empty receipt carrying a
/// [`Warning::MissingLayout`].
pub fn build_receipt(name: &str, registry: &LayoutRegistry, data: &Value) -> Result<Receipt> {
    build_receipt_with(name, registry, data, ComposeOptions::default())
}

/// Build a receipt from the layout `name`
pub fn build_receipt_with(
    name: &str,
    registry: &LayoutRegistry,
    data: &Value,
    options: ComposeOptions,
) -> Result<Receipt> {
    let Some((key, layout)) = registry.get_key_value(name) else {
        tracing::warn!(layout = name, "layout not found in registry");
        return Ok(Receipt {
            elements: Vec::new(),
            warnings: vec![Warning::MissingLayout {
                name: name.to_string(),
            }],
        });
    };

    let mut composer = Composer::new(registry).with_options(options);
    let elements = composer.compose_named(key, layout, data)?;

    Ok(Receipt {
        elements,
        warnings: composer.into_warnings(),
    })
}
