//! Document composition

use crate::options::ComposeOptions;
use crate::parser::resolve_path;
use crate::placeholder::expand;
use crate::receipt::Warning;
use crate::schema::*;
use crate::{Result, TemplateError};
use serde_json::Value;

/// Walks layout rows and produces printable elements
///
/// Expansion order is depth-first and follows declared row order; iterator
/// and sectionref output is spliced in place of the originating row.
pub struct Composer<'a> {
    /// Layouts available to sectionref rows
    registry: &'a LayoutRegistry,
    /// Composition options
    options: ComposeOptions,
    /// Sections currently being expanded, outermost first
    active: Vec<&'a str>,
    /// Non-fatal findings collected along the way
    warnings: Vec<Warning>,
}

impl<'a> Composer<'a> {
    /// Create a composer over a registry
    pub fn new(registry: &'a LayoutRegistry) -> Self {
        Self {
            registry,
            options: ComposeOptions::default(),
            active: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Set composition options
    pub fn with_options(mut self, options: ComposeOptions) -> Self {
        self.options = options;
        self
    }

    /// Compose an anonymous layout against `data`
    pub fn compose(&mut self, layout: &'a Layout, data: &Value) -> Result<Vec<PrintableElement>> {
        self.compose_rows(&layout.rows, data, 0)
    }

    /// Compose a named layout, tracking it for cycle detection
    pub fn compose_named(
        &mut self,
        name: &'a str,
        layout: &'a Layout,
        data: &Value,
    ) -> Result<Vec<PrintableElement>> {
        self.enter(name)?;
        let result = self.compose_rows(&layout.rows, data, 0);
        self.active.pop();
        result
    }

    /// Warnings collected so far
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Consume the composer, keeping its warnings
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }

    fn compose_rows(
        &mut self,
        rows: &'a [Row],
        data: &Value,
        depth: usize,
    ) -> Result<Vec<PrintableElement>> {
        if let Some(limit) = self.options.depth_limit() {
            if depth > limit {
                return Err(TemplateError::DepthLimitExceeded { limit });
            }
        }

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            self.compose_row(row, data, depth, &mut out)?;
        }
        Ok(out)
    }

    fn compose_row(
        &mut self,
        row: &'a Row,
        data: &Value,
        depth: usize,
        out: &mut Vec<PrintableElement>,
    ) -> Result<()> {
        let policy = self.options.empty_value_policy;

        match row {
            Row::Text(r) => out.push(PrintableElement::Text(TextElement {
                text: expand(&r.text, data, policy),
                align: r.align,
                flex: r.flex,
            })),
            Row::Barcode(r) => out.push(PrintableElement::Barcode(BarcodeElement {
                code: expand(&r.code, data, policy),
                barcode_type: r.barcode_type.clone(),
            })),
            Row::Group(r) => {
                let children = self.compose_rows(&r.children, data, depth + 1)?;
                out.push(PrintableElement::row(children));
            }
            Row::Iterator(r) => {
                let items: &[Value] = match resolve_path(data, &r.path) {
                    Some(Value::Array(items)) => items.as_slice(),
                    _ => {
                        tracing::debug!(path = %r.path, "iterator source is not a list");
                        &[]
                    }
                };
                for item in items {
                    out.extend(self.compose_rows(&r.rows, item, depth + 1)?);
                }
            }
            Row::SectionRef(r) => self.compose_section(&r.section, data, depth, out)?,
            Row::Other(raw) => out.push(PrintableElement::Other(raw.clone())),
        }

        Ok(())
    }

    fn compose_section(
        &mut self,
        name: &'a str,
        data: &Value,
        depth: usize,
        out: &mut Vec<PrintableElement>,
    ) -> Result<()> {
        let Some(layout) = self.registry.get(name) else {
            tracing::debug!(section = name, "skipping reference to unknown section");
            self.warnings.push(Warning::MissingSection {
                name: name.to_string(),
            });
            return Ok(());
        };

        self.enter(name)?;
        let result = self.compose_rows(&layout.rows, data, depth + 1);
        self.active.pop();
        out.extend(result?);
        Ok(())
    }

    fn enter(&mut self, name: &'a str) -> Result<()> {
        if self.options.detect_cycles && self.active.contains(&name) {
            let mut chain: Vec<String> = self.active.iter().map(|s| s.to_string()).collect();
            chain.push(name.to_string());
            return Err(TemplateError::CyclicReference { chain });
        }
        self.active.push(name);
        Ok(())
    }
}

/// Compose `layout` against `data` with default options
///
/// Sectionref rows resolve against `registry`. Warnings are discarded; use
/// [`Composer`] or [`crate::build_receipt`] to keep them.
pub fn compose(
    layout: &Layout,
    data: &Value,
    registry: &LayoutRegistry,
) -> Result<Vec<PrintableElement>> {
    Composer::new(registry).compose(layout, data)
}
