//! `{{ path | op:arg | op:arg }}` placeholder expansion

use crate::options::EmptyValuePolicy;
use crate::parser::resolve_path;
use crate::pipeline::{self, Operator, Working};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{(.*?)\}\}").expect("placeholder pattern is valid"))
}

/// A single `{{ ... }}` token
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    /// Full matched text, delimiters included
    pub token: String,
    /// Dotted data path
    pub path: String,
    /// Pipeline stages in declared order
    pub operators: Vec<Operator>,
}

impl Placeholder {
    /// Parse the text between the delimiters of `token`
    pub fn parse(token: &str, inner: &str) -> Self {
        let mut stages = inner.split('|');
        let path = stages.next().unwrap_or_default().trim().to_string();
        let operators = stages
            .map(str::trim)
            .filter(|stage| !stage.is_empty())
            .map(Operator::parse)
            .collect();

        Self {
            token: token.to_string(),
            path,
            operators,
        }
    }

    /// Resolve and format against `data`
    ///
    /// An unresolved path seeds the pipeline with the path text itself. A
    /// final value that prints empty is replaced according to `policy`.
    pub fn evaluate(&self, data: &Value, policy: EmptyValuePolicy) -> String {
        let seed = match resolve_path(data, &self.path) {
            Some(value) => Working::Value(value),
            None => Working::Missing(&self.path),
        };

        let text = pipeline::run(&self.operators, seed).to_text().into_owned();
        if !text.is_empty() {
            return text;
        }

        match policy {
            EmptyValuePolicy::KeepLiteralToken => self.token.clone(),
            EmptyValuePolicy::EmitEmptyString => String::new(),
        }
    }
}

/// Piece of a parsed template
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// A template string split into literal text and placeholders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateString {
    segments: Vec<Segment>,
}

impl TemplateString {
    /// Split `template` into segments
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut last = 0;

        for caps in token_pattern().captures_iter(template) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Literal(template[last..whole.start()].to_string()));
            }
            segments.push(Segment::Placeholder(Placeholder::parse(
                whole.as_str(),
                inner.as_str(),
            )));
            last = whole.end();
        }

        if last < template.len() {
            segments.push(Segment::Literal(template[last..].to_string()));
        }

        Self { segments }
    }

    /// Parsed segments in order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when the template contains no placeholders
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Substitute every placeholder against `data`
    pub fn render(&self, data: &Value, policy: EmptyValuePolicy) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(p) => out.push_str(&p.evaluate(data, policy)),
            }
        }
        out
    }
}

/// Expand every `{{ ... }}` token of `template` against `data`
pub fn expand(template: &str, data: &Value, policy: EmptyValuePolicy) -> String {
    TemplateString::parse(template).render(data, policy)
}
