//! Layout JSON schema types

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;

/// Embedded JSON Schema for layout validation
/// This schema can be used by IDEs and validators for layout authoring
pub const LAYOUT_SCHEMA: &str = include_str!("../data/layout-schema.json");

/// Named layouts, supplied wholesale by the caller
pub type LayoutRegistry = HashMap<String, Layout>;

/// A declarative section of a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Rows in print order
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Layout {
    /// Create a layout from rows
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

/// Text alignment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Layout row (tagged union on `type`)
///
/// Unrecognized `type` values are kept verbatim in [`Row::Other`] and copied
/// to the output untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// Text line (`"type": "text"`)
    Text(TextRow),

    /// Barcode (`"type": "barcode"`)
    Barcode(BarcodeRow),

    /// Horizontal group of child rows (`"type": "row"`)
    Group(GroupRow),

    /// Child rows repeated per list item (`"type": "iterator"`)
    Iterator(IteratorRow),

    /// Another named layout inlined here (`"type": "sectionref"`)
    SectionRef(SectionRefRow),

    /// Any other row, passed through as-is
    Other(Value),
}

/// Text row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRow {
    /// Template string
    #[serde(default)]
    pub text: String,

    /// Text alignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,

    /// Flex weight inside a row group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex: Option<f64>,
}

/// Barcode row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarcodeRow {
    /// Template string for the encoded value
    #[serde(default)]
    pub code: String,

    /// Symbology tag (e.g. `CODE128`, `EAN13`, `QR`)
    #[serde(rename = "barcodeType", alias = "barcode_type")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode_type: Option<String>,
}

/// Row group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupRow {
    #[serde(default)]
    pub children: Vec<Row>,
}

/// Iterator row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IteratorRow {
    /// Dotted path to the list in the current data context
    pub path: String,

    /// Rows composed once per list item, with the item as data context
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// Section reference row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionRefRow {
    /// Name of the referenced layout
    #[serde(alias = "name", alias = "ref")]
    pub section: String,
}

/// Composed output element (tagged union on `type`)
#[derive(Debug, Clone, PartialEq)]
pub enum PrintableElement {
    Text(TextElement),
    Barcode(BarcodeElement),
    Row(RowElement),
    /// Passthrough copy of an unrecognized row
    Other(Value),
}

/// Text element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex: Option<f64>,
}

/// Barcode element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarcodeElement {
    pub code: String,

    #[serde(rename = "barcodeType", alias = "barcode_type")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode_type: Option<String>,
}

/// Row element wrapping its composed children
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowElement {
    #[serde(default)]
    pub children: Vec<PrintableElement>,
}

impl PrintableElement {
    /// Create a plain text element
    pub fn text(text: impl Into<String>) -> Self {
        PrintableElement::Text(TextElement {
            text: text.into(),
            ..TextElement::default()
        })
    }

    /// Create a row element
    pub fn row(children: Vec<PrintableElement>) -> Self {
        PrintableElement::Row(RowElement { children })
    }

    /// Text content if this is a text element
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PrintableElement::Text(t) => Some(&t.text),
            _ => None,
        }
    }
}

// === Serde plumbing for the open-ended tagged unions ===

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedRow<'a> {
    Text(&'a TextRow),
    Barcode(&'a BarcodeRow),
    Row(&'a GroupRow),
    Iterator(&'a IteratorRow),
    SectionRef(&'a SectionRefRow),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedElement<'a> {
    Text(&'a TextElement),
    Barcode(&'a BarcodeElement),
    Row(&'a RowElement),
}

fn type_tag(raw: &Value) -> String {
    raw.get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn from_raw<T: DeserializeOwned, E: serde::de::Error>(raw: Value) -> Result<T, E> {
    T::deserialize(raw).map_err(E::custom)
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Row::Text(r) => TaggedRow::Text(r).serialize(serializer),
            Row::Barcode(r) => TaggedRow::Barcode(r).serialize(serializer),
            Row::Group(r) => TaggedRow::Row(r).serialize(serializer),
            Row::Iterator(r) => TaggedRow::Iterator(r).serialize(serializer),
            Row::SectionRef(r) => TaggedRow::SectionRef(r).serialize(serializer),
            Row::Other(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        if !raw.is_object() {
            return Err(D::Error::custom("layout row must be an object"));
        }

        match type_tag(&raw).as_str() {
            "text" => from_raw(raw).map(Row::Text),
            "barcode" => from_raw(raw).map(Row::Barcode),
            "row" => from_raw(raw).map(Row::Group),
            "iterator" => from_raw(raw).map(Row::Iterator),
            "sectionref" => from_raw(raw).map(Row::SectionRef),
            _ => Ok(Row::Other(raw)),
        }
    }
}

impl Serialize for PrintableElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PrintableElement::Text(e) => TaggedElement::Text(e).serialize(serializer),
            PrintableElement::Barcode(e) => TaggedElement::Barcode(e).serialize(serializer),
            PrintableElement::Row(e) => TaggedElement::Row(e).serialize(serializer),
            PrintableElement::Other(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for PrintableElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        match type_tag(&raw).as_str() {
            "text" => from_raw(raw).map(PrintableElement::Text),
            "barcode" => from_raw(raw).map(PrintableElement::Barcode),
            "row" => from_raw(raw).map(PrintableElement::Row),
            _ => Ok(PrintableElement::Other(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_text_row() {
        let json = r#"{
            "type": "text",
            "text": "Total {{total}}",
            "align": "right",
            "flex": 2
        }"#;

        let row: Row = serde_json::from_str(json).unwrap();

        match row {
            Row::Text(r) => {
                assert_eq!(r.text, "Total {{total}}");
                assert_eq!(r.align, Some(Align::Right));
                assert_eq!(r.flex, Some(2.0));
            }
            _ => panic!("Expected TextRow"),
        }
    }

    #[test]
    fn test_parse_barcode_row() {
        let row: Row = serde_json::from_value(json!({
            "type": "barcode",
            "code": "{{receiptNo}}",
            "barcodeType": "CODE128"
        }))
        .unwrap();

        assert_eq!(
            row,
            Row::Barcode(BarcodeRow {
                code: "{{receiptNo}}".into(),
                barcode_type: Some("CODE128".into()),
            })
        );
    }

    #[test]
    fn test_parse_nested_rows() {
        let row: Row = serde_json::from_value(json!({
            "type": "iterator",
            "path": "items",
            "rows": [
                { "type": "row", "children": [
                    { "type": "text", "text": "{{name}}" },
                    { "type": "sectionref", "section": "price" }
                ]}
            ]
        }))
        .unwrap();

        let Row::Iterator(it) = row else {
            panic!("Expected IteratorRow");
        };
        assert_eq!(it.path, "items");
        let Row::Group(group) = &it.rows[0] else {
            panic!("Expected GroupRow");
        };
        assert_eq!(group.children.len(), 2);
        assert_eq!(
            group.children[1],
            Row::SectionRef(SectionRefRow {
                section: "price".into()
            })
        );
    }

    #[test]
    fn test_sectionref_name_alias() {
        let row: Row =
            serde_json::from_value(json!({ "type": "sectionref", "name": "footer" })).unwrap();
        assert_eq!(
            row,
            Row::SectionRef(SectionRefRow {
                section: "footer".into()
            })
        );
    }

    #[test]
    fn test_unknown_type_is_passthrough() {
        let raw = json!({ "type": "cut", "partial": true });
        let row: Row = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(row, Row::Other(raw.clone()));
        assert_eq!(serde_json::to_value(&row).unwrap(), raw);
    }

    #[test]
    fn test_row_serializes_with_tag() {
        let row = Row::Group(GroupRow {
            children: vec![Row::Text(TextRow {
                text: "x".into(),
                ..TextRow::default()
            })],
        });
        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!({ "type": "row", "children": [ { "type": "text", "text": "x" } ] })
        );
    }

    #[test]
    fn test_non_object_row_is_rejected() {
        let result: Result<Row, _> = serde_json::from_value(json!("text"));
        assert!(result.is_err());
    }

    #[test]
    fn test_element_serialization() {
        let element = PrintableElement::row(vec![
            PrintableElement::text("A1"),
            PrintableElement::Barcode(BarcodeElement {
                code: "123".into(),
                barcode_type: Some("EAN13".into()),
            }),
        ]);

        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "row",
                "children": [
                    { "type": "text", "text": "A1" },
                    { "type": "barcode", "code": "123", "barcodeType": "EAN13" }
                ]
            })
        );

        let back: PrintableElement = serde_json::from_value(value).unwrap();
        assert_eq!(back, element);
    }
}
