//! Placeholder operator pipeline
//!
//! Operators are written `name:arg,arg` and applied left to right:
//!
//! | Operator                 | Effect                                          |
//! |--------------------------|-------------------------------------------------|
//! | `default:val`            | `val` when the value is missing or empty        |
//! | `padLeft:width[,char]`   | left-pad to `width` columns (space by default)  |
//! | `padRight:width[,char]`  | right-pad to `width` columns                    |
//! | `fit:width[,align]`      | exactly `width` columns, truncating or padding  |
//! | `format:datetime`        | date/time rendering (`date` and `time` as well) |
//!
//! Unknown operators and operators with unusable arguments leave the value
//! untouched. Widths are capped at [`MAX_COLUMN_WIDTH`].

use crate::parser::value_to_string;
use receipt_text::{
    fit, format_datetime, from_epoch_millis, pad_left, pad_right, parse_datetime,
    DateTimeStyle, FitAlign,
};
use serde_json::Value;
use std::borrow::Cow;

/// Widest column count an operator will pad or fit to
pub const MAX_COLUMN_WIDTH: usize = 1024;

/// Value flowing through the pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum Working<'a> {
    /// Path did not resolve; prints as the path text itself
    Missing(&'a str),
    /// Resolved data value
    Value(&'a Value),
    /// Output of a previous operator
    Text(String),
}

impl Working<'_> {
    /// Printable form of the value
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Working::Missing(path) => Cow::Borrowed(path),
            Working::Value(value) => Cow::Owned(value_to_string(value)),
            Working::Text(text) => Cow::Borrowed(text),
        }
    }

    /// Missing, or prints as an empty string
    pub fn is_blank(&self) -> bool {
        match self {
            Working::Missing(_) => true,
            _ => self.to_text().is_empty(),
        }
    }
}

/// A single parsed operator
#[derive(Debug, Clone, PartialEq)]
pub enum Operator {
    Default(String),
    PadLeft { width: usize, fill: char },
    PadRight { width: usize, fill: char },
    Fit { width: usize, align: FitAlign },
    Format(DateTimeStyle),
    /// Unrecognized or malformed operator, kept for diagnostics
    Noop(String),
}

impl Operator {
    /// Parse one `name:arg,arg` pipeline stage
    pub fn parse(stage: &str) -> Self {
        let stage = stage.trim();
        let (name, raw_args) = match stage.split_once(':') {
            Some((name, args)) => (name.trim(), Some(args.trim())),
            None => (stage, None),
        };
        let args: Vec<&str> = raw_args
            .map(|a| a.split(',').map(|s| unquote(s.trim())).collect())
            .unwrap_or_default();

        let op = match name {
            "default" => Some(Operator::Default(
                raw_args.map(unquote).unwrap_or_default().to_string(),
            )),
            "padLeft" => parse_width(&args).map(|width| Operator::PadLeft {
                width,
                fill: fill_char(args.get(1)),
            }),
            "padRight" => parse_width(&args).map(|width| Operator::PadRight {
                width,
                fill: fill_char(args.get(1)),
            }),
            "fit" => parse_width(&args).map(|width| Operator::Fit {
                width,
                align: args
                    .get(1)
                    .and_then(|a| FitAlign::from_name(a))
                    .unwrap_or_default(),
            }),
            "format" => args
                .first()
                .and_then(|a| DateTimeStyle::from_name(a))
                .map(Operator::Format),
            _ => None,
        };

        op.unwrap_or_else(|| {
            tracing::debug!(operator = stage, "ignoring unrecognized placeholder operator");
            Operator::Noop(stage.to_string())
        })
    }

    /// Apply the operator to the current value
    pub fn apply<'a>(&self, value: Working<'a>) -> Working<'a> {
        match self {
            Operator::Default(fallback) => {
                if value.is_blank() {
                    Working::Text(fallback.clone())
                } else {
                    value
                }
            }
            Operator::PadLeft { width, fill } => {
                Working::Text(pad_left(&value.to_text(), *width, *fill))
            }
            Operator::PadRight { width, fill } => {
                Working::Text(pad_right(&value.to_text(), *width, *fill))
            }
            Operator::Fit { width, align } => Working::Text(fit(&value.to_text(), *width, *align)),
            Operator::Format(style) => match parse_temporal(&value) {
                Some(dt) => Working::Text(format_datetime(&dt, *style)),
                None => value,
            },
            Operator::Noop(_) => value,
        }
    }
}

/// Run `operators` over `seed` in declared order
pub fn run<'a>(operators: &[Operator], seed: Working<'a>) -> Working<'a> {
    operators.iter().fold(seed, |value, op| op.apply(value))
}

fn parse_temporal(value: &Working<'_>) -> Option<chrono::NaiveDateTime> {
    match value {
        Working::Missing(_) => None,
        Working::Value(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(|millis| from_epoch_millis(millis).ok()),
        other => parse_datetime(&other.to_text()).ok(),
    }
}

fn parse_width(args: &[&str]) -> Option<usize> {
    args.first()
        .and_then(|w| w.parse::<usize>().ok())
        .map(|w| w.min(MAX_COLUMN_WIDTH))
}

fn fill_char(arg: Option<&&str>) -> char {
    arg.and_then(|a| a.chars().next()).unwrap_or(' ')
}

/// Strip one pair of matching single or double quotes
fn unquote(arg: &str) -> &str {
    for quote in ['\'', '"'] {
        if arg.len() >= 2 && arg.starts_with(quote) && arg.ends_with(quote) {
            return &arg[1..arg.len() - 1];
        }
    }
    arg
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn apply_to(stage: &str, input: &str) -> String {
        let value = json!(input);
        Operator::parse(stage)
            .apply(Working::Value(&value))
            .to_text()
            .into_owned()
    }

    #[test]
    fn test_parse_operators() {
        assert_eq!(
            Operator::parse("padLeft:5,0"),
            Operator::PadLeft { width: 5, fill: '0' }
        );
        assert_eq!(
            Operator::parse(" fit : 10 , center "),
            Operator::Fit {
                width: 10,
                align: FitAlign::Center
            }
        );
        assert_eq!(
            Operator::parse("default:'Guest'"),
            Operator::Default("Guest".into())
        );
        assert_eq!(
            Operator::parse("format:datetime"),
            Operator::Format(DateTimeStyle::DateTime)
        );
    }

    #[test]
    fn test_parse_unknown_and_malformed() {
        assert_eq!(Operator::parse("upper"), Operator::Noop("upper".into()));
        assert_eq!(Operator::parse("padLeft:wide"), Operator::Noop("padLeft:wide".into()));
        assert_eq!(Operator::parse("format:currency"), Operator::Noop("format:currency".into()));
    }

    #[test]
    fn test_default_keeps_commas_and_strips_quotes() {
        assert_eq!(
            Operator::parse(r#"default:"N/A, sorry""#),
            Operator::Default("N/A, sorry".into())
        );
        assert_eq!(Operator::parse("default"), Operator::Default(String::new()));
    }

    #[test]
    fn test_default_on_missing_and_empty() {
        let op = Operator::parse("default:X");
        assert_eq!(op.apply(Working::Missing("a.b")).to_text(), "X");
        assert_eq!(op.apply(Working::Value(&json!(""))).to_text(), "X");
        assert_eq!(op.apply(Working::Value(&json!(null))).to_text(), "X");
        assert_eq!(op.apply(Working::Value(&json!(0))).to_text(), "0");
        assert_eq!(op.apply(Working::Value(&json!("ok"))).to_text(), "ok");
    }

    #[test]
    fn test_padding() {
        assert_eq!(apply_to("padLeft:5,0", "7"), "00007");
        assert_eq!(apply_to("padLeft:4", "ab"), "  ab");
        assert_eq!(apply_to("padRight:4,'.'", "ab"), "ab..");
        assert_eq!(apply_to("padRight:1", "abc"), "abc");
        assert_eq!(apply_to("padLeft:3,' '", "x"), "  x");
    }

    #[test]
    fn test_fit() {
        assert_eq!(apply_to("fit:10,left", "abc"), "abc       ");
        assert_eq!(apply_to("fit:10,right", "abc"), "       abc");
        assert_eq!(apply_to("fit:2,left", "abcdef"), "ab");
        assert_eq!(apply_to("fit:7,center", "abc"), "  abc  ");
        assert_eq!(apply_to("fit:6,center", "abc"), " abc  ");
        assert_eq!(apply_to("fit:5,sideways", "abc"), "abc  ");
    }

    #[test]
    fn test_widths_are_clamped() {
        assert_eq!(
            Operator::parse("padLeft:1000000000"),
            Operator::PadLeft {
                width: MAX_COLUMN_WIDTH,
                fill: ' '
            }
        );
        assert_eq!(apply_to("padRight:99999,.", "ab").len(), MAX_COLUMN_WIDTH);
        assert_eq!(apply_to("fit:4096", "ab").len(), MAX_COLUMN_WIDTH);
    }

    #[test]
    fn test_padding_a_missing_value_uses_path_text() {
        let op = Operator::parse("padLeft:8,*");
        assert_eq!(op.apply(Working::Missing("qty")).to_text(), "*****qty");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            apply_to("format:datetime", "2025-01-22T14:30:00+07:00"),
            "1/22/2025, 2:30:00 PM"
        );
        assert_eq!(apply_to("format:date", "2025-01-22 08:00:00"), "1/22/2025");
        assert_eq!(apply_to("format:time", "2025-01-22 08:00:00"), "8:00:00 AM");
    }

    #[test]
    fn test_format_datetime_from_epoch_millis() {
        let millis = json!(86_400_000);
        let out = Operator::parse("format:date").apply(Working::Value(&millis));
        assert_eq!(out.to_text(), "1/2/1970");
    }

    #[test]
    fn test_format_unparseable_passes_through() {
        assert_eq!(apply_to("format:datetime", "soon"), "soon");

        let op = Operator::parse("format:datetime");
        assert_eq!(op.apply(Working::Missing("when")), Working::Missing("when"));
    }

    #[test]
    fn test_run_in_declared_order() {
        let ops = vec![Operator::parse("default:7"), Operator::parse("padLeft:3,0")];
        assert_eq!(run(&ops, Working::Missing("n")).to_text(), "007");

        let ops = vec![Operator::parse("padLeft:3,0"), Operator::parse("default:7")];
        assert_eq!(run(&ops, Working::Missing("n")).to_text(), "00n");
    }
}
