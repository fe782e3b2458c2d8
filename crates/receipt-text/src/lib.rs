//! Receipt Text - printable text primitives
//!
//! This crate provides:
//! - Visible-width measurement (combining marks take no column)
//! - Column padding (`pad_left`, `pad_right`)
//! - Fixed-width fitting with truncation (`fit`)
//! - Date/time parsing and receipt-style formatting
//!
//! # Example
//!
//! ```
//! use receipt_text::{fit, pad_left, FitAlign};
//!
//! assert_eq!(pad_left("7", 5, '0'), "00007");
//! assert_eq!(fit("abc", 6, FitAlign::Right), "   abc");
//! assert_eq!(fit("abcdef", 2, FitAlign::Left), "ab");
//! ```

mod datetime;
mod pad;
mod width;

pub use datetime::{format_datetime, from_epoch_millis, parse_datetime, DateTimeStyle};
pub use pad::{fit, pad_left, pad_right, FitAlign};
pub use width::{is_zero_width, truncate_visible, visible_width};

use thiserror::Error;

/// Errors that can occur during text processing
#[derive(Debug, Error)]
pub enum TextError {
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),
}

/// Result type for text operations
pub type Result<T> = std::result::Result<T, TextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_examples() {
        assert_eq!(fit("abc", 10, FitAlign::Left), "abc       ");
        assert_eq!(fit("abc", 10, FitAlign::Right), "       abc");
        assert_eq!(fit("abcdef", 2, FitAlign::Left), "ab");
    }

    #[test]
    fn test_invalid_datetime_message() {
        let err = parse_datetime("not a date").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date/time: not a date");
    }
}
