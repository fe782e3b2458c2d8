//! Column padding and fixed-width fitting

use crate::width::{truncate_visible, visible_width};

/// Alignment used when `fit` has to pad
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FitAlign {
    /// Text on the left, padding on the right
    #[default]
    Left,
    /// Text on the right, padding on the left
    Right,
    /// Padding split on both sides, the odd space going right
    Center,
}

impl FitAlign {
    /// Look up an alignment by its template name (`left`, `right`, `center`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(FitAlign::Left),
            "right" => Some(FitAlign::Right),
            "center" => Some(FitAlign::Center),
            _ => None,
        }
    }
}

/// Pad on the left with `fill` until `text` is `width` columns wide.
///
/// Text that is already wide enough is returned unchanged.
pub fn pad_left(text: &str, width: usize, fill: char) -> String {
    let len = visible_width(text);
    if len >= width {
        return text.to_string();
    }

    let mut out = fill_run(fill, width - len);
    out.push_str(text);
    out
}

/// Pad on the right with `fill` until `text` is `width` columns wide.
///
/// Text that is already wide enough is returned unchanged.
pub fn pad_right(text: &str, width: usize, fill: char) -> String {
    let len = visible_width(text);
    if len >= width {
        return text.to_string();
    }

    let mut out = text.to_string();
    out.push_str(&fill_run(fill, width - len));
    out
}

/// Force `text` to exactly `width` columns.
///
/// Longer text is cut from the start with no ellipsis; shorter text is
/// padded with spaces according to `align`.
pub fn fit(text: &str, width: usize, align: FitAlign) -> String {
    let len = visible_width(text);
    if len > width {
        return truncate_visible(text, width);
    }

    let gap = width - len;
    match align {
        FitAlign::Left => pad_right(text, width, ' '),
        FitAlign::Right => pad_left(text, width, ' '),
        FitAlign::Center => {
            let left = gap / 2;
            let right = gap - left;
            format!("{}{text}{}", fill_run(' ', left), fill_run(' ', right))
        }
    }
}

fn fill_run(fill: char, count: usize) -> String {
    std::iter::repeat(fill).take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pad_left() {
        assert_eq!(pad_left("7", 5, '0'), "00007");
        assert_eq!(pad_left("42", 4, ' '), "  42");
        assert_eq!(pad_left("123456", 4, '0'), "123456");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("ab", 5, '.'), "ab...");
        assert_eq!(pad_right("abcde", 5, '.'), "abcde");
    }

    #[test]
    fn test_pad_counts_visible_columns() {
        assert_eq!(pad_left("น้ำ", 4, '*'), "**น้ำ");
    }

    #[test]
    fn test_fit_left_right() {
        assert_eq!(fit("abc", 10, FitAlign::Left), "abc       ");
        assert_eq!(fit("abc", 10, FitAlign::Right), "       abc");
    }

    #[test]
    fn test_fit_center_odd_goes_right() {
        assert_eq!(fit("abc", 8, FitAlign::Center), "  abc   ");
        assert_eq!(fit("ab", 6, FitAlign::Center), "  ab  ");
    }

    #[test]
    fn test_fit_truncates() {
        assert_eq!(fit("abcdef", 2, FitAlign::Left), "ab");
        assert_eq!(fit("abcdef", 2, FitAlign::Right), "ab");
        assert_eq!(fit("abc", 3, FitAlign::Center), "abc");
    }

    #[test]
    fn test_align_from_name() {
        assert_eq!(FitAlign::from_name("center"), Some(FitAlign::Center));
        assert_eq!(FitAlign::from_name("middle"), None);
    }
}
