//! Visible width of printable text
//!
//! Receipt printers advance one column per base character. Combining marks
//! (Thai upper/lower vowels and tone marks, Latin diacritics) are stacked on
//! the preceding character and take no column of their own.

/// Check if a character is drawn without advancing the print head
pub fn is_zero_width(c: char) -> bool {
    matches!(c,
        '\u{0E31}' |               // Mai Han-Akat
        '\u{0E34}'..='\u{0E3A}' |  // Thai upper/lower vowels
        '\u{0E47}'..='\u{0E4E}' |  // Thai tone marks
        '\u{0300}'..='\u{036F}' |  // Combining diacritical marks
        '\u{200B}'..='\u{200D}' |  // Zero-width space / joiners
        '\u{FE00}'..='\u{FE0F}'    // Variation selectors
    )
}

/// Count the columns a string occupies
pub fn visible_width(text: &str) -> usize {
    text.chars().filter(|c| !is_zero_width(*c)).count()
}

/// Cut a string down to at most `width` columns, keeping it from the start.
///
/// Marks that belong to the last kept character stay attached to it.
pub fn truncate_visible(text: &str, width: usize) -> String {
    let mut seen = 0;
    let mut end = text.len();

    for (idx, c) in text.char_indices() {
        if is_zero_width(c) {
            continue;
        }
        if seen == width {
            end = idx;
            break;
        }
        seen += 1;
    }

    text[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_width_ascii() {
        assert_eq!(visible_width(""), 0);
        assert_eq!(visible_width("hello"), 5);
    }

    #[test]
    fn test_visible_width_thai_marks() {
        // น้ำ = NO NU + MAI THO + SARA AM; only the tone mark is stacked
        assert_eq!(visible_width("น้ำ"), 2);
        assert_eq!(visible_width("กิน"), 2);
    }

    #[test]
    fn test_visible_width_combining_latin() {
        assert_eq!(visible_width("e\u{0301}"), 1);
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_visible("abcdef", 2), "ab");
        assert_eq!(truncate_visible("abc", 10), "abc");
        assert_eq!(truncate_visible("abc", 0), "");
    }

    #[test]
    fn test_truncate_keeps_marks_with_base() {
        assert_eq!(truncate_visible("กินข้าว", 2), "กิน");
        assert_eq!(truncate_visible("e\u{0301}x", 1), "e\u{0301}");
    }
}
