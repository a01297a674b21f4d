//! Base-strength string comparison for station labels.
//!
//! Two labels compare equal when they differ only in letter case or
//! diacritics ("Tide A", "tide a" and "Tîde A" are all equal). Otherwise
//! whitespace sorts before punctuation and symbols, those before digits, and
//! digits before letters, the same grouping a root collation uses.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Primary groups in collation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Group {
    Space,
    Punctuation,
    Digit,
    Letter,
}

/// Sort key: one `(group, folded char)` per folded character.
pub type BaseKey = Vec<(Group, char)>;

fn group(c: char) -> Group {
    if c.is_whitespace() {
        Group::Space
    } else if c.is_numeric() {
        Group::Digit
    } else if c.is_alphabetic() {
        Group::Letter
    } else {
        Group::Punctuation
    }
}

/// Letters that a root collation treats as a base letter (or pair) plus a
/// secondary difference, but that carry no combining mark after NFD.
fn expand(c: char) -> &'static str {
    match c {
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'ø' => "o",
        'đ' => "d",
        'ł' => "l",
        'þ' => "th",
        _ => "",
    }
}

/// Fold `s` to base strength: canonical decomposition, combining marks
/// dropped, lowercased, and stroked or ligature letters expanded.
pub fn fold(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
    {
        match expand(c) {
            "" => out.push(c),
            expanded => out.push_str(expanded),
        }
    }
    out
}

pub fn base_key(s: &str) -> BaseKey {
    fold(s).chars().map(|c| (group(c), c)).collect()
}

/// Compare two strings ignoring case and accents.
pub fn compare_base(a: &str, b: &str) -> Ordering {
    base_key(a).cmp(&base_key(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_is_ignored() {
        assert_eq!(compare_base("Tide A", "tide a"), Ordering::Equal);
        assert_eq!(compare_base("Tide A", "tide c"), Ordering::Less);
        assert_eq!(compare_base("tide c", "Tide A"), Ordering::Greater);
    }

    #[test]
    fn test_accents_are_ignored() {
        assert_eq!(compare_base("Ébbw Vale", "ebbw vale"), Ordering::Equal);
        assert_eq!(fold("Llandúdno"), "llandudno");
    }

    #[test]
    fn test_letters_without_marks_expand() {
        assert_eq!(compare_base("Straße", "strasse"), Ordering::Equal);
        assert_eq!(compare_base("Søby", "soby"), Ordering::Equal);
        assert_eq!(fold("Æbelø"), "aebelo");
    }

    #[test]
    fn test_punctuation_before_digits_before_letters() {
        for symbol in [":", ";", "@", "[", "-"] {
            assert_eq!(compare_base(symbol, "1"), Ordering::Less, "{}", symbol);
        }
        assert_eq!(compare_base("9", "a"), Ordering::Less);
        assert_eq!(compare_base("Dock 2", "Dock-2"), Ordering::Less);
        assert_eq!(compare_base("Pier [old]", "Pier 1"), Ordering::Less);
    }

    #[test]
    fn test_empty_sorts_first() {
        assert_eq!(compare_base("", "Aberdeen"), Ordering::Less);
        assert_eq!(compare_base("", ""), Ordering::Equal);
    }
}
