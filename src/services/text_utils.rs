use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

pub struct NameCollator;

impl NameCollator {
    /// Orders display names the way an English locale collation would: base letters first,
    /// then accents, then case (lowercase before uppercase). Identical names compare equal.
    pub fn compare(a: &str, b: &str) -> Ordering {
        Self::primary_key(a)
            .cmp(&Self::primary_key(b))
            .then_with(|| Self::secondary_key(a).cmp(&Self::secondary_key(b)))
            .then_with(|| Self::tertiary_key(a).cmp(&Self::tertiary_key(b)))
            .then_with(|| a.cmp(b))
    }

    fn primary_key(name: &str) -> Vec<(u8, char)> {
        let mut base = String::with_capacity(name.len());
        for c in name
            .nfkd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
        {
            match Self::base_letters(c) {
                Some(letters) => base.push_str(letters),
                None => base.push(c),
            }
        }

        base.chars().map(|c| (Self::char_class(c), c)).collect()
    }

    // Letters with no canonical decomposition that still sort with their base letter.
    fn base_letters(c: char) -> Option<&'static str> {
        let letters = match c {
            'ß' => "ss",
            'æ' => "ae",
            'œ' => "oe",
            'ø' => "o",
            'ł' => "l",
            'đ' | 'ð' => "d",
            'þ' => "th",
            'ħ' => "h",
            'ı' => "i",
            _ => return None,
        };
        Some(letters)
    }

    fn secondary_key(name: &str) -> Vec<char> {
        name.nfkd().flat_map(char::to_lowercase).collect()
    }

    fn tertiary_key(name: &str) -> Vec<bool> {
        name.nfkd()
            .filter(|c| !is_combining_mark(*c))
            .map(char::is_uppercase)
            .collect()
    }

    // Whitespace and punctuation sort before digits, digits before letters.
    fn char_class(c: char) -> u8 {
        if c.is_alphabetic() {
            2
        } else if c.is_numeric() {
            1
        } else {
            0
        }
    }
}

/// `"1 scene"` or `"{n} scenes"`.
pub fn scenes_label(count: u32) -> String {
    if count == 1 {
        format!("{} scene", count)
    } else {
        format!("{} scenes", count)
    }
}

/// Lowercase, dash-separated form of a label, usable inside an element id.
pub fn slugify(label: &str) -> String {
    NON_SLUG_CHARS
        .replace_all(&label.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}
