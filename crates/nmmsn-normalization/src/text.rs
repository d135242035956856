//! Character-level normalization of name fragments.
//!
//! All functions are pure and total: they never fail, they only drop or
//! substitute characters.

use std::collections::BTreeSet;

/// Full-width brackets removed from localized labels.
pub const BRACKET_PUNCTUATION: [char; 6] = ['（', '）', '［', '］', '【', '】'];

/// Which characters a filtered string may keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharPolicy {
    /// Code points 32 through 127.
    PrintableAscii,
    /// Unicode alphabetic characters, `-` and the ASCII space.
    AlphabeticHyphenSpace,
}

impl CharPolicy {
    pub fn allows(self, ch: char) -> bool {
        match self {
            CharPolicy::PrintableAscii => (32..128).contains(&u32::from(ch)),
            CharPolicy::AlphabeticHyphenSpace => ch.is_alphabetic() || ch == '-' || ch == ' ',
        }
    }
}

/// Replaces every character the policy rejects with `replacement`, then
/// collapses whitespace runs to one space, collapses hyphen runs to one
/// hyphen and trims.
///
/// ```
/// use nmmsn_normalization::{CharPolicy, filter_chars};
///
/// assert_eq!(filter_chars("Hello × World", CharPolicy::PrintableAscii, ""), "Hello World");
/// assert_eq!(filter_chars("Hello × World", CharPolicy::PrintableAscii, "?"), "Hello ? World");
/// ```
pub fn filter_chars(s: &str, policy: CharPolicy, replacement: &str) -> String {
    let mut replaced = String::with_capacity(s.len());
    for ch in s.chars() {
        if policy.allows(ch) {
            replaced.push(ch);
        } else {
            replaced.push_str(replacement);
        }
    }
    collapse_hyphens(&collapse_whitespace(&replaced))
}

/// Whether every character of `s` is allowed by the policy.
pub fn conforms(s: &str, policy: CharPolicy) -> bool {
    s.chars().all(|ch| policy.allows(ch))
}

/// The distinct characters of `s` the policy rejects, in code point order.
pub fn disallowed_chars(s: &str, policy: CharPolicy) -> BTreeSet<char> {
    s.chars().filter(|ch| !policy.allows(*ch)).collect()
}

/// Removes all whitespace.
pub fn remove_whitespace(s: &str) -> String {
    s.chars().filter(|ch| !ch.is_whitespace()).collect()
}

/// Removes full-width bracket punctuation (`（）［］【】`).
pub fn remove_bracket_punctuation(s: &str) -> String {
    s.chars()
        .filter(|ch| !BRACKET_PUNCTUATION.contains(ch))
        .collect()
}

/// Collapses whitespace runs to a single space and trims both ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

fn collapse_hyphens(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut previous_hyphen = false;
    for ch in s.chars() {
        if ch == '-' {
            if !previous_hyphen {
                out.push(ch);
            }
            previous_hyphen = true;
        } else {
            out.push(ch);
            previous_hyphen = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_ascii_filter() {
        assert_eq!(
            filter_chars("Hello × World", CharPolicy::PrintableAscii, ""),
            "Hello World"
        );
        assert_eq!(
            filter_chars("Hello × World", CharPolicy::PrintableAscii, "?"),
            "Hello ? World"
        );
        assert_eq!(
            filter_chars("\tEphedra\nsinica ", CharPolicy::PrintableAscii, ""),
            "Ephedrasinica"
        );
        assert_eq!(filter_chars("a--b", CharPolicy::PrintableAscii, ""), "a-b");
    }

    #[test]
    fn alphabetic_filter_keeps_han_and_collapses_hyphens() {
        assert_eq!(
            filter_chars(
                "Ephedra sinica var. intermedia",
                CharPolicy::AlphabeticHyphenSpace,
                ""
            ),
            "Ephedra sinica var intermedia"
        );
        assert_eq!(
            filter_chars("Herbaceous--stem", CharPolicy::AlphabeticHyphenSpace, ""),
            "Herbaceous-stem"
        );
        assert_eq!(
            filter_chars("草麻黄 × 中麻黄", CharPolicy::AlphabeticHyphenSpace, ""),
            "草麻黄 中麻黄"
        );
        assert_eq!(filter_chars("", CharPolicy::AlphabeticHyphenSpace, ""), "");
    }

    #[test]
    fn conformance_and_offenders() {
        assert!(conforms("Ephedra sinica", CharPolicy::PrintableAscii));
        assert!(!conforms("草麻黄", CharPolicy::PrintableAscii));
        assert!(conforms("草麻黄", CharPolicy::AlphabeticHyphenSpace));
        let offenders = disallowed_chars("a.b×c.", CharPolicy::AlphabeticHyphenSpace);
        assert_eq!(offenders.into_iter().collect::<Vec<_>>(), vec!['.', '×']);
    }

    #[test]
    fn whitespace_and_brackets() {
        assert_eq!(remove_whitespace(" 草 麻\t黄 "), "草麻黄");
        assert_eq!(remove_bracket_punctuation("（原）板蓝【炒】"), "原板蓝炒");
        assert_eq!(collapse_whitespace("  herbaceous \t stem "), "herbaceous stem");
    }

    #[test]
    fn capitalize_lowers_the_tail() {
        assert_eq!(capitalize("herbaceous-stem"), "Herbaceous-stem");
        assert_eq!(capitalize("DRIED"), "Dried");
        assert_eq!(capitalize("草质茎"), "草质茎");
        assert_eq!(capitalize(""), "");
    }
}
