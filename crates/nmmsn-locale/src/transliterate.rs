//! Phonetic transliteration of localized names.

use pinyin::ToPinyin;

use crate::error::TransliterationError;

/// Produces a phonetic reading of a localized name.
pub trait Transliterator {
    fn transliterate(&self, text: &str) -> Result<String, TransliterationError>;
}

/// Tone-marked pinyin, one syllable per Han character.
///
/// Runs of other characters are kept as one token; whitespace separates
/// tokens and is otherwise dropped. Tokens are joined by single spaces, so
/// `"青蒿"` reads `"qīng hāo"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinTransliterator;

impl Transliterator for PinyinTransliterator {
    fn transliterate(&self, text: &str) -> Result<String, TransliterationError> {
        let mut tokens: Vec<String> = Vec::new();
        let mut pending = String::new();
        for ch in text.chars() {
            if ch.is_whitespace() {
                flush(&mut pending, &mut tokens);
            } else if is_han(ch) {
                flush(&mut pending, &mut tokens);
                let reading = ch.to_pinyin().ok_or_else(|| TransliterationError::NoReading {
                    ch,
                    text: text.to_string(),
                })?;
                tokens.push(reading.with_tone().to_string());
            } else {
                pending.push(ch);
            }
        }
        flush(&mut pending, &mut tokens);
        Ok(tokens.join(" "))
    }
}

fn flush(pending: &mut String, tokens: &mut Vec<String>) {
    if !pending.is_empty() {
        tokens.push(std::mem::take(pending));
    }
}

/// CJK unified ideographs, their extensions and compatibility ideographs.
fn is_han(ch: char) -> bool {
    matches!(
        u32::from(ch),
        0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xF900..=0xFAFF
            | 0x20000..=0x2A6DF
            | 0x2A700..=0x2EBEF
            | 0x30000..=0x3134F
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn han_characters_become_syllables() {
        let pinyin = PinyinTransliterator.transliterate("青蒿").unwrap();
        assert_eq!(pinyin, "qīng hāo");
    }

    #[test]
    fn other_characters_stay_grouped() {
        let pinyin = PinyinTransliterator.transliterate("AB 青").unwrap();
        assert_eq!(pinyin, "AB qīng");
        assert_eq!(PinyinTransliterator.transliterate("").unwrap(), "");
    }

    #[test]
    fn detects_han() {
        assert!(is_han('草'));
        assert!(!is_han('a'));
        assert!(!is_han('（'));
    }
}
