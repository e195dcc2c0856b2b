// Validated word type
//
// The stemmer only understands lowercase ASCII letters. Raw input is checked
// once, at the boundary, and turned into a `Word`; nothing downstream has to
// re-validate, and no step can fail.

use std::fmt;

/// Error returned when raw input cannot become a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    /// An uppercase letter under the strict policy.
    #[error("uppercase letter {character:?} at position {position} in {word:?}")]
    Uppercase {
        word: String,
        character: char,
        position: usize,
    },

    /// A character that is not an ASCII letter (digit, punctuation, non-ASCII).
    #[error("invalid character {character:?} at position {position} in {word:?}")]
    InvalidCharacter {
        word: String,
        character: char,
        position: usize,
    },
}

/// How raw input is turned into a [`Word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputPolicy {
    /// Only lowercase ASCII letters are accepted.
    #[default]
    Strict,
    /// ASCII uppercase letters are lowercased first; anything else non-alphabetic
    /// is still rejected.
    Lowercase,
}

impl InputPolicy {
    /// Validate `raw` according to this policy.
    pub fn apply(self, raw: &str) -> Result<Word, WordError> {
        match self {
            InputPolicy::Strict => Word::parse(raw),
            InputPolicy::Lowercase => Word::normalize(raw),
        }
    }
}

/// A lowercase ASCII word. The empty word is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Word(String);

impl Word {
    /// Accept `raw` only if every character is in `a..=z`.
    pub fn parse(raw: &str) -> Result<Self, WordError> {
        for (position, character) in raw.chars().enumerate() {
            if character.is_ascii_lowercase() {
                continue;
            }
            let word = raw.to_string();
            return Err(if character.is_ascii_uppercase() {
                WordError::Uppercase { word, character, position }
            } else {
                WordError::InvalidCharacter { word, character, position }
            });
        }
        Ok(Self(raw.to_string()))
    }

    /// Lowercase ASCII letters in `raw`, then [`parse`](Self::parse) it.
    pub fn normalize(raw: &str) -> Result<Self, WordError> {
        Self::parse(&raw.to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        self.0.ends_with(suffix)
    }

    /// The letters left after removing a suffix of `suffix_len` letters.
    ///
    /// Returns the empty slice when the suffix is longer than the word.
    pub fn stem(&self, suffix_len: usize) -> &[u8] {
        let bytes = self.as_bytes();
        &bytes[..bytes.len().saturating_sub(suffix_len)]
    }

    /// Replace the last `suffix_len` letters with `replacement`.
    ///
    /// `replacement` comes from the rule tables and must itself be lowercase
    /// ASCII. A `suffix_len` of 0 appends.
    pub fn replace_suffix(&mut self, suffix_len: usize, replacement: &'static str) {
        debug_assert!(replacement.bytes().all(|b| b.is_ascii_lowercase()));
        let keep = self.0.len().saturating_sub(suffix_len);
        self.0.truncate(keep);
        self.0.push_str(replacement);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_lowercase() {
        assert_eq!(Word::parse("running").unwrap().as_str(), "running");
        assert!(Word::parse("").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_uppercase() {
        let err = Word::parse("Running").unwrap_err();
        assert_eq!(
            err,
            WordError::Uppercase {
                word: "Running".into(),
                character: 'R',
                position: 0
            }
        );
    }

    #[test]
    fn parse_rejects_non_letters() {
        let err = Word::parse("abc1").unwrap_err();
        assert!(matches!(
            err,
            WordError::InvalidCharacter { character: '1', position: 3, .. }
        ));
        // Position counts characters, not bytes.
        let err = Word::parse("\u{00e4}b!").unwrap_err();
        assert!(matches!(
            err,
            WordError::InvalidCharacter { character: '\u{00e4}', position: 0, .. }
        ));
        assert!(Word::parse("don't").is_err());
    }

    #[test]
    fn normalize_lowercases_ascii() {
        assert_eq!(Word::normalize("CaReSsEs").unwrap().as_str(), "caresses");
        assert!(Word::normalize("Caf\u{00e9}").is_err());
        assert!(Word::normalize("abc-def").is_err());
    }

    #[test]
    fn policy_apply() {
        assert!(InputPolicy::Strict.apply("Feed").is_err());
        assert_eq!(InputPolicy::Lowercase.apply("Feed").unwrap().as_str(), "feed");
        assert_eq!(InputPolicy::default(), InputPolicy::Strict);
    }

    #[test]
    fn error_messages() {
        let err = Word::parse("ab3").unwrap_err();
        assert_eq!(err.to_string(), "invalid character '3' at position 2 in \"ab3\"");
    }

    #[test]
    fn stem_and_replace_suffix() {
        let mut word = Word::parse("ponies").unwrap();
        assert_eq!(word.stem(3), b"pon");
        assert_eq!(word.stem(10), b"");
        word.replace_suffix(3, "i");
        assert_eq!(word.as_str(), "poni");
        word.replace_suffix(0, "e");
        assert_eq!(word.as_str(), "ponie");
        word.replace_suffix(1, "");
        assert_eq!(word.as_str(), "poni");
    }
}
