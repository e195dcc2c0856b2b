// Suffix-stripping stemmer module

pub mod rules;
pub mod steps;

use porter_core::{DoubleConsonantRule, InputPolicy, Word, WordError};

pub use steps::stem_word;

/// Options controlling input validation and the double-consonant test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StemmerOptions {
    /// How raw strings are validated before stemming.
    pub input_policy: InputPolicy,
    /// How "ends with a double consonant" is decided in steps 1b and 5b.
    pub double_consonant: DoubleConsonantRule,
}

/// Trait for stemmers.
///
/// Implementations receive an already validated [`Word`] and cannot fail.
pub trait Stemmer {
    /// Reduce `word` to its stem.
    fn stem(&self, word: &Word) -> Word;
}

/// The five-step English suffix-stripping stemmer.
///
/// Holds only immutable options, so one instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PorterStemmer {
    options: StemmerOptions,
}

impl PorterStemmer {
    pub fn new(options: StemmerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> StemmerOptions {
        self.options
    }

    /// Validate `raw` with the configured input policy, then stem it.
    pub fn stem_str(&self, raw: &str) -> Result<String, WordError> {
        let word = self.options.input_policy.apply(raw)?;
        Ok(self.stem(&word).into_string())
    }

    /// Stem every word in order. Output has the same length as the input.
    ///
    /// Fails on the first word rejected by the input policy.
    pub fn stem_all<I, S>(&self, words: I) -> Result<Vec<String>, WordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|raw| self.stem_str(raw.as_ref()))
            .collect()
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &Word) -> Word {
        stem_word(word, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_str_validates_input() {
        let stemmer = PorterStemmer::default();
        assert_eq!(stemmer.stem_str("ponies").unwrap(), "poni");
        assert!(matches!(
            stemmer.stem_str("Ponies"),
            Err(WordError::Uppercase { position: 0, .. })
        ));
        assert!(matches!(
            stemmer.stem_str("pon1es"),
            Err(WordError::InvalidCharacter { character: '1', .. })
        ));
    }

    #[test]
    fn lowercase_policy() {
        let stemmer = PorterStemmer::new(StemmerOptions {
            input_policy: InputPolicy::Lowercase,
            ..StemmerOptions::default()
        });
        assert_eq!(stemmer.stem_str("CARESSES").unwrap(), "caress");
        assert!(stemmer.stem_str("care-sses").is_err());
    }

    #[test]
    fn stem_all_preserves_order_and_length() {
        let stemmer = PorterStemmer::default();
        let words = ["relational", "ponies", "run", "ponies"];
        let stems = stemmer.stem_all(words).unwrap();
        assert_eq!(stems.len(), words.len());
        let one_by_one: Vec<String> = words
            .iter()
            .map(|w| stemmer.stem_str(w).unwrap())
            .collect();
        assert_eq!(stems, one_by_one);
        assert_eq!(stems, vec!["relat", "poni", "run", "poni"]);
    }

    #[test]
    fn stem_all_empty_and_failing() {
        let stemmer = PorterStemmer::default();
        assert!(stemmer.stem_all(Vec::<String>::new()).unwrap().is_empty());
        assert!(stemmer.stem_all(["ok", "not ok", "fine"]).is_err());
    }

    #[test]
    fn shared_between_threads() {
        let stemmer = PorterStemmer::default();
        let words = ["hopping", "filing", "agreed", "conflated"];
        std::thread::scope(|scope| {
            let handles: Vec<_> = words
                .iter()
                .map(|w| scope.spawn(move || stemmer.stem_str(w).unwrap()))
                .collect();
            let stems: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(stems, vec!["hop", "file", "agre", "conflat"]);
        });
    }
}
