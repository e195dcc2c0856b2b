// StemmerHandle: options, stop words and text preprocessing in one place.
//
// The handle is what the CLI and the language bindings hold. It owns the
// stemmer options and an optional stop-word list, and turns raw text into
// stems: tokenize, drop stop words, stem. Tokens that cannot be stemmed
// (digits, non-ASCII letters) pass through unchanged so the output stays
// aligned with the token stream.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use porter_core::{DoubleConsonantRule, InputPolicy, WordError};

use crate::stemmer::{PorterStemmer, StemmerOptions};
use crate::tokenizer::{self, StopWords};

/// Error type for handle configuration failures.
#[derive(Debug, thiserror::Error)]
pub enum HandleError {
    /// The stop-word file could not be read.
    #[error("failed to read stop words from {}: {source}", .path.display())]
    StopWords {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One token of preprocessed text together with its stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemmedToken {
    /// The token as produced by the tokenizer.
    pub token: String,
    /// The stem, or the token itself when it could not be stemmed.
    pub stem: String,
    /// Whether the token went through the stemmer.
    pub stemmed: bool,
}

/// Top-level handle owning the stemmer configuration.
#[derive(Debug, Clone, Default)]
pub struct StemmerHandle {
    stemmer: PorterStemmer,
    stop_words: Option<StopWords>,
}

impl StemmerHandle {
    pub fn new(options: StemmerOptions) -> Self {
        tracing::debug!(?options, "creating stemmer handle");
        Self {
            stemmer: PorterStemmer::new(options),
            stop_words: None,
        }
    }

    /// Use `stop_words` when tokenizing text.
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.set_stop_words(Some(stop_words));
        self
    }

    /// Load a stop-word file (one word per line) and use it when tokenizing.
    pub fn load_stop_words(&mut self, path: impl AsRef<Path>) -> Result<(), HandleError> {
        let path = path.as_ref();
        let to_error = |source| HandleError::StopWords {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(to_error)?;
        let stop_words = StopWords::from_reader(BufReader::new(file)).map_err(to_error)?;
        tracing::debug!(path = %path.display(), count = stop_words.len(), "loaded stop words");
        self.set_stop_words(Some(stop_words));
        Ok(())
    }

    pub fn set_stop_words(&mut self, stop_words: Option<StopWords>) {
        self.stop_words = stop_words;
    }

    pub fn stop_words(&self) -> Option<&StopWords> {
        self.stop_words.as_ref()
    }

    pub fn options(&self) -> StemmerOptions {
        self.stemmer.options()
    }

    pub fn set_input_policy(&mut self, policy: InputPolicy) {
        self.stemmer = PorterStemmer::new(StemmerOptions {
            input_policy: policy,
            ..self.options()
        });
    }

    pub fn set_double_consonant_rule(&mut self, rule: DoubleConsonantRule) {
        self.stemmer = PorterStemmer::new(StemmerOptions {
            double_consonant: rule,
            ..self.options()
        });
    }

    // =========================================================================
    // Stemming
    // =========================================================================

    /// Stem a single word.
    pub fn stem(&self, word: &str) -> Result<String, WordError> {
        self.stemmer.stem_str(word)
    }

    /// Stem words in order; the result has one stem per input word.
    pub fn stem_all<I, S>(&self, words: I) -> Result<Vec<String>, WordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stemmer.stem_all(words)
    }

    /// Tokenize `text` and drop stop words, if a list is configured.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let tokens = tokenizer::tokens(text);
        match &self.stop_words {
            Some(stop_words) => stop_words.filter(tokens),
            None => tokens,
        }
    }

    /// Tokenize `text` and stem every token, keeping the token alongside.
    pub fn analyze(&self, text: &str) -> Vec<StemmedToken> {
        self.tokens(text)
            .into_iter()
            .map(|token| match self.stem(&token) {
                Ok(stem) => StemmedToken {
                    token,
                    stem,
                    stemmed: true,
                },
                Err(e) => {
                    tracing::debug!(error = %e, "token passed through unstemmed");
                    StemmedToken {
                        stem: token.clone(),
                        token,
                        stemmed: false,
                    }
                }
            })
            .collect()
    }

    /// Tokenize `text` and return one stem per token.
    pub fn preprocess(&self, text: &str) -> Vec<String> {
        self.analyze(text).into_iter().map(|t| t.stem).collect()
    }

    // =========================================================================
    // Utility
    // =========================================================================

    /// Get the library version string.
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_uses_options() {
        let mut handle = StemmerHandle::default();
        assert!(handle.stem("Running").is_err());
        handle.set_input_policy(InputPolicy::Lowercase);
        assert_eq!(handle.stem("Running").unwrap(), "run");

        assert_eq!(handle.stem("sprinted").unwrap(), "sprin");
        handle.set_double_consonant_rule(DoubleConsonantRule::SameLetter);
        assert_eq!(handle.stem("sprinted").unwrap(), "sprint");
        assert_eq!(handle.options().input_policy, InputPolicy::Lowercase);
    }

    #[test]
    fn preprocess_text() {
        let handle = StemmerHandle::default();
        assert_eq!(
            handle.preprocess("The ponies were hopping, agreed?"),
            vec!["the", "poni", "were", "hop", "agre"]
        );
    }

    #[test]
    fn preprocess_with_stop_words() {
        let handle = StemmerHandle::default().with_stop_words(StopWords::from_words(["the", "were"]));
        assert_eq!(
            handle.preprocess("The ponies were hopping"),
            vec!["poni", "hop"]
        );
    }

    #[test]
    fn unstemmable_tokens_pass_through() {
        let handle = StemmerHandle::default();
        let analyzed = handle.analyze("3 cats caf\u{00e9}s");
        assert_eq!(analyzed.len(), 3);
        assert_eq!(
            analyzed[0],
            StemmedToken {
                token: "3".into(),
                stem: "3".into(),
                stemmed: false
            }
        );
        assert_eq!(analyzed[1].stem, "cat");
        assert!(analyzed[1].stemmed);
        assert!(!analyzed[2].stemmed);
    }

    #[test]
    fn missing_stop_word_file() {
        let mut handle = StemmerHandle::default();
        let err = handle
            .load_stop_words("/nonexistent/porter/stop_words.txt")
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/porter/stop_words.txt"));
        assert!(handle.stop_words().is_none());
    }

    #[test]
    fn version_is_set() {
        assert!(!StemmerHandle::get_version().is_empty());
    }
}
