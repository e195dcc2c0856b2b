//! English suffix-stripping stemmer.
//!
//! The stemmer reduces an inflected word to a stem by running five ordered
//! groups of suffix rules (1a, 1b, 1c, 2, 3, 4, 5a, 5b). Each rule is gated
//! by the structural measure of the remaining stem and by a few structural
//! predicates from [`porter_core`].
//!
//! ```
//! assert_eq!(porter_en::stem("caresses").unwrap(), "caress");
//! assert_eq!(porter_en::stem("hopping").unwrap(), "hop");
//! assert!(porter_en::stem("Hopping").is_err());
//! ```
//!
//! # Modules
//!
//! - [`stemmer`] -- Rule tables, steps and the [`stemmer::Stemmer`] trait
//! - [`tokenizer`] -- Word tokenizer and stop-word list (feature `tokenize`)
//! - [`handle`] -- Options, stop words and text preprocessing in one place
//!   (feature `handle`)

pub mod stemmer;

#[cfg(feature = "tokenize")]
pub mod tokenizer;

#[cfg(feature = "handle")]
pub mod handle;

pub use porter_core::{InputPolicy, Word, WordError};
pub use stemmer::{PorterStemmer, Stemmer, StemmerOptions};

/// Stem a single word with default options.
///
/// The word must consist of lowercase ASCII letters only.
pub fn stem(word: &str) -> Result<String, WordError> {
    PorterStemmer::default().stem_str(word)
}

/// Stem every word with default options, preserving order.
///
/// Fails on the first word that is not lowercase ASCII.
pub fn stem_all<I, S>(words: I) -> Result<Vec<String>, WordError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    PorterStemmer::default().stem_all(words)
}
