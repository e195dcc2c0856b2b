//! Shared building blocks for English suffix-stripping stemming.
//!
//! Everything in this crate operates on lowercase ASCII words. Callers get
//! such a word by validating raw input through [`word::Word`]; the functions
//! in [`character`], [`measure`] and [`predicates`] take the word's bytes.
//!
//! # Architecture
//!
//! - [`character`] -- Vowel/consonant classification with the positional `y` rule
//! - [`measure`] -- Run collapsing and the structural measure `m`
//! - [`predicates`] -- Contains-vowel, double-consonant and CVC tests
//! - [`word`] -- Validated word type and input policies

pub mod character;
pub mod measure;
pub mod predicates;
pub mod word;

pub use character::{LetterClass, classify, classify_letters};
pub use measure::measure;
pub use predicates::{DoubleConsonantRule, contains_vowel, ends_with_cvc, ends_with_double_consonant};
pub use word::{InputPolicy, Word, WordError};
