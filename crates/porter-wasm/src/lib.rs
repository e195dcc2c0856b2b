// WASM bindings for the English stemmer.
//
// Provides a `WasmStemmer` class exported via wasm-bindgen that wraps the
// `StemmerHandle` from porter-en. Structured results are serialized to
// JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const stemmer = new WasmStemmer(false, false);
//   stemmer.stem("caresses");               // => "caress"
//   stemmer.stemAll(["ponies", "hopping"]);  // => ["poni", "hop"]
//   stemmer.setStopWords(["the", "a"]);
//   stemmer.preprocess("The ponies ran");   // => ["poni", "ran"]
//   stemmer.analyze("3 ponies");            // => [{ token: "3", stem: "3", stemmed: false }, ...]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use porter_core::{DoubleConsonantRule, InputPolicy, WordError};
use porter_en::StemmerOptions;
use porter_en::handle::{StemmedToken, StemmerHandle};
use porter_en::tokenizer::StopWords;

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a stemmed token.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStemmedToken {
    token: String,
    stem: String,
    stemmed: bool,
}

impl From<StemmedToken> for JsStemmedToken {
    fn from(t: StemmedToken) -> Self {
        Self {
            token: t.token,
            stem: t.stem,
            stemmed: t.stemmed,
        }
    }
}

fn word_error_to_js(e: WordError) -> JsError {
    JsError::new(&e.to_string())
}

fn options_from_flags(lowercase: bool, same_letter_doubles: bool) -> StemmerOptions {
    StemmerOptions {
        input_policy: if lowercase {
            InputPolicy::Lowercase
        } else {
            InputPolicy::Strict
        },
        double_consonant: if same_letter_doubles {
            DoubleConsonantRule::SameLetter
        } else {
            DoubleConsonantRule::ByClass
        },
    }
}

// ============================================================================
// WasmStemmer
// ============================================================================

/// English stemmer for WebAssembly.
#[wasm_bindgen]
pub struct WasmStemmer {
    handle: StemmerHandle,
}

#[wasm_bindgen]
impl WasmStemmer {
    /// Create a new stemmer.
    ///
    /// - `lowercase`: lowercase input instead of rejecting uppercase letters
    /// - `same_letter_doubles`: only identical letters form a double consonant
    #[wasm_bindgen(constructor)]
    pub fn new(lowercase: bool, same_letter_doubles: bool) -> WasmStemmer {
        WasmStemmer {
            handle: StemmerHandle::new(options_from_flags(lowercase, same_letter_doubles)),
        }
    }

    /// Stem a single word. Throws if the word is rejected by the input policy.
    pub fn stem(&self, word: &str) -> Result<String, JsError> {
        self.handle.stem(word).map_err(word_error_to_js)
    }

    /// Stem an array of words, preserving order.
    #[wasm_bindgen(js_name = "stemAll")]
    pub fn stem_all(&self, words: Vec<String>) -> Result<Vec<String>, JsError> {
        self.handle.stem_all(&words).map_err(word_error_to_js)
    }

    /// Tokenize text (lowercase, punctuation removed, stop words dropped).
    pub fn tokens(&self, text: &str) -> Vec<String> {
        self.handle.tokens(text)
    }

    /// Tokenize text and return one stem per token.
    pub fn preprocess(&self, text: &str) -> Vec<String> {
        self.handle.preprocess(text)
    }

    /// Tokenize text and return `{ token, stem, stemmed }` objects.
    pub fn analyze(&self, text: &str) -> Result<JsValue, JsError> {
        let tokens: Vec<JsStemmedToken> = self
            .handle
            .analyze(text)
            .into_iter()
            .map(JsStemmedToken::from)
            .collect();
        serde_wasm_bindgen::to_value(&tokens).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Replace the stop-word list. An empty array disables filtering.
    #[wasm_bindgen(js_name = "setStopWords")]
    pub fn set_stop_words(&mut self, words: Vec<String>) {
        let stop_words = if words.is_empty() {
            None
        } else {
            Some(StopWords::from_words(&words))
        };
        self.handle.set_stop_words(stop_words);
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        StemmerHandle::get_version().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_mapping() {
        assert_eq!(options_from_flags(false, false), StemmerOptions::default());
        let options = options_from_flags(true, true);
        assert_eq!(options.input_policy, InputPolicy::Lowercase);
        assert_eq!(options.double_consonant, DoubleConsonantRule::SameLetter);
    }

    #[test]
    fn stemmed_token_conversion() {
        let token = StemmedToken {
            token: "ponies".into(),
            stem: "poni".into(),
            stemmed: true,
        };
        let js = JsStemmedToken::from(token);
        assert_eq!(js.stem, "poni");
        assert!(js.stemmed);
    }

    #[test]
    fn stop_words_toggle() {
        let mut stemmer = WasmStemmer::new(false, false);
        stemmer.set_stop_words(vec!["the".into()]);
        assert_eq!(stemmer.preprocess("the ponies"), vec!["poni"]);
        stemmer.set_stop_words(Vec::new());
        assert_eq!(stemmer.preprocess("the ponies"), vec!["the", "poni"]);
    }
}
