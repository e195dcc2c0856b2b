// Word tokenizer and stop-word list
//
// Produces the lowercase word tokens the stemmer consumes. ASCII punctuation
// is deleted outright ("don't" -> "dont"), the text is lowercased, and the
// remainder is split into runs of word characters; any other run of
// non-whitespace characters becomes a token of its own.

use std::io::{self, BufRead};

use hashbrown::HashSet;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split `text` into lowercase tokens, in order.
pub fn tokens(text: &str) -> Vec<String> {
    let cleaned: Vec<char> = text
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .collect();

    let mut result = Vec::new();
    let mut i = 0;
    while i < cleaned.len() {
        let c = cleaned[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        let start = i;
        if is_word_char(c) {
            while i < cleaned.len() && is_word_char(cleaned[i]) {
                i += 1;
            }
        } else {
            while i < cleaned.len() && !cleaned[i].is_whitespace() {
                i += 1;
            }
        }
        result.push(cleaned[start..i].iter().collect());
    }
    result
}

/// A set of words to drop before stemming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from words; entries are trimmed and lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for word in words {
            list.insert(word.as_ref());
        }
        list
    }

    /// Read one word per line. Blank lines and lines starting with `#` are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut list = Self::new();
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            list.insert(line);
        }
        Ok(list)
    }

    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word.to_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drop every stop word from `tokens`, keeping the order of the rest.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().filter(|t| !self.contains(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_basic() {
        assert_eq!(tokens("Hello, World!"), vec!["hello", "world"]);
        assert_eq!(tokens("  The cats   were running.\n"), vec!["the", "cats", "were", "running"]);
    }

    #[test]
    fn tokens_remove_punctuation_inside_words() {
        assert_eq!(tokens("don't re-enter"), vec!["dont", "reenter"]);
        assert_eq!(tokens("$3.50"), vec!["350"]);
    }

    #[test]
    fn tokens_split_symbol_runs() {
        // U+2014 EM DASH is not ASCII punctuation.
        assert_eq!(tokens("caf\u{00e9}\u{2014}bar"), vec!["caf\u{00e9}", "\u{2014}bar"]);
        assert_eq!(tokens("abc\u{2014}"), vec!["abc", "\u{2014}"]);
    }

    #[test]
    fn tokens_empty() {
        assert!(tokens("").is_empty());
        assert!(tokens(" ... !!! ").is_empty());
    }

    #[test]
    fn stop_words_from_reader() {
        let data = "# english\nthe\n  A \n\nand\n";
        let list = StopWords::from_reader(data.as_bytes()).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.contains("the"));
        assert!(list.contains("a"));
        assert!(!list.contains("# english"));
    }

    #[test]
    fn stop_words_filter_keeps_order() {
        let list = StopWords::from_words(["the", "were"]);
        let filtered = list.filter(tokens("The cats were running"));
        assert_eq!(filtered, vec!["cats", "running"]);
    }

    #[test]
    fn empty_list_filters_nothing() {
        let list = StopWords::new();
        assert!(list.is_empty());
        assert_eq!(list.filter(vec!["a".into(), "b".into()]), vec!["a", "b"]);
    }
}
