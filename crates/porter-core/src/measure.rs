// Structural measure of a word
//
// A word is viewed as [C](VC){m}[V]: an optional leading consonant run,
// m vowel-run/consonant-run pairs, and an optional trailing vowel run.
// The measure m gates how aggressively suffixes may be removed.

use crate::character::{LetterClass, letter_classes};

/// Collapse the letter classes of `word` into maximal runs.
///
/// "trouble" -> [C, V, C, V].
pub fn runs(word: &[u8]) -> Vec<LetterClass> {
    let mut runs: Vec<LetterClass> = Vec::new();
    for class in letter_classes(word) {
        if runs.last() != Some(&class) {
            runs.push(class);
        }
    }
    runs
}

/// Compute the measure `m` of `word`.
///
/// Words with fewer than two runs have measure 0. Otherwise a leading
/// consonant run and a trailing vowel run are trimmed and every remaining
/// pair of runs counts once.
pub fn measure(word: &[u8]) -> usize {
    let runs = runs(word);
    if runs.len() < 2 {
        return 0;
    }

    let mut interior = &runs[..];
    if let [LetterClass::Consonant, rest @ ..] = interior {
        interior = rest;
    }
    if let [rest @ .., LetterClass::Vowel] = interior {
        interior = rest;
    }
    interior.len() / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterClass::{Consonant as C, Vowel as V};

    #[test]
    fn runs_collapse_adjacent_classes() {
        assert_eq!(runs(b"trouble"), vec![C, V, C, V]);
        assert_eq!(runs(b"tree"), vec![C, V]);
        assert_eq!(runs(b"aaa"), vec![V]);
        assert!(runs(b"").is_empty());
    }

    #[test]
    fn measure_zero() {
        for word in ["", "tr", "ee", "tree", "y", "by"] {
            assert_eq!(measure(word.as_bytes()), 0, "{word}");
        }
    }

    #[test]
    fn measure_one() {
        for word in ["trouble", "oats", "trees", "ivy", "agr", "rel"] {
            assert_eq!(measure(word.as_bytes()), 1, "{word}");
        }
    }

    #[test]
    fn measure_two() {
        // A trailing consonant run is never trimmed, so the plural adds a pair.
        for word in ["troubles", "private", "oaten", "orrery", "relat"] {
            assert_eq!(measure(word.as_bytes()), 2, "{word}");
        }
    }

    #[test]
    fn measure_counts_y_as_vowel_after_consonant() {
        // s y z y g y -> C V C V C V
        assert_eq!(measure(b"syzygy"), 2);
    }
}
