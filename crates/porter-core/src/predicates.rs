// Structural predicates used as side conditions by the suffix rules

use crate::character::{LetterClass, classify_letters, letter_classes};

/// How "ends with a double consonant" is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DoubleConsonantRule {
    /// The last two letters are both classified as consonants ("rt", "pp").
    #[default]
    ByClass,
    /// The last two letters are the same consonant ("pp", "ss", but not "rt").
    SameLetter,
}

/// Check whether `stem` has a vowel strictly inside it.
///
/// The first and last letters are not inspected, so stems shorter than
/// three letters never contain a vowel by this test.
pub fn contains_vowel(stem: &[u8]) -> bool {
    if stem.len() < 3 {
        return false;
    }
    letter_classes(stem)
        .take(stem.len() - 1)
        .skip(1)
        .any(LetterClass::is_vowel)
}

/// Check whether `word` ends with two consonants, as decided by `rule`.
pub fn ends_with_double_consonant(word: &[u8], rule: DoubleConsonantRule) -> bool {
    let [.., first, second] = word else {
        return false;
    };
    if rule == DoubleConsonantRule::SameLetter && first != second {
        return false;
    }
    let classes = classify_letters(word);
    classes[classes.len() - 2..]
        .iter()
        .all(|class| class.is_consonant())
}

/// Check whether `word` ends consonant-vowel-consonant where the final
/// consonant is not w, x or y ("hop", "fil", but not "snow", "box", "play").
pub fn ends_with_cvc(word: &[u8]) -> bool {
    let [.., last] = word else {
        return false;
    };
    if matches!(last, b'w' | b'x' | b'y') {
        return false;
    }
    let classes = classify_letters(word);
    matches!(
        classes[..],
        [.., LetterClass::Consonant, LetterClass::Vowel, LetterClass::Consonant]
    )
}
