// Letter classification for English stemming
//
// The letters a, e, i, o, u are always vowels. The letter y depends on its
// left neighbour: it is a consonant at the start of a word or after a vowel,
// and a vowel after a consonant ("yellow" vs. "happy"). The class of y is
// decided by the *class* of the previous letter, not by its identity, so
// "syzygy" alternates consonant/vowel all the way through. Classes are
// computed as a left fold that carries the previous class.

/// Letters that are vowels regardless of position.
pub const VOWELS: &[u8] = b"aeiou";

/// Vowel/consonant class of a single letter within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    Vowel,
    Consonant,
}

impl LetterClass {
    pub fn is_vowel(self) -> bool {
        self == LetterClass::Vowel
    }

    pub fn is_consonant(self) -> bool {
        self == LetterClass::Consonant
    }
}

/// Check whether a letter is one of a, e, i, o, u.
pub fn is_plain_vowel(letter: u8) -> bool {
    VOWELS.contains(&letter)
}

/// Class of `letter` given the class of the letter before it (`None` at the
/// start of the word).
fn class_after(previous: Option<LetterClass>, letter: u8) -> LetterClass {
    if is_plain_vowel(letter) {
        return LetterClass::Vowel;
    }
    if letter == b'y' && previous == Some(LetterClass::Consonant) {
        return LetterClass::Vowel;
    }
    LetterClass::Consonant
}

/// Iterate over the classes of every letter of `word`, left to right.
pub fn letter_classes(word: &[u8]) -> impl Iterator<Item = LetterClass> + '_ {
    word.iter().scan(None, |previous, &letter| {
        let class = class_after(*previous, letter);
        *previous = Some(class);
        Some(class)
    })
}

/// Classify every letter of `word`.
pub fn classify_letters(word: &[u8]) -> Vec<LetterClass> {
    letter_classes(word).collect()
}

/// Classify the letter at `index`.
///
/// Returns `None` when `index` is past the end of the word.
pub fn classify(word: &[u8], index: usize) -> Option<LetterClass> {
    letter_classes(word).nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterClass::{Consonant as C, Vowel as V};

    #[test]
    fn plain_vowels() {
        for &v in VOWELS {
            assert_eq!(classify(&[v], 0), Some(V));
        }
        assert_eq!(classify(b"b", 0), Some(C));
        assert_eq!(classify(b"z", 0), Some(C));
    }

    #[test]
    fn y_after_consonant_is_vowel() {
        assert_eq!(classify(b"happy", 4), Some(V));
        assert_eq!(classify(b"sky", 2), Some(V));
    }

    #[test]
    fn y_at_start_is_consonant() {
        assert_eq!(classify(b"yellow", 0), Some(C));
        assert_eq!(classify(b"y", 0), Some(C));
    }

    #[test]
    fn y_after_vowel_is_consonant() {
        assert_eq!(classify(b"toy", 2), Some(C));
        assert_eq!(classify(b"player", 3), Some(C));
    }

    #[test]
    fn y_depends_on_previous_class_not_letter() {
        // The first y is a consonant, so the second y follows a consonant.
        assert_eq!(classify_letters(b"ayy"), vec![V, C, V]);
        assert_eq!(classify_letters(b"syzygy"), vec![C, V, C, V, C, V]);
    }

    #[test]
    fn classify_out_of_range() {
        assert_eq!(classify(b"tree", 4), None);
        assert_eq!(classify(b"", 0), None);
    }

    #[test]
    fn classify_letters_tree() {
        assert_eq!(classify_letters(b"tree"), vec![C, C, V, V]);
        assert!(classify_letters(b"").is_empty());
    }
}
