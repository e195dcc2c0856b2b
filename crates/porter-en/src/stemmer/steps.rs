// Stemming pipeline: steps 1a through 5b
//
// Every step takes the current word and rewrites it in place, returning
// whether anything changed. The pipeline is a fixed table of steps run in
// order; no step looks at anything but the word and the options.

use porter_core::{DoubleConsonantRule, Word, ends_with_cvc, ends_with_double_consonant, measure};

use super::StemmerOptions;
use super::rules::{
    STEP_1A, STEP_1B_EED, STEP_1B_RESTORE, STEP_1B_STRIP, STEP_1C, STEP_2, STEP_3, STEP_4,
    apply_first,
};

type Step = fn(&mut Word, &StemmerOptions) -> bool;

/// The steps in the order they run.
const PIPELINE: [(&str, Step); 8] = [
    ("1a", step_1a),
    ("1b", step_1b),
    ("1c", step_1c),
    ("2", step_2),
    ("3", step_3),
    ("4", step_4),
    ("5a", step_5a),
    ("5b", step_5b),
];

/// Run the full pipeline on `word`.
pub fn stem_word(word: &Word, options: &StemmerOptions) -> Word {
    let mut stem = word.clone();
    for (name, step) in PIPELINE {
        if step(&mut stem, options) {
            tracing::trace!(word = %word, step = name, result = %stem, "suffix rewritten");
        }
    }
    stem
}

/// Step 1a: plurals ("caresses" -> "caress", "ponies" -> "poni").
pub fn step_1a(word: &mut Word, _options: &StemmerOptions) -> bool {
    apply_first(STEP_1A, word).is_some()
}

/// Step 1b: "eed", "ed" and "ing".
///
/// "eed" becomes "ee" when the stem has positive measure. Otherwise "ed" or
/// "ing" is removed when the stem contains a vowel, and the result is
/// tidied by [`cleanup_after_strip`].
pub fn step_1b(word: &mut Word, options: &StemmerOptions) -> bool {
    if apply_first(STEP_1B_EED, word).is_some() {
        return true;
    }
    if apply_first(STEP_1B_STRIP, word).is_some() {
        cleanup_after_strip(word, options.double_consonant);
        return true;
    }
    false
}

/// Fix up a word whose "ed"/"ing" was just removed.
///
/// - "at", "bl", "iz" get their "e" back ("conflat" -> "conflate").
/// - A double consonant other than after s, z or l is undoubled ("hopp" -> "hop").
/// - A short CVC word gets an "e" ("fil" -> "file").
pub fn cleanup_after_strip(word: &mut Word, rule: DoubleConsonantRule) {
    if apply_first(STEP_1B_RESTORE, word).is_some() {
        return;
    }

    let letters = word.as_bytes();
    if !matches!(letters.last(), Some(b's' | b'z' | b'l'))
        && ends_with_double_consonant(letters, rule)
    {
        word.replace_suffix(1, "");
        return;
    }

    let letters = word.as_bytes();
    if measure(letters) == 1 && ends_with_cvc(letters) {
        word.replace_suffix(0, "e");
    }
}

/// Step 1c: terminal "y" becomes "i" when the stem contains a vowel ("happy" -> "happi").
pub fn step_1c(word: &mut Word, _options: &StemmerOptions) -> bool {
    apply_first(STEP_1C, word).is_some()
}

/// Step 2: map double suffixes to single ones ("relational" -> "relate").
pub fn step_2(word: &mut Word, _options: &StemmerOptions) -> bool {
    apply_first(STEP_2, word).is_some()
}

/// Step 3: "-ic-", "-full", "-ness" and friends ("hopeful" -> "hope").
pub fn step_3(word: &mut Word, _options: &StemmerOptions) -> bool {
    apply_first(STEP_3, word).is_some()
}

/// Step 4: remove suffixes from stems of measure above 1 ("adjustment" -> "adjust").
pub fn step_4(word: &mut Word, _options: &StemmerOptions) -> bool {
    apply_first(STEP_4, word).is_some()
}

/// Step 5a: drop a final "e" from long stems, or from stems of measure 1
/// that do not end CVC ("probate" -> "probat", "cease" -> "ceas", but
/// "rate" stays).
pub fn step_5a(word: &mut Word, _options: &StemmerOptions) -> bool {
    if !word.ends_with("e") {
        return false;
    }
    let stem = word.stem(1);
    let m = measure(stem);
    if m > 1 || (m == 1 && !ends_with_cvc(stem)) {
        word.replace_suffix(1, "");
        return true;
    }
    false
}

/// Step 5b: "ll" -> "l" on long words ("controll" -> "control").
///
/// Unlike the other steps the measure is taken on the whole word.
pub fn step_5b(word: &mut Word, options: &StemmerOptions) -> bool {
    let letters = word.as_bytes();
    if letters.last() == Some(&b'l')
        && measure(letters) > 1
        && ends_with_double_consonant(letters, options.double_consonant)
    {
        word.replace_suffix(1, "");
        return true;
    }
    false
}
