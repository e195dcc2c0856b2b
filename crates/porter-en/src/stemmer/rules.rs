// Suffix rule tables
//
// Each table is an ordered slice. Within a table the first rule whose suffix
// matches *and* whose condition holds on the remaining stem is applied; a
// matching suffix with a failing condition does not end the scan. Order, not
// suffix length, decides priority, so these must stay slices.

use porter_core::{Word, contains_vowel, measure};

/// Side condition evaluated on the stem that precedes a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// No condition.
    Always,
    /// `measure(stem) > n`.
    MeasureAbove(usize),
    /// The stem has a vowel strictly inside it.
    ContainsVowel,
}

impl Condition {
    pub fn holds(self, stem: &[u8]) -> bool {
        match self {
            Condition::Always => true,
            Condition::MeasureAbove(n) => measure(stem) > n,
            Condition::ContainsVowel => contains_vowel(stem),
        }
    }
}

/// A (suffix, replacement, condition) rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
    pub condition: Condition,
}

impl SuffixRule {
    pub const fn new(suffix: &'static str, replacement: &'static str, condition: Condition) -> Self {
        Self {
            suffix,
            replacement,
            condition,
        }
    }

    /// Check whether `word` ends with the suffix and the stem satisfies the condition.
    pub fn matches(&self, word: &Word) -> bool {
        word.ends_with(self.suffix) && self.condition.holds(word.stem(self.suffix.len()))
    }

    fn apply(&self, word: &mut Word) {
        word.replace_suffix(self.suffix.len(), self.replacement);
    }
}

/// Apply the first matching rule of `rules` to `word`.
///
/// Returns the rule that fired, or `None` if the word was left unchanged.
pub fn apply_first<'r>(rules: &'r [SuffixRule], word: &mut Word) -> Option<&'r SuffixRule> {
    let rule = rules.iter().find(|rule| rule.matches(word))?;
    rule.apply(word);
    Some(rule)
}

const fn always(suffix: &'static str, replacement: &'static str) -> SuffixRule {
    SuffixRule::new(suffix, replacement, Condition::Always)
}

const fn m_above(n: usize, suffix: &'static str, replacement: &'static str) -> SuffixRule {
    SuffixRule::new(suffix, replacement, Condition::MeasureAbove(n))
}

const fn with_vowel(suffix: &'static str, replacement: &'static str) -> SuffixRule {
    SuffixRule::new(suffix, replacement, Condition::ContainsVowel)
}

/// Plurals. "ss" maps to itself so that "caress" is not caught by "s".
pub const STEP_1A: &[SuffixRule] = &[
    always("sses", "ss"),
    always("ies", "i"),
    always("ss", "ss"),
    always("s", ""),
];

/// "eed" keeps a long vowel when the stem is long enough.
pub const STEP_1B_EED: &[SuffixRule] = &[m_above(0, "eed", "ee")];

/// Past tense and progressive forms; a successful strip is followed by cleanup.
pub const STEP_1B_STRIP: &[SuffixRule] = &[with_vowel("ed", ""), with_vowel("ing", "")];

/// Restore an "e" lost by stripping ("conflat" -> "conflate").
pub const STEP_1B_RESTORE: &[SuffixRule] = &[
    always("at", "ate"),
    always("bl", "ble"),
    always("iz", "ize"),
];

pub const STEP_1C: &[SuffixRule] = &[with_vowel("y", "i")];

/// Derivational suffixes mapped to shorter ones.
pub const STEP_2: &[SuffixRule] = &[
    m_above(0, "ational", "ate"),
    m_above(0, "tional", "tion"),
    m_above(0, "enci", "ence"),
    m_above(0, "anci", "ance"),
    m_above(0, "izer", "ize"),
    m_above(0, "bli", "ble"),
    m_above(0, "alli", "al"),
    m_above(0, "entli", "ent"),
    m_above(0, "eli", "e"),
    m_above(0, "ousli", "ous"),
    m_above(0, "ization", "ize"),
    m_above(0, "ation", "ate"),
    m_above(0, "ator", "ate"),
    m_above(0, "alism", "al"),
    m_above(0, "iveness", "ive"),
    m_above(0, "fulness", "ful"),
    m_above(0, "ousness", "ous"),
    m_above(0, "aliti", "al"),
    m_above(0, "iviti", "ive"),
    m_above(0, "biliti", "ble"),
    m_above(0, "logi", "log"),
];

pub const STEP_3: &[SuffixRule] = &[
    m_above(0, "icate", "ic"),
    m_above(0, "ative", ""),
    m_above(0, "alize", "al"),
    m_above(0, "iciti", "ic"),
    m_above(0, "ical", "ic"),
    m_above(0, "ful", ""),
    m_above(0, "ness", ""),
];

/// Suffix removal on long stems.
pub const STEP_4: &[SuffixRule] = &[
    m_above(1, "al", ""),
    m_above(1, "ance", ""),
    m_above(1, "ence", ""),
    m_above(1, "er", ""),
    m_above(1, "ic", ""),
    m_above(1, "able", ""),
    m_above(1, "ible", ""),
    m_above(1, "ant", ""),
    m_above(1, "ement", ""),
    m_above(1, "ment", ""),
    m_above(1, "ent", ""),
    m_above(1, "ou", ""),
    m_above(1, "tion", "t"),
    m_above(1, "sion", "s"),
    m_above(1, "ism", ""),
    m_above(1, "ate", ""),
    m_above(1, "iti", ""),
    m_above(1, "ous", ""),
    m_above(1, "ive", ""),
    m_above(1, "ize", ""),
];
