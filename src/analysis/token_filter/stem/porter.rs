//! Porter stemming algorithm.
//!
//! Five ordered steps of suffix-rewriting rules reduce an English word to its
//! stem. Within a table-driven step the rules are tried in order and the
//! first applicable rule fires; there is no backtracking and no rule
//! combination. Step 1b is a guarded chain rather than a plain table: a word
//! ending in `eed` ends the step whether or not the measure gate passes,
//! which is what keeps `feed` unchanged.
//!
//! The linguistic predicates (measure, vowel presence, double consonant, CVC
//! ending) are explicit character scans. Vowels are exactly `a e i o u`; `y`
//! is treated as a consonant throughout, matching the corpus this stemmer
//! was tuned on.
//!
//! # Examples
//!
//! ```
//! use newsvec::analysis::token_filter::stem::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("caresses"), "caress");
//! assert_eq!(stemmer.stem("motoring"), "motor");
//! assert_eq!(stemmer.stem("conflated"), "conflat");
//! ```

/// Whether a byte is one of the five vowels.
fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Whether the stem contains at least one vowel.
fn contains_vowel(stem: &str) -> bool {
    stem.bytes().any(is_vowel)
}

/// Porter's measure `m`: the number of vowel-run to consonant-run
/// transitions in the stem, after an optional leading consonant run.
fn measure(stem: &str) -> usize {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    let mut m = 0;
    let mut i = 0;

    // Skip the optional leading consonant run.
    while i < n && !is_vowel(bytes[i]) {
        i += 1;
    }

    loop {
        while i < n && is_vowel(bytes[i]) {
            i += 1;
        }
        if i == n {
            break;
        }
        m += 1;
        while i < n && !is_vowel(bytes[i]) {
            i += 1;
        }
    }

    m
}

/// Whether the stem ends in two equal consonant letters.
fn ends_double_consonant(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    n >= 2
        && bytes[n - 1] == bytes[n - 2]
        && bytes[n - 1].is_ascii_alphabetic()
        && !is_vowel(bytes[n - 1])
}

/// Whether the stem ends consonant-vowel-consonant, where the final
/// consonant is not `w`, `x` or `y`.
fn ends_cvc(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    n >= 3
        && !is_vowel(bytes[n - 3])
        && is_vowel(bytes[n - 2])
        && !is_vowel(bytes[n - 1])
        && !matches!(bytes[n - 1], b'w' | b'x' | b'y')
}

/// Gate on the measure of the stem left after removing a rule's suffix.
#[derive(Debug, Clone, Copy)]
enum MeasureGate {
    Any,
    AtLeast(usize),
    Exactly(usize),
}

/// Gate on the CVC ending of the stem.
#[derive(Debug, Clone, Copy)]
enum CvcGate {
    Ignore,
    Forbidden,
}

/// One suffix-rewriting rule.
///
/// A rule is applicable when the word is strictly longer than the suffix,
/// ends with it, and the remaining stem satisfies every configured
/// predicate. Rules are static data; an invalid rule cannot exist at
/// runtime.
#[derive(Debug, Clone, Copy)]
struct Rule {
    suffix: &'static str,
    replacement: &'static str,
    measure: MeasureGate,
    /// If non-empty, the stem's final letter must be one of these.
    last_letters: &'static [u8],
    /// If set, the stem must contain a vowel.
    needs_vowel: bool,
    cvc: CvcGate,
}

impl Rule {
    /// An unconditional suffix rewrite.
    const fn simple(suffix: &'static str, replacement: &'static str) -> Self {
        Rule {
            suffix,
            replacement,
            measure: MeasureGate::Any,
            last_letters: &[],
            needs_vowel: false,
            cvc: CvcGate::Ignore,
        }
    }

    /// A suffix rewrite gated on a minimum stem measure.
    const fn measured(suffix: &'static str, replacement: &'static str, min: usize) -> Self {
        Rule {
            suffix,
            replacement,
            measure: MeasureGate::AtLeast(min),
            last_letters: &[],
            needs_vowel: false,
            cvc: CvcGate::Ignore,
        }
    }

    /// The stem this rule leaves behind, if the rule is applicable.
    fn applies<'a>(&self, word: &'a str) -> Option<&'a str> {
        if word.len() <= self.suffix.len() {
            return None;
        }
        let stem = word.strip_suffix(self.suffix)?;

        match self.measure {
            MeasureGate::Any => {}
            MeasureGate::AtLeast(min) => {
                if measure(stem) < min {
                    return None;
                }
            }
            MeasureGate::Exactly(m) => {
                if measure(stem) != m {
                    return None;
                }
            }
        }

        if !self.last_letters.is_empty() {
            let last = *stem.as_bytes().last()?;
            if !self.last_letters.contains(&last) {
                return None;
            }
        }

        if self.needs_vowel && !contains_vowel(stem) {
            return None;
        }

        if matches!(self.cvc, CvcGate::Forbidden) && ends_cvc(stem) {
            return None;
        }

        Some(stem)
    }
}

/// Apply the first applicable rule of a step, or leave the word unchanged.
fn apply_step(rules: &[Rule], word: &str) -> String {
    for rule in rules {
        if let Some(stem) = rule.applies(word) {
            return format!("{stem}{}", rule.replacement);
        }
    }
    word.to_string()
}

/// Step 1a: plural normalization.
const STEP_1A: &[Rule] = &[
    Rule::simple("sses", "ss"),
    Rule::simple("ies", "i"),
    Rule::simple("ss", "ss"),
    Rule::simple("s", ""),
];

/// Step 1c: terminal y.
const STEP_1C: &[Rule] = &[Rule {
    suffix: "y",
    replacement: "i",
    measure: MeasureGate::Any,
    last_letters: &[],
    needs_vowel: true,
    cvc: CvcGate::Ignore,
}];

/// Step 2: derivational suffixes, applicable when the stem has m > 0.
const STEP_2: &[Rule] = &[
    Rule::measured("ational", "ate", 1),
    Rule::measured("tional", "tion", 1),
    Rule::measured("enci", "ence", 1),
    Rule::measured("anci", "ance", 1),
    Rule::measured("izer", "ize", 1),
    Rule::measured("abli", "able", 1),
    Rule::measured("alli", "al", 1),
    Rule::measured("entli", "ent", 1),
    Rule::measured("eli", "e", 1),
    Rule::measured("ousli", "ous", 1),
    Rule::measured("ization", "ize", 1),
    Rule::measured("ation", "ate", 1),
    Rule::measured("ator", "ate", 1),
    Rule::measured("alism", "al", 1),
    Rule::measured("iveness", "ive", 1),
    Rule::measured("fulness", "ful", 1),
    Rule::measured("ousness", "ous", 1),
    Rule::measured("aliti", "al", 1),
    Rule::measured("iviti", "ive", 1),
    Rule::measured("biliti", "ble", 1),
];

/// Step 3: further derivational suffixes, m > 0.
const STEP_3: &[Rule] = &[
    Rule::measured("icate", "ic", 1),
    Rule::measured("ative", "", 1),
    Rule::measured("alize", "al", 1),
    Rule::measured("icite", "ic", 1),
    Rule::measured("ical", "ic", 1),
    Rule::measured("ful", "", 1),
    Rule::measured("ness", "", 1),
];

/// Step 4: suffix stripping, m > 1. `ion` additionally requires the stem to
/// end in `s` or `t`.
const STEP_4: &[Rule] = &[
    Rule::measured("al", "", 2),
    Rule::measured("ance", "", 2),
    Rule::measured("ence", "", 2),
    Rule::measured("er", "", 2),
    Rule::measured("ic", "", 2),
    Rule::measured("able", "", 2),
    Rule::measured("ible", "", 2),
    Rule::measured("ant", "", 2),
    Rule::measured("ement", "", 2),
    Rule::measured("ment", "", 2),
    Rule::measured("ent", "", 2),
    Rule {
        suffix: "ion",
        replacement: "",
        measure: MeasureGate::AtLeast(2),
        last_letters: b"st",
        needs_vowel: false,
        cvc: CvcGate::Ignore,
    },
    Rule::measured("ou", "", 2),
    Rule::measured("ism", "", 2),
    Rule::measured("ate", "", 2),
    Rule::measured("iti", "", 2),
    Rule::measured("ous", "", 2),
    Rule::measured("ive", "", 2),
    Rule::measured("ize", "", 2),
];

/// Step 5a: terminal e, stripped when m > 1, or when m == 1 and the stem
/// does not end CVC.
const STEP_5A: &[Rule] = &[
    Rule::measured("e", "", 2),
    Rule {
        suffix: "e",
        replacement: "",
        measure: MeasureGate::Exactly(1),
        last_letters: &[],
        needs_vowel: false,
        cvc: CvcGate::Forbidden,
    },
];

/// Porter stemmer over the rule tables above.
///
/// `stem` is deterministic and pure. It is not idempotent in general:
/// stemming a stem may shorten it further.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Reduce a word to its stem.
    pub fn stem(&self, word: &str) -> String {
        if word.len() <= 2 {
            return word.to_lowercase();
        }

        let word = word.to_lowercase();
        let word = apply_step(STEP_1A, &word);
        let word = step1b(&word);
        let word = apply_step(STEP_1C, &word);
        let word = apply_step(STEP_2, &word);
        let word = apply_step(STEP_3, &word);
        let word = apply_step(STEP_4, &word);
        let word = apply_step(STEP_5A, &word);
        step5b(&word)
    }
}

/// Step 1b: past tense and progressive suffixes.
///
/// A matched `eed` suffix ends the step even when its measure gate fails;
/// falling through to the `ed` rule would turn `feed` into `fe`.
fn step1b(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("eed") {
        if !stem.is_empty() && measure(stem) > 0 {
            return format!("{stem}ee");
        }
        return word.to_string();
    }

    for suffix in ["ed", "ing"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if !stem.is_empty() && contains_vowel(stem) {
                return step1b_continuation(stem);
            }
            return word.to_string();
        }
    }

    word.to_string()
}

/// Cleanup after a fired `ed`/`ing` rule: restore a swallowed `e`, undouble
/// a final consonant, or complete a short CVC stem.
fn step1b_continuation(stem: &str) -> String {
    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        return format!("{stem}e");
    }

    if ends_double_consonant(stem) && !matches!(stem.as_bytes()[stem.len() - 1], b'l' | b's' | b'z')
    {
        return stem[..stem.len() - 1].to_string();
    }

    if measure(stem) == 1 && ends_cvc(stem) {
        return format!("{stem}e");
    }

    stem.to_string()
}

/// Step 5b: undouble a trailing `ll` when m > 1.
fn step5b(word: &str) -> String {
    if word.ends_with("ll") && measure(&word[..word.len() - 1]) > 1 {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step1a_vectors() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("caresses"), "caress");
        assert_eq!(stemmer.stem("ponies"), "poni");
        assert_eq!(stemmer.stem("caress"), "caress");
        assert_eq!(stemmer.stem("cats"), "cat");
    }

    #[test]
    fn test_step1b_vectors() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("feed"), "feed");
        assert_eq!(stemmer.stem("agreed"), "agre");
        assert_eq!(stemmer.stem("plastered"), "plaster");
        assert_eq!(stemmer.stem("bled"), "bled");
        assert_eq!(stemmer.stem("motoring"), "motor");
        assert_eq!(stemmer.stem("sing"), "sing");
    }

    #[test]
    fn test_step1b_continuation_vectors() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("conflated"), "conflat");
        assert_eq!(stemmer.stem("troubled"), "troubl");
        assert_eq!(stemmer.stem("sized"), "size");
        assert_eq!(stemmer.stem("hopping"), "hop");
        assert_eq!(stemmer.stem("tanned"), "tan");
        assert_eq!(stemmer.stem("falling"), "fall");
        assert_eq!(stemmer.stem("hissing"), "hiss");
        assert_eq!(stemmer.stem("fizzed"), "fizz");
        assert_eq!(stemmer.stem("failing"), "fail");
        assert_eq!(stemmer.stem("filing"), "file");
    }

    #[test]
    fn test_later_steps() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("flies"), "fli");
        assert_eq!(stemmer.stem("traditional"), "tradit");
        assert_eq!(stemmer.stem("itemization"), "item");
        assert_eq!(stemmer.stem("adjustable"), "adjust");
        assert_eq!(stemmer.stem("hopefulness"), "hope");
    }

    #[test]
    fn test_short_words_untouched() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("as"), "as");
        assert_eq!(stemmer.stem("is"), "is");
        assert_eq!(stemmer.stem(""), "");
    }

    #[test]
    fn test_lowercases_input() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("Motoring"), "motor");
        assert_eq!(stemmer.stem("CATS"), "cat");
    }

    #[test]
    fn test_deterministic() {
        let stemmer = PorterStemmer::new();
        for word in ["relational", "caresses", "hopping", "agreed"] {
            assert_eq!(stemmer.stem(word), stemmer.stem(word));
        }
    }

    #[test]
    fn test_measure() {
        assert_eq!(measure("tree"), 0);
        assert_eq!(measure("trees"), 1);
        assert_eq!(measure("trouble"), 1);
        assert_eq!(measure("troubles"), 2);
        assert_eq!(measure(""), 0);
        assert_eq!(measure("by"), 0);
    }

    #[test]
    fn test_cvc() {
        assert!(ends_cvc("fil"));
        assert!(ends_cvc("hop"));
        assert!(!ends_cvc("fail"));
        assert!(!ends_cvc("snow"));
        assert!(!ends_cvc("box"));
        assert!(!ends_cvc("tray"));
        assert!(!ends_cvc("io"));
    }

    #[test]
    fn test_double_consonant() {
        assert!(ends_double_consonant("hopp"));
        assert!(ends_double_consonant("fizz"));
        assert!(!ends_double_consonant("feed"));
        assert!(!ends_double_consonant("hop"));
    }
}
