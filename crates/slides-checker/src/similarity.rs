//! Fuzzy similarity between expected and provided slide text
//!
//! The score is a partial ratio: the shorter string is compared against every
//! equal-length window of the longer string and the best normalized
//! Levenshtein similarity is reported on a 0-100 scale. A score of 100 is
//! only produced when the shorter string occurs verbatim in the longer one,
//! so anything in the open interval (90, 100) is a near miss.

/// Lower bound (exclusive) of the "probable typo" band
pub const TYPO_THRESHOLD: u8 = 90;

/// Score the similarity of `a` and `b` in `[0, 100]`.
///
/// Empty input scores 0.
pub fn similarity(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if shorter.is_empty() {
        return 0;
    }

    let needle: String = shorter.iter().collect();
    let mut best = 0.0_f64;

    for window in longer.windows(shorter.len()) {
        let candidate: String = window.iter().collect();
        if candidate == needle {
            return 100;
        }
        best = best.max(strsim::normalized_levenshtein(&needle, &candidate));
    }

    // Floor so that only verbatim containment reaches 100.
    ((best * 100.0).floor() as u8).min(99)
}

/// True when a score indicates a probable typo rather than a match or a miss.
pub fn is_probable_typo(score: u8) -> bool {
    TYPO_THRESHOLD < score && score < 100
}
