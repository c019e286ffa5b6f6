//! Letter-pair similarity
//!
//! Dice coefficient over overlapping two-character windows. Rewards shared
//! character bigrams and tolerates large blocks being reordered (a moved
//! method keeps its bigrams), which is what a rename-with-edits looks like.

use std::collections::HashMap;

/// Overlapping two-character windows of `text`, duplicates preserved.
///
/// Texts with fewer than two characters have no pairs.
pub fn letter_pairs(text: &str) -> Vec<(char, char)> {
    let chars: Vec<char> = text.chars().collect();
    chars.windows(2).map(|w| (w[0], w[1])).collect()
}

/// Similarity of two normalized texts in `[0.0, 1.0]`.
///
/// `2 * |pairs(a) ∩ pairs(b)| / (|pairs(a)| + |pairs(b)|)` where the
/// intersection is a multiset intersection. When neither text has a pair the
/// score is 1.0 for equal texts and 0.0 otherwise, so two empty texts are
/// identical and an empty text shares nothing with a non-empty one.
pub fn letter_pair_similarity(a: &str, b: &str) -> f64 {
    let pairs_a = letter_pairs(a);
    let pairs_b = letter_pairs(b);

    let total = pairs_a.len() + pairs_b.len();
    if total == 0 {
        return if a == b { 1.0 } else { 0.0 };
    }

    // Remaining multiplicity of each pair on the `a` side; consumed on match.
    let mut available: HashMap<(char, char), usize> = HashMap::with_capacity(pairs_a.len());
    for pair in &pairs_a {
        *available.entry(*pair).or_insert(0) += 1;
    }

    let mut intersection = 0usize;
    for pair in &pairs_b {
        if let Some(count) = available.get_mut(pair) {
            if *count > 0 {
                *count -= 1;
                intersection += 1;
            }
        }
    }

    (2 * intersection) as f64 / total as f64
}
