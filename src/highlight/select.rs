use std::cmp::Reverse;

use itertools::Itertools;

use super::sentences::ScoredSentence;

/// The `max` highest-scoring sentences, best first, formatted for output.
///
/// Order among sentences with equal counts is unspecified.
pub fn select_highlights(scored: Vec<ScoredSentence>, max: usize) -> Vec<String> {
    scored
        .into_iter()
        .sorted_unstable_by_key(|s| Reverse(s.count))
        .take(max)
        .map(|s| format_highlight(&s.text))
        .collect()
}

/// Trim surrounding whitespace and terminate with a single period.
pub fn format_highlight(sentence: &str) -> String {
    format!("{}.", sentence.trim())
}
