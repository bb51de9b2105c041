use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use super::buzzwords::buzzword_count;
use crate::settings::Settings;

static SENTENCE_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// A sentence fragment and the number of distinct buzzwords it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence {
    /// Original text, untrimmed, without its terminal punctuation.
    pub text: String,
    pub count: usize,
}

/// Split a review on `.`, `!` and `?`, dropping empty fragments.
pub fn split_sentences(review: &str) -> impl Iterator<Item = &str> {
    SENTENCE_END_RE.split(review).filter(|s| !s.is_empty())
}

/// Every fragment of `review` with at least one buzzword, in review order.
pub fn score_review(review: &str) -> Vec<ScoredSentence> {
    split_sentences(review)
        .filter_map(|sentence| {
            let count = buzzword_count(sentence);
            (count > 0).then(|| ScoredSentence {
                text: sentence.to_string(),
                count,
            })
        })
        .collect()
}

/// Score all reviews, keeping review order then fragment order.
#[cfg(feature = "rayon")]
pub fn score_reviews(reviews: &[String], settings: &Settings) -> Vec<ScoredSentence> {
    if reviews.len() < settings.parallel_threshold {
        return score_sequential(reviews);
    }
    debug!("scoring {} reviews in parallel", reviews.len());
    reviews
        .par_iter()
        .map(|r| score_review(r))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

#[cfg(not(feature = "rayon"))]
pub fn score_reviews(reviews: &[String], _settings: &Settings) -> Vec<ScoredSentence> {
    score_sequential(reviews)
}

fn score_sequential(reviews: &[String]) -> Vec<ScoredSentence> {
    debug!("scoring {} reviews", reviews.len());
    reviews.iter().flat_map(|r| score_review(r)).collect()
}
