pub mod buzzwords;
pub mod select;
pub mod sentences;

use tracing::info;

use crate::settings::Settings;

/// Score reviews, then select the top `max` as formatted highlights.
pub fn review_highlights(reviews: &[String], max: usize, settings: &Settings) -> Vec<String> {
    let scored = sentences::score_reviews(reviews, settings);
    info!(
        reviews = reviews.len(),
        candidates = scored.len(),
        max,
        "scored reviews"
    );
    select::select_highlights(scored, max)
}

// ── Tests ──
