use chrono::{DateTime, Utc};

use crate::article::Engagement;

/// Default exponential decay rate for freshness scoring.
pub const DEFAULT_DECAY_RATE: f64 = 0.1;

const VIEW_WEIGHT: f64 = 0.1;
const LIKE_WEIGHT: f64 = 2.0;
const SHARE_WEIGHT: f64 = 5.0;

/// Log-compression ceiling: a weighted total of 999 saturates the score.
const POPULARITY_CEILING: f64 = 1000.0;

/// Exponential recency decay normalized to a 30-day basis.
///
/// `exp(-decay_rate * age_days / 30)`: 1.0 for a just-published article,
/// asymptotically 0 for old ones. Future publish dates clamp to age 0.
pub fn freshness_score(published_at: DateTime<Utc>, now: DateTime<Utc>, decay_rate: f64) -> f64 {
    let age_days = (now - published_at).num_seconds() as f64 / 86_400.0;
    let age_days = age_days.max(0.0);

    let score = (-decay_rate * age_days / 30.0).exp().clamp(0.0, 1.0);
    debug_assert!((0.0..=1.0).contains(&score), "freshness {score} out of range");
    score
}

/// Log-compressed weighted engagement.
///
/// Shares weigh 50x a raw view and likes 20x; active endorsement is rarer
/// and more meaningful than passive viewing. `ln(raw + 1) / ln(1000)`
/// keeps viral outliers bounded while preserving relative order among
/// typical articles.
pub fn popularity_score(engagement: &Engagement) -> f64 {
    if engagement.is_zero() {
        return 0.0;
    }

    let raw = engagement.views as f64 * VIEW_WEIGHT
        + engagement.likes as f64 * LIKE_WEIGHT
        + engagement.shares as f64 * SHARE_WEIGHT;

    let score = ((raw + 1.0).ln() / POPULARITY_CEILING.ln()).min(1.0);
    debug_assert!((0.0..=1.0).contains(&score), "popularity {score} out of range");
    score
}

/// Fuzzy tag-overlap fraction against a reference tag set.
///
/// A tag matches if it contains, or is contained by, any reference tag
/// (case-insensitive). The match count is normalized by the larger of the
/// two set sizes. Matching is plain containment, so "java" matches
/// "javascript" but an abbreviation like "js" does not. Known quirk: very
/// short tags over-match ("a" matches "java"); preserved as-is.
pub fn relevance_score(tags: &[String], reference: &[String]) -> f64 {
    if tags.is_empty() || reference.is_empty() {
        return 0.0;
    }

    let reference_lower: Vec<String> = reference.iter().map(|t| t.to_lowercase()).collect();
    let matches = tags
        .iter()
        .filter(|tag| {
            let tag = tag.to_lowercase();
            reference_lower
                .iter()
                .any(|r| tag.contains(r.as_str()) || r.contains(tag.as_str()))
        })
        .count();

    let score = matches as f64 / tags.len().max(reference.len()) as f64;
    debug_assert!((0.0..=1.0).contains(&score), "relevance {score} out of range");
    score
}

/// Exact (case-insensitive) tag intersection, used for the additive
/// shared-tag bonus and its reason. Returns the article's own casing.
pub fn exact_tag_matches(tags: &[String], reference: &[String]) -> Vec<String> {
    let reference_lower: Vec<String> = reference.iter().map(|t| t.to_lowercase()).collect();
    tags.iter()
        .filter(|tag| reference_lower.iter().any(|r| *r == tag.to_lowercase()))
        .cloned()
        .collect()
}
