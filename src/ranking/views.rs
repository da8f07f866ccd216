//! Convenience views: single-signal sorts and the two fixed-weight
//! blends (related, personalized) built atop the same leaf scorers as
//! the composite ranker.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::article::Article;
use crate::scoring::{
    content_similarity, freshness_score, popularity_score, relevance_score, DEFAULT_DECAY_RATE,
};
use crate::types::recommendation::{RankedArticle, UserContext};

const RELATED_SIMILARITY_WEIGHT: f64 = 0.5;

const PERSONAL_RELEVANCE_WEIGHT: f64 = 0.4;
const PERSONAL_READING_TIME_WEIGHT: f64 = 0.2;
const PERSONAL_CATEGORY_WEIGHT: f64 = 0.3;
const PERSONAL_FRESHNESS_WEIGHT: f64 = 0.1;

/// Linear falloff window for reading-time preference, in minutes.
const READING_TIME_WINDOW: f64 = 20.0;

/// Articles sorted by popularity score, descending, input order on ties.
pub fn popular_posts(articles: &[Article], limit: usize) -> Vec<RankedArticle<'_>> {
    let mut ranked: Vec<RankedArticle> = articles
        .iter()
        .map(|article| RankedArticle {
            article,
            score: popularity_score(&article.engagement),
        })
        .collect();

    sort_descending(&mut ranked);
    ranked.truncate(limit);
    ranked
}

/// Articles sorted by publish date, newest first, input order on ties.
pub fn latest_posts(articles: &[Article], limit: usize) -> Vec<&Article> {
    let mut sorted: Vec<&Article> = articles.iter().collect();
    sorted.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    sorted.truncate(limit);
    sorted
}

/// Candidates scored against a target article by tag relevance plus
/// half-weighted content similarity. The target's own id never appears.
///
/// A simpler two-signal variant of the composite ranker, intentionally
/// without its weight-configuration surface.
pub fn related_posts<'a>(
    target: &Article,
    candidates: &'a [Article],
    limit: usize,
) -> Vec<RankedArticle<'a>> {
    let mut ranked: Vec<RankedArticle> = candidates
        .iter()
        .filter(|article| article.id != target.id)
        .map(|article| {
            let relevance = relevance_score(&article.tags, &target.tags);
            let similarity = content_similarity(&article.content, &target.content);
            RankedArticle {
                article,
                score: relevance + RELATED_SIMILARITY_WEIGHT * similarity,
            }
        })
        .collect();

    sort_descending(&mut ranked);
    ranked.truncate(limit);
    ranked
}

/// Blend emphasizing demonstrated preference over general quality signals:
/// tag affinity 0.4, reading-time closeness 0.2, category match 0.3,
/// freshness 0.1. Already-viewed articles are filtered out first.
pub fn personalized_recommendations<'a>(
    articles: &'a [Article],
    context: &UserContext,
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<RankedArticle<'a>> {
    let mut ranked: Vec<RankedArticle> = articles
        .iter()
        .filter(|article| !context.viewed.contains(&article.id))
        .map(|article| {
            let relevance = relevance_score(&article.tags, &context.tag_affinities);
            let reading_time = reading_time_closeness(article, context);
            let category = category_match(article, context);
            let freshness = freshness_score(article.published_at, now, DEFAULT_DECAY_RATE);

            let score = PERSONAL_RELEVANCE_WEIGHT * relevance
                + PERSONAL_READING_TIME_WEIGHT * reading_time
                + PERSONAL_CATEGORY_WEIGHT * category
                + PERSONAL_FRESHNESS_WEIGHT * freshness;

            RankedArticle { article, score }
        })
        .collect();

    sort_descending(&mut ranked);
    ranked.truncate(limit);
    ranked
}

/// 1.0 at the preferred duration, falling linearly to 0.0 at twenty
/// minutes away. Missing either side contributes nothing.
fn reading_time_closeness(article: &Article, context: &UserContext) -> f64 {
    match (article.reading_time_minutes, context.preferred_reading_minutes) {
        (Some(actual), Some(preferred)) => {
            let distance = (f64::from(actual) - f64::from(preferred)).abs();
            1.0 - distance.min(READING_TIME_WINDOW) / READING_TIME_WINDOW
        }
        _ => 0.0,
    }
}

fn category_match(article: &Article, context: &UserContext) -> f64 {
    match &article.category {
        Some(category) => {
            let category = category.to_lowercase();
            if context
                .preferred_categories
                .iter()
                .any(|preferred| preferred.to_lowercase() == category)
            {
                1.0
            } else {
                0.0
            }
        }
        None => 0.0,
    }
}

fn sort_descending(ranked: &mut [RankedArticle<'_>]) {
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    debug_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
}
