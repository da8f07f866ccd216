pub mod diversify;
pub mod views;

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::article::Article;
use crate::scoring::{
    content_similarity, exact_tag_matches, freshness_score, popularity_score, relevance_score,
};
use crate::types::recommendation::{
    Reason, Recommendation, RecommendError, RecommendOptions, MODERATE_LENGTH_BONUS,
    SIMILARITY_WEIGHT, TAG_MATCH_BONUS,
};

pub use diversify::diversify;
pub use views::{latest_posts, personalized_recommendations, popular_posts, related_posts};

/// Signal levels below these thresholds are too weak to mention as reasons.
const TRENDING_THRESHOLD: f64 = 0.5;
const FRESHNESS_THRESHOLD: f64 = 0.7;
const RELEVANCE_THRESHOLD: f64 = 0.3;
const SIMILARITY_THRESHOLD: f64 = 0.3;

/// Reading times in this range earn the moderate-length bonus.
const MODERATE_LENGTH_MINUTES: std::ops::RangeInclusive<u32> = 3..=15;

const MAX_REASONS: usize = 3;

/// The composite ranker: blends popularity, freshness, and tag relevance
/// into one score per candidate, with content similarity against the
/// currently-viewed article always mixed in at a fixed weight when one is
/// resolvable.
///
/// Stateless across calls; holds only its configuration.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    options: RecommendOptions,
}

impl Recommender {
    pub fn new(options: RecommendOptions) -> Self {
        Recommender { options }
    }

    /// Rank `candidates` and return the top `max_results`, descending by
    /// blended score. Ties keep the candidates' input order.
    ///
    /// An empty candidate list yields an empty result. A `current_article`
    /// id that does not resolve within `candidates` is ignored, tolerating
    /// stale contexts.
    pub fn recommend(
        &self,
        candidates: &[Article],
        now: DateTime<Utc>,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        self.options.validate()?;

        let current = self
            .options
            .current_article
            .as_ref()
            .and_then(|id| candidates.iter().find(|a| &a.id == id));

        let reference_tags = self.reference_tags(current);

        // Scoring phase. The current article is a relevance anchor, never
        // a candidate.
        let mut scored: Vec<Recommendation> = candidates
            .iter()
            .filter(|article| current.map_or(true, |c| article.id != c.id))
            .map(|article| self.score_candidate(article, current, &reference_tags, now))
            .collect();

        // Ordering phase: stable sort, descending score, input order on ties.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        debug_assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));

        scored.truncate(self.options.max_results);
        Ok(scored)
    }

    /// Union of the user's tag affinities and the current article's tags,
    /// deduplicated case-insensitively so the relevance denominator is not
    /// inflated.
    fn reference_tags(&self, current: Option<&Article>) -> Vec<String> {
        let mut reference: Vec<String> = self.options.user_tags.clone();
        if let Some(article) = current {
            for tag in &article.tags {
                let lower = tag.to_lowercase();
                if !reference.iter().any(|r| r.to_lowercase() == lower) {
                    reference.push(tag.clone());
                }
            }
        }
        reference
    }

    fn score_candidate(
        &self,
        article: &Article,
        current: Option<&Article>,
        reference_tags: &[String],
        now: DateTime<Utc>,
    ) -> Recommendation {
        // Each entry is (contribution to the blend, reason). Contributions
        // decide which reasons survive the cap.
        let mut contributions: Vec<(f64, Reason)> = Vec::new();
        let mut score = 0.0;

        if self.options.include_popularity {
            let popularity = popularity_score(&article.engagement);
            score += popularity * self.options.weights.popularity;
            if popularity > TRENDING_THRESHOLD {
                contributions.push((popularity * self.options.weights.popularity, Reason::Trending));
            }
        }

        if self.options.include_freshness {
            let freshness = freshness_score(article.published_at, now, self.options.decay_rate);
            score += freshness * self.options.weights.freshness;
            if freshness > FRESHNESS_THRESHOLD {
                contributions.push((
                    freshness * self.options.weights.freshness,
                    Reason::RecentlyPublished,
                ));
            }
        }

        if self.options.include_relevance {
            let relevance = relevance_score(&article.tags, reference_tags);
            score += relevance * self.options.weights.relevance;
            if relevance > RELEVANCE_THRESHOLD {
                contributions.push((
                    relevance * self.options.weights.relevance,
                    Reason::MatchesInterests,
                ));
            }
        }

        // Context-aware boost: always on when a current article resolved,
        // independent of the include flags.
        if let Some(current) = current {
            let similarity = content_similarity(&article.content, &current.content);
            score += similarity * SIMILARITY_WEIGHT;
            if similarity > SIMILARITY_THRESHOLD {
                contributions.push((similarity * SIMILARITY_WEIGHT, Reason::SimilarToCurrent));
            }
        }

        let shared = exact_tag_matches(&article.tags, reference_tags);
        if !shared.is_empty() {
            let bonus = TAG_MATCH_BONUS * shared.len() as f64;
            score += bonus;
            contributions.push((bonus, Reason::SharedTags(shared)));
        }

        if article
            .reading_time_minutes
            .is_some_and(|minutes| MODERATE_LENGTH_MINUTES.contains(&minutes))
        {
            score += MODERATE_LENGTH_BONUS;
            contributions.push((MODERATE_LENGTH_BONUS, Reason::ComfortableLength));
        }

        // Strongest contribution first; stable sort keeps signal order on ties.
        contributions.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        contributions.truncate(MAX_REASONS);

        let score = score.clamp(0.0, 1.0);
        debug_assert!((0.0..=1.0).contains(&score), "blended score {score} out of range");

        Recommendation {
            id: article.id.clone(),
            score,
            reasons: contributions.into_iter().map(|(_, reason)| reason).collect(),
        }
    }
}
