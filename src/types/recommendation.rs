use serde::{Deserialize, Serialize};

use crate::article::Article;
use crate::types::identifiers::ArticleId;

/// Weight of the content-similarity boost applied whenever a current
/// article is resolvable. Deliberately not configurable: context-aware
/// boosting stays on even when other signals are disabled.
pub const SIMILARITY_WEIGHT: f64 = 0.2;

/// Additive bonus per exact (case-insensitive) tag shared with the
/// reference set.
pub const TAG_MATCH_BONUS: f64 = 0.1;

/// Additive bonus for reading times in [3, 15] minutes.
pub const MODERATE_LENGTH_BONUS: f64 = 0.1;

/// Blend weights for the composite ranker. Each applies only while its
/// `include_*` flag in [`RecommendOptions`] is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalWeights {
    pub popularity: f64,
    pub freshness: f64,
    pub relevance: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        SignalWeights {
            popularity: 0.4,
            freshness: 0.2,
            relevance: 0.4,
        }
    }
}

/// Per-call configuration for [`Recommender`](crate::ranking::Recommender).
///
/// A disabled signal contributes nothing to the blend and never appears in
/// the reasons list; disabling is stronger than zero-weighting.
#[derive(Debug, Clone)]
pub struct RecommendOptions {
    pub max_results: usize,
    pub weights: SignalWeights,
    pub decay_rate: f64,
    pub include_popularity: bool,
    pub include_freshness: bool,
    pub include_relevance: bool,
    pub user_tags: Vec<String>,
    pub current_article: Option<ArticleId>,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        RecommendOptions {
            max_results: 5,
            weights: SignalWeights::default(),
            decay_rate: 0.1,
            include_popularity: true,
            include_freshness: true,
            include_relevance: true,
            user_tags: Vec::new(),
            current_article: None,
        }
    }
}

impl RecommendOptions {
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_weights(mut self, weights: SignalWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_user_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_current_article(mut self, id: ArticleId) -> Self {
        self.current_article = Some(id);
        self
    }

    /// Reject non-finite configuration before any scoring happens.
    pub(crate) fn validate(&self) -> Result<(), RecommendError> {
        let checks = [
            ("popularity_weight", self.weights.popularity),
            ("freshness_weight", self.weights.freshness),
            ("relevance_weight", self.weights.relevance),
            ("decay_rate", self.decay_rate),
        ];
        for (name, value) in checks {
            if !value.is_finite() {
                return Err(RecommendError::NonFiniteWeight { name, value });
            }
        }
        Ok(())
    }
}

/// Transient per-user signals from the session layer. Never validated
/// against the catalog; unknown ids degrade gracefully.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserContext {
    pub viewed: Vec<ArticleId>,
    pub tag_affinities: Vec<String>,
    pub preferred_reading_minutes: Option<u32>,
    pub preferred_categories: Vec<String>,
}

/// Why a recommendation received its score. At most three are attached,
/// strongest contribution first, and a disabled signal is never mentioned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    Trending,
    RecentlyPublished,
    MatchesInterests,
    SimilarToCurrent,
    SharedTags(Vec<String>),
    ComfortableLength,
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reason::Trending => f.write_str("popular with other readers"),
            Reason::RecentlyPublished => f.write_str("recently published"),
            Reason::MatchesInterests => f.write_str("matches your interests"),
            Reason::SimilarToCurrent => f.write_str("similar to what you're reading"),
            Reason::SharedTags(tags) => write!(f, "shares tags: {}", tags.join(", ")),
            Reason::ComfortableLength => f.write_str("comfortable reading length"),
        }
    }
}

/// A ranked recommendation returned in the output. Fully self-contained
/// and serializable; the presentation layer looks the article back up by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: ArticleId,
    pub score: f64,
    pub reasons: Vec<Reason>,
}

/// A scored article borrowed from the caller's candidate slice, returned
/// by the convenience views that keep the full record at hand.
#[derive(Debug, Clone)]
pub struct RankedArticle<'a> {
    pub article: &'a Article,
    pub score: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("non-finite value for {name}: {value}")]
    NonFiniteWeight { name: &'static str, value: f64 },
}
