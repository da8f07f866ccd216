pub mod signals;
pub mod similarity;

pub use signals::{
    exact_tag_matches, freshness_score, popularity_score, relevance_score, DEFAULT_DECAY_RATE,
};
pub use similarity::content_similarity;
