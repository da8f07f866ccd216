pub mod identifiers;
pub mod recommendation;

pub use identifiers::ArticleId;
pub use recommendation::{
    RankedArticle, Reason, Recommendation, RecommendError, RecommendOptions, SignalWeights,
    UserContext,
};
