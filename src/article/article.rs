use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::ArticleId;
use super::engagement::Engagement;

#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("invalid publish date {raw:?}: {source}")]
    InvalidDate {
        raw: String,
        source: chrono::ParseError,
    },
}

/// The atomic unit of content, owned by the external content store.
///
/// The engine treats every passed-in article as eligible to recommend;
/// publication-status filtering is the store's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub tags: Vec<String>,
    pub content: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub engagement: Engagement,
    #[serde(default)]
    pub reading_time_minutes: Option<u32>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Article {
    pub fn new(id: ArticleId, content: impl Into<String>, published_at: DateTime<Utc>) -> Self {
        Article {
            id,
            tags: Vec::new(),
            content: content.into(),
            published_at,
            engagement: Engagement::default(),
            reading_time_minutes: None,
            category: None,
        }
    }

    /// Ingest an article whose publish date arrives as a raw string.
    ///
    /// This is the construction path for untrusted input: a malformed
    /// RFC 3339 date fails here rather than surfacing later as NaN ages.
    pub fn ingest(
        id: ArticleId,
        content: impl Into<String>,
        raw_published: &str,
    ) -> Result<Self, ArticleError> {
        let published_at = DateTime::parse_from_rfc3339(raw_published)
            .map_err(|source| ArticleError::InvalidDate {
                raw: raw_published.to_string(),
                source,
            })?
            .with_timezone(&Utc);

        Ok(Article::new(id, content, published_at))
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_engagement(mut self, views: u64, likes: u64, shares: u64) -> Self {
        self.engagement = Engagement {
            views,
            likes,
            shares,
        };
        self
    }

    pub fn with_reading_time(mut self, minutes: u32) -> Self {
        self.reading_time_minutes = Some(minutes);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
