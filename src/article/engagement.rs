use serde::{Deserialize, Serialize};

/// Raw engagement counts. Missing counts are zero; the store may omit
/// the whole block for articles that have never been served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Engagement {
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub shares: u64,
}

impl Engagement {
    pub fn is_zero(&self) -> bool {
        self.views == 0 && self.likes == 0 && self.shares == 0
    }
}
