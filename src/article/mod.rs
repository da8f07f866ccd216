mod article;
mod engagement;

pub use article::{Article, ArticleError};
pub use engagement::Engagement;
