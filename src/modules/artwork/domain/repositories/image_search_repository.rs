use async_trait::async_trait;

use crate::{modules::artwork::domain::entities::ImageCandidate, shared::errors::AppResult};

/// Free-text TV search against the image metadata service
#[async_trait]
pub trait ImageSearchRepository: Send + Sync {
    /// Candidates in upstream relevance order; empty when nothing matches
    async fn search_tv(&self, query: &str, language: &str) -> AppResult<Vec<ImageCandidate>>;
}
