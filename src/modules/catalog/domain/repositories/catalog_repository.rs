use async_trait::async_trait;

use crate::{
    modules::catalog::domain::{
        entities::{AnimeDetail, ResultPage},
        services::CatalogQueryVariables,
    },
    shared::errors::AppResult,
};

/// Data source for the media catalog
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Run one search page with already planned variables
    async fn search_media(&self, variables: &CatalogQueryVariables) -> AppResult<ResultPage>;

    /// Full detail for one title, `None` when the catalog has no such entry
    async fn get_anime_detail(&self, id: i64) -> AppResult<Option<AnimeDetail>>;
}
