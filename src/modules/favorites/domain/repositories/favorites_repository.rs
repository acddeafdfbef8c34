use async_trait::async_trait;

use crate::{
    modules::favorites::domain::entities::{FavoriteRecord, UserSession},
    shared::errors::AppResult,
};

/// Remote store of favorite records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoritesRepository: Send + Sync {
    /// Every record of the session's user
    async fn list_for_user(&self, session: &UserSession) -> AppResult<Vec<FavoriteRecord>>;

    /// Create or replace one record
    async fn save(&self, session: &UserSession, record: &FavoriteRecord) -> AppResult<()>;

    /// Delete one record by its composite key
    async fn remove(&self, session: &UserSession, anime_id: i64) -> AppResult<()>;
}
