//! Favorites of the signed-in user
//!
//! Toggles are optimistic: the local set changes first, then the remote write
//! is issued, and a failed write reverts the local change.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::modules::catalog::domain::entities::MediaSummary;
use crate::modules::favorites::domain::{
    entities::{FavoriteRecord, UserSession},
    repositories::FavoritesRepository,
};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_info, log_warn};

/// One local mutation and its exact inverse
#[derive(Debug, Clone, PartialEq)]
enum FavoriteChange {
    Added(FavoriteRecord),
    Removed { index: usize, record: FavoriteRecord },
}

impl FavoriteChange {
    fn apply(&self, favorites: &mut Vec<FavoriteRecord>) {
        match self {
            FavoriteChange::Added(record) => favorites.push(record.clone()),
            FavoriteChange::Removed { record, .. } => {
                favorites.retain(|existing| existing.anime_id != record.anime_id)
            }
        }
    }

    fn revert(&self, favorites: &mut Vec<FavoriteRecord>) {
        match self {
            FavoriteChange::Added(record) => {
                favorites.retain(|existing| existing.anime_id != record.anime_id)
            }
            FavoriteChange::Removed { index, record } => {
                if !favorites.iter().any(|existing| existing.anime_id == record.anime_id) {
                    let index = (*index).min(favorites.len());
                    favorites.insert(index, record.clone());
                }
            }
        }
    }
}

#[derive(Debug)]
struct FavoritesState {
    /// Distinguishes sign-ins so a late rollback never touches a newer session
    generation: u64,
    session: UserSession,
    favorites: Vec<FavoriteRecord>,
}

pub struct FavoritesService {
    repository: Arc<dyn FavoritesRepository>,
    state: RwLock<Option<FavoritesState>>,
    sign_ins: AtomicU64,
    /// One lock per title with a toggle in flight; toggles of the same title run in order
    pending: DashMap<i64, Arc<Mutex<()>>>,
}

impl FavoritesService {
    pub fn new(repository: Arc<dyn FavoritesRepository>) -> Self {
        Self {
            repository,
            state: RwLock::new(None),
            sign_ins: AtomicU64::new(0),
            pending: DashMap::new(),
        }
    }

    /// Start a session and load its full favorite set once
    ///
    /// Returns the number of loaded favorites. On failure nobody is signed in.
    pub async fn sign_in(&self, session: UserSession) -> AppResult<usize> {
        session.validate()?;
        self.sign_out().await;
        let generation = self.sign_ins.fetch_add(1, Ordering::SeqCst) + 1;

        let records = self.repository.list_for_user(&session).await?;

        let mut favorites: Vec<FavoriteRecord> = Vec::with_capacity(records.len());
        for record in records {
            if !favorites.iter().any(|existing| existing.anime_id == record.anime_id) {
                favorites.push(record);
            }
        }

        let mut state = self.state.write().await;
        if self.sign_ins.load(Ordering::SeqCst) != generation {
            return Err(AppError::ValidationError(
                "Sign-in superseded by a newer session".to_string(),
            ));
        }

        log_info!(
            "Loaded {} favorites for user {}",
            favorites.len(),
            session.user_id
        );
        let count = favorites.len();
        *state = Some(FavoritesState {
            generation,
            session,
            favorites,
        });
        Ok(count)
    }

    /// Clear every piece of favorite state, including a sign-in still loading
    pub async fn sign_out(&self) {
        self.sign_ins.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.write().await;
        if let Some(previous) = state.take() {
            log_info!("Signed out user {}", previous.session.user_id);
        }
    }

    pub async fn current_user(&self) -> Option<UserSession> {
        self.state
            .read()
            .await
            .as_ref()
            .map(|state| state.session.clone())
    }

    pub async fn is_signed_in(&self) -> bool {
        self.state.read().await.is_some()
    }

    /// Current favorite set in insertion order; empty when signed out
    pub async fn favorites(&self) -> Vec<FavoriteRecord> {
        self.state
            .read()
            .await
            .as_ref()
            .map(|state| state.favorites.clone())
            .unwrap_or_default()
    }

    pub async fn is_favorite(&self, anime_id: i64) -> bool {
        self.state.read().await.as_ref().map_or(false, |state| {
            state
                .favorites
                .iter()
                .any(|record| record.anime_id == anime_id)
        })
    }

    /// Flip the favorite flag of a title
    ///
    /// Returns the new flag. When the remote write fails the local set is put
    /// back exactly as it was and the error is returned. A toggle of a title
    /// whose previous toggle is still in flight waits for it to settle first.
    pub async fn toggle(&self, media: &MediaSummary) -> AppResult<bool> {
        if media.id <= 0 {
            return Err(AppError::ValidationError(format!(
                "Invalid anime id: {}",
                media.id
            )));
        }

        let lock = Arc::clone(self.pending.entry(media.id).or_default().value());
        let result = {
            let _in_flight = lock.lock().await;
            self.toggle_settled(media).await
        };
        drop(lock);
        self.pending
            .remove_if(&media.id, |_, lock| Arc::strong_count(lock) == 1);
        result
    }

    async fn toggle_settled(&self, media: &MediaSummary) -> AppResult<bool> {
        let (generation, session, change) = {
            let mut guard = self.state.write().await;
            let state = guard.as_mut().ok_or_else(|| {
                AppError::ValidationError("Sign in to manage favorites".to_string())
            })?;

            let change = match state
                .favorites
                .iter()
                .position(|record| record.anime_id == media.id)
            {
                Some(index) => FavoriteChange::Removed {
                    index,
                    record: state.favorites[index].clone(),
                },
                None => FavoriteChange::Added(FavoriteRecord::from_media(
                    state.session.user_id.clone(),
                    media,
                )),
            };
            change.apply(&mut state.favorites);
            (state.generation, state.session.clone(), change)
        };

        let remote = match &change {
            FavoriteChange::Added(record) => self.repository.save(&session, record).await,
            FavoriteChange::Removed { record, .. } => {
                self.repository.remove(&session, record.anime_id).await
            }
        };

        match remote {
            Ok(()) => Ok(matches!(change, FavoriteChange::Added(_))),
            Err(e) => {
                log_warn!(
                    "Favorite update for {} failed, rolling back: {}",
                    media.id,
                    e
                );
                let mut guard = self.state.write().await;
                if let Some(state) = guard.as_mut().filter(|state| state.generation == generation)
                {
                    change.revert(&mut state.favorites);
                }
                Err(e)
            }
        }
    }
}
