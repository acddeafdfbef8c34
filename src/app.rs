//! Composition root: wires configuration, adapters and services together

use std::sync::Arc;

use crate::modules::{
    artwork::{
        ArtworkService, ImageMatcher, ImageSearchRepository, ImageUrlBuilder, MatchResult,
        MatchTarget, TmdbAdapter,
    },
    catalog::{
        AniListAdapter, AnimeDetail, CatalogQueryVariables, CatalogRepository, CatalogService,
        ResultPage, SearchRequest,
    },
    favorites::{FavoritesRepository, FavoritesService, FirestoreFavoritesAdapter},
};
use crate::shared::{
    config::AppConfig,
    errors::{AppError, AppResult},
    utils::init_logger,
};
use crate::{log_error, log_info};

/// Services exposed to a UI layer
pub struct AppState {
    catalog: Arc<CatalogService>,
    artwork: Arc<ArtworkService>,
    favorites: Result<Arc<FavoritesService>, AppError>,
}

impl AppState {
    /// Build every service from configuration
    ///
    /// Missing TMDB or Firebase settings do not fail construction: artwork
    /// then never matches and [`AppState::favorites`] reports the problem.
    pub fn from_config(config: &AppConfig) -> Self {
        let catalog: Arc<dyn CatalogRepository> = Arc::new(AniListAdapter::with_endpoint(
            config.anilist.endpoint.clone(),
        ));

        let image_search = config.tmdb.api_key.as_ref().map(|api_key| {
            Arc::new(TmdbAdapter::with_base_url(
                api_key.clone(),
                config.tmdb.api_base_url.clone(),
            )) as Arc<dyn ImageSearchRepository>
        });
        let artwork = ArtworkService::new(
            image_search,
            ImageMatcher::new(ImageUrlBuilder::new(config.tmdb.image_base_url.clone())),
        )
        .with_languages(
            config.tmdb.language.clone(),
            config.tmdb.fallback_language.clone(),
        );

        let favorites = FirestoreFavoritesAdapter::new(&config.firebase)
            .map(|adapter| Arc::new(adapter) as Arc<dyn FavoritesRepository>);

        Self::from_parts(catalog, artwork, favorites)
    }

    /// Initialize logging, load configuration from the environment and build the state
    pub fn from_env() -> Self {
        init_logger();
        let state = Self::from_config(&AppConfig::from_env());
        match &state.favorites {
            Ok(_) => log_info!("Favorites backed by Firestore"),
            Err(e) => log_error!("Favorites unavailable: {}", e),
        }
        state
    }

    /// Assemble from already built parts (tests, alternative backends)
    pub fn from_parts(
        catalog: Arc<dyn CatalogRepository>,
        artwork: ArtworkService,
        favorites: AppResult<Arc<dyn FavoritesRepository>>,
    ) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(catalog)),
            artwork: Arc::new(artwork),
            favorites: favorites.map(|repository| Arc::new(FavoritesService::new(repository))),
        }
    }

    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    pub fn artwork(&self) -> Arc<ArtworkService> {
        Arc::clone(&self.artwork)
    }

    /// Favorites service, or the configuration error that disabled it
    pub fn favorites(&self) -> AppResult<Arc<FavoritesService>> {
        self.favorites.as_ref().map(Arc::clone).map_err(Clone::clone)
    }

    pub fn plan_query(&self, request: &SearchRequest) -> CatalogQueryVariables {
        self.catalog.plan(request)
    }

    pub fn post_process_results(&self, request: &SearchRequest, page: ResultPage) -> ResultPage {
        self.catalog.post_process(request, page)
    }

    pub async fn match_image(
        &self,
        title: &str,
        alt_titles: &[String],
        season_year: Option<i32>,
    ) -> MatchResult {
        let target = MatchTarget::new(title)
            .with_alt_titles(alt_titles.iter().cloned())
            .with_season_year(season_year);
        self.artwork.match_image(&target).await
    }

    pub async fn search(&self, request: &SearchRequest) -> AppResult<ResultPage> {
        self.catalog.search(request).await
    }

    pub async fn anime_detail(&self, id: i64) -> AppResult<Option<AnimeDetail>> {
        self.catalog.get_anime_detail(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_firebase_settings_disable_favorites_only() {
        let state = AppState::from_config(&AppConfig::default());

        assert!(matches!(
            state.favorites(),
            Err(AppError::ConfigurationError(_))
        ));
        assert!(!state.artwork().is_enabled());
        assert_eq!(state.plan_query(&SearchRequest::default()).per_page, 24);
    }

    #[test]
    fn test_full_config_enables_everything() {
        let config = AppConfig::default()
            .with_tmdb_api_key("tmdb")
            .with_firebase("fb", "project");
        let state = AppState::from_config(&config);

        assert!(state.favorites().is_ok());
        assert!(state.artwork().is_enabled());
    }

    #[tokio::test]
    async fn test_match_image_without_key_is_none() {
        let state = AppState::from_config(&AppConfig::default());

        let result = state.match_image("Naruto", &[], Some(2002)).await;

        assert!(result.is_empty());
    }
}
