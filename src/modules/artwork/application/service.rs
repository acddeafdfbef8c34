use std::sync::Arc;

use crate::modules::artwork::domain::{
    entities::ImageCandidate,
    repositories::ImageSearchRepository,
    services::ImageMatcher,
    value_objects::{MatchResult, MatchTarget},
};
use crate::shared::config::{DEFAULT_TMDB_FALLBACK_LANGUAGE, DEFAULT_TMDB_LANGUAGE};
use crate::shared::utils::{KeyedLatestSlots, LatestSlot};
use crate::{log_debug, log_warn};

/// Artwork lookup: fetch candidates, then let the matcher pick one
///
/// Never fails. Missing credentials, transport errors and weak matches all
/// come back as [`MatchResult::none`].
pub struct ArtworkService {
    repository: Option<Arc<dyn ImageSearchRepository>>,
    matcher: ImageMatcher,
    language: String,
    fallback_language: String,
    displayed: LatestSlot<MatchResult>,
    cards: KeyedLatestSlots<i64, MatchResult>,
}

impl ArtworkService {
    /// `repository` is `None` when no API credential is configured
    pub fn new(repository: Option<Arc<dyn ImageSearchRepository>>, matcher: ImageMatcher) -> Self {
        Self {
            repository,
            matcher,
            language: DEFAULT_TMDB_LANGUAGE.to_string(),
            fallback_language: DEFAULT_TMDB_FALLBACK_LANGUAGE.to_string(),
            displayed: LatestSlot::new(),
            cards: KeyedLatestSlots::new(),
        }
    }

    pub fn with_languages(
        mut self,
        language: impl Into<String>,
        fallback_language: impl Into<String>,
    ) -> Self {
        self.language = language.into();
        self.fallback_language = fallback_language.into();
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.repository.is_some()
    }

    pub async fn match_image(&self, target: &MatchTarget) -> MatchResult {
        let Some(repository) = self.repository.as_ref() else {
            log_warn!("No TMDB API key provided, skipping artwork lookup");
            return MatchResult::none();
        };

        let Some(query) = target.primary_query() else {
            return MatchResult::none();
        };
        if self.matcher.normalized_targets(target).is_empty() {
            log_debug!("Title '{}' has nothing left after normalization", query);
            return MatchResult::none();
        }

        let Some(candidates) = self.fetch_candidates(repository.as_ref(), query).await else {
            return MatchResult::none();
        };

        self.matcher.select(target, &candidates)
    }

    /// Localized search first; the fallback locale only when that came back empty
    async fn fetch_candidates(
        &self,
        repository: &dyn ImageSearchRepository,
        query: &str,
    ) -> Option<Vec<ImageCandidate>> {
        let localized = match repository.search_tv(query, &self.language).await {
            Ok(candidates) => candidates,
            Err(e) => {
                log_warn!("Artwork search for '{}' failed: {}", query, e);
                return None;
            }
        };
        if !localized.is_empty() || self.fallback_language == self.language {
            return Some(localized);
        }

        log_debug!(
            "No {} results for '{}', retrying in {}",
            self.language,
            query,
            self.fallback_language
        );
        match repository.search_tv(query, &self.fallback_language).await {
            Ok(candidates) => Some(candidates),
            Err(e) => {
                log_warn!("Fallback artwork search for '{}' failed: {}", query, e);
                None
            }
        }
    }

    /// Match for the single displayed title (e.g. a detail view)
    ///
    /// A later call supersedes this one; a superseded lookup returns `None` and
    /// never replaces the displayed artwork.
    pub async fn match_latest(&self, target: &MatchTarget) -> Option<MatchResult> {
        self.displayed.run(self.match_image(target)).await
    }

    pub async fn displayed_artwork(&self) -> Option<MatchResult> {
        self.displayed.current().await
    }

    /// Match for one card of a result grid
    ///
    /// Lookups for different cards run independently; only a newer lookup for
    /// the same card supersedes an older one.
    pub async fn match_for_card(&self, card_id: i64, target: &MatchTarget) -> Option<MatchResult> {
        self.cards.run(&card_id, self.match_image(target)).await
    }

    pub async fn card_artwork(&self, card_id: i64) -> Option<MatchResult> {
        self.cards.current(&card_id).await
    }

    /// Drop a card that left the screen, cancelling its pending lookup
    ///
    /// Card slots are only released here or by [`ArtworkService::retain_cards`].
    pub fn forget_card(&self, card_id: i64) {
        self.cards.remove(&card_id);
    }

    /// Keep artwork only for the cards of the grid now on screen
    pub fn retain_cards(&self, visible: &[i64]) {
        self.cards.retain(|card_id| visible.contains(card_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::{AppError, AppResult};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct ScriptedSearch {
        responses: HashMap<String, AppResult<Vec<ImageCandidate>>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedSearch {
        fn respond(mut self, language: &str, response: AppResult<Vec<ImageCandidate>>) -> Self {
            self.responses.insert(language.to_string(), response);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ImageSearchRepository for ScriptedSearch {
        async fn search_tv(&self, _query: &str, language: &str) -> AppResult<Vec<ImageCandidate>> {
            self.calls.lock().unwrap().push(language.to_string());
            self.responses
                .get(language)
                .cloned()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    fn show(name: &str) -> ImageCandidate {
        ImageCandidate {
            poster_path: Some("/p.jpg".to_string()),
            ..ImageCandidate::new(1, name)
        }
    }

    fn service(search: Arc<ScriptedSearch>) -> ArtworkService {
        ArtworkService::new(Some(search), ImageMatcher::default())
    }

    #[tokio::test]
    async fn test_missing_credential_short_circuits() {
        let service = ArtworkService::new(None, ImageMatcher::default());

        assert!(!service.is_enabled());
        assert!(service.match_image(&MatchTarget::new("Naruto")).await.is_empty());
    }

    #[tokio::test]
    async fn test_blank_target_makes_no_request() {
        let search = Arc::new(ScriptedSearch::default());
        let service = service(search.clone());

        assert!(service.match_image(&MatchTarget::default()).await.is_empty());
        assert!(service.match_image(&MatchTarget::new("?!")).await.is_empty());
        assert!(search.calls().is_empty());
    }

    #[tokio::test]
    async fn test_localized_hit_skips_fallback() {
        let search = Arc::new(ScriptedSearch::default().respond("ko-KR", Ok(vec![show("Naruto")])));
        let service = service(search.clone());

        let result = service.match_image(&MatchTarget::new("Naruto")).await;

        assert!(result.poster_url.is_some());
        assert_eq!(search.calls(), vec!["ko-KR"]);
    }

    #[tokio::test]
    async fn test_empty_localized_result_falls_back_once() {
        let search = Arc::new(ScriptedSearch::default().respond("en-US", Ok(vec![show("Naruto")])));
        let service = service(search.clone());

        let result = service.match_image(&MatchTarget::new("Naruto")).await;

        assert!(result.poster_url.is_some());
        assert_eq!(search.calls(), vec!["ko-KR", "en-US"]);
    }

    #[tokio::test]
    async fn test_transport_error_is_no_match_without_retry() {
        let search = Arc::new(ScriptedSearch::default().respond(
            "ko-KR",
            Err(AppError::TransportError("TMDB API returned 500".to_string())),
        ));
        let service = service(search.clone());

        let result = service.match_image(&MatchTarget::new("Naruto")).await;

        assert!(result.is_empty());
        assert_eq!(search.calls(), vec!["ko-KR"]);
    }

    #[tokio::test]
    async fn test_card_results_are_kept_per_card() {
        let search = Arc::new(ScriptedSearch::default().respond("ko-KR", Ok(vec![show("Naruto")])));
        let service = service(search);

        service.match_for_card(1, &MatchTarget::new("Naruto")).await;
        service.match_for_card(2, &MatchTarget::new("Bleach")).await;

        assert!(service.card_artwork(1).await.unwrap().poster_url.is_some());
        assert!(service.card_artwork(2).await.unwrap().is_empty());

        service.forget_card(1);
        assert_eq!(service.card_artwork(1).await, None);
    }

    #[tokio::test]
    async fn test_retain_cards_releases_cards_off_screen() {
        let search = Arc::new(ScriptedSearch::default().respond("ko-KR", Ok(vec![show("Naruto")])));
        let service = service(search);
        for card in 1..=3 {
            service.match_for_card(card, &MatchTarget::new("Naruto")).await;
        }

        service.retain_cards(&[2]);

        assert_eq!(service.card_artwork(1).await, None);
        assert!(service.card_artwork(2).await.is_some());
        assert_eq!(service.card_artwork(3).await, None);
    }
}
