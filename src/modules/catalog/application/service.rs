use std::sync::Arc;

use crate::modules::catalog::domain::{
    entities::{AnimeDetail, ResultPage},
    repositories::CatalogRepository,
    services::{CatalogQueryVariables, QueryPlanner},
    value_objects::SearchRequest,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LatestSlot, LogContext};
use crate::{log_debug, log_info};

/// Catalog use cases: plan, fetch, post-process
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
    planner: QueryPlanner,
    latest: LatestSlot<AppResult<ResultPage>>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self::with_planner(repository, QueryPlanner::new())
    }

    pub fn with_planner(repository: Arc<dyn CatalogRepository>, planner: QueryPlanner) -> Self {
        Self {
            repository,
            planner,
            latest: LatestSlot::new(),
        }
    }

    pub fn planner(&self) -> &QueryPlanner {
        &self.planner
    }

    pub fn plan(&self, request: &SearchRequest) -> CatalogQueryVariables {
        self.planner.plan(request)
    }

    pub fn post_process(&self, request: &SearchRequest, page: ResultPage) -> ResultPage {
        self.planner.post_process(request, page)
    }

    /// Fetch one page for a request; upstream failures propagate unchanged
    pub async fn search(&self, request: &SearchRequest) -> AppResult<ResultPage> {
        let variables = self.plan(request);
        log_debug!("Catalog search variables: {:?}", variables);

        let page = self.repository.search_media(&variables).await?;
        let fetched = page.len();
        let page = self.post_process(request, page);

        LogContext::search_operation(
            request.trimmed_search_term().unwrap_or("<browse>"),
            Some("AniList"),
            Some(page.len()),
        );
        if fetched != page.len() {
            log_debug!("Post-processing kept {} of {} items", page.len(), fetched);
        }
        Ok(page)
    }

    /// Like [`CatalogService::search`], but superseded by any later call
    ///
    /// Returns `None` when a newer search started before this one finished; the
    /// published page is then whatever the newest search produced.
    pub async fn search_latest(&self, request: &SearchRequest) -> Option<AppResult<ResultPage>> {
        self.latest.run(self.search(request)).await
    }

    /// Outcome of the most recent search that was not superseded
    pub async fn latest_results(&self) -> Option<AppResult<ResultPage>> {
        self.latest.current().await
    }

    pub async fn get_anime_detail(&self, id: i64) -> AppResult<Option<AnimeDetail>> {
        if id <= 0 {
            return Err(AppError::ValidationError(format!(
                "Invalid anime id: {}",
                id
            )));
        }

        let detail = self.repository.get_anime_detail(id).await?;
        match &detail {
            Some(detail) => log_info!(
                "Loaded detail for {} ({} relations, {} recommendations)",
                id,
                detail.relations.len(),
                detail.recommendations.len()
            ),
            None => log_info!("No catalog entry for id {}", id),
        }
        Ok(detail)
    }
}
