use async_trait::async_trait;

use super::{mapper::TmdbMapper, models::TmdbSearchResponse};
use crate::{
    modules::artwork::domain::{entities::ImageCandidate, repositories::ImageSearchRepository},
    shared::{config::DEFAULT_TMDB_API_BASE_URL, errors::AppResult, infrastructure::HttpClient},
};

/// TMDB (The Movie Database) TV search adapter
pub struct TmdbAdapter {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
    mapper: TmdbMapper,
}

impl TmdbAdapter {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_TMDB_API_BASE_URL)
    }

    /// Create adapter against another base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http_client: HttpClient::new("TMDB"),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            mapper: TmdbMapper::new(),
        }
    }

    /// Build URL with API key and additional query parameters
    fn build_url_with_params(&self, endpoint: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!(
            "{}{}?api_key={}",
            self.base_url,
            endpoint,
            urlencoding::encode(&self.api_key)
        );
        for (key, value) in params {
            if *key != "api_key" {
                url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
            }
        }
        url
    }
}

#[async_trait]
impl ImageSearchRepository for TmdbAdapter {
    async fn search_tv(&self, query: &str, language: &str) -> AppResult<Vec<ImageCandidate>> {
        let url =
            self.build_url_with_params("/search/tv", &[("language", language), ("query", query)]);

        log::info!("TMDB: Searching for '{}' ({})", query, language);

        let response: TmdbSearchResponse = self.http_client.get(&url).await?;
        let candidates = self.mapper.map_candidates(response.results);

        log::info!(
            "TMDB: Found {} results for '{}' ({})",
            candidates.len(),
            query,
            language
        );
        Ok(candidates)
    }
}
