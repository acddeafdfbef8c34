//! AniList catalog adapter
//!
//! GraphQL over a single POST endpoint. A non-2xx status, a non-empty `errors`
//! array or a missing `data` object is a failed query.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

use super::{
    mapper::AniListMapper,
    models::{DetailData, SearchData},
    queries::{ANIME_DETAIL_QUERY, SEARCH_ANIME_QUERY},
};
use crate::{
    modules::catalog::domain::{
        entities::{AnimeDetail, ResultPage},
        repositories::CatalogRepository,
        services::CatalogQueryVariables,
    },
    shared::{
        config::DEFAULT_ANILIST_ENDPOINT,
        errors::{AppError, AppResult},
        infrastructure::HttpClient,
    },
};

/// Drop every `null` entry from a variables object
///
/// Non-object values pass through unchanged.
pub fn sanitize_variables(variables: Value) -> Value {
    match variables {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, value)| !value.is_null())
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    }
}

pub struct AniListAdapter {
    http_client: HttpClient,
    endpoint: String,
    mapper: AniListMapper,
}

impl Default for AniListAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AniListAdapter {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ANILIST_ENDPOINT)
    }

    /// Point the adapter at another endpoint (mock servers in tests)
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new("AniList"),
            endpoint: endpoint.into(),
            mapper: AniListMapper::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn make_graphql_request<T>(&self, query: &str, variables: Value) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let body = json!({
            "query": query,
            "variables": sanitize_variables(variables),
        });

        log::debug!("AniList: GraphQL variables: {}", body["variables"]);

        let graphql_response: Value = self
            .http_client
            .post_json(&self.endpoint, &body, None)
            .await?;

        if let Some(errors) = graphql_response.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                let messages: Vec<&str> = errors
                    .iter()
                    .filter_map(|error| error.get("message").and_then(Value::as_str))
                    .collect();
                log::error!("AniList: GraphQL errors in response: {:?}", messages);
                return Err(AppError::UpstreamQueryError(format!(
                    "AniList GraphQL errors: {}",
                    if messages.is_empty() {
                        Value::Array(errors.clone()).to_string()
                    } else {
                        messages.join("; ")
                    }
                )));
            }
        }

        let data = match graphql_response.get("data") {
            Some(data) if !data.is_null() => data.clone(),
            _ => {
                return Err(AppError::UpstreamQueryError(
                    "No data field in AniList response".to_string(),
                ))
            }
        };

        serde_json::from_value(data).map_err(|e| {
            AppError::SerializationError(format!("Failed to deserialize AniList data: {}", e))
        })
    }
}

#[async_trait]
impl CatalogRepository for AniListAdapter {
    async fn search_media(&self, variables: &CatalogQueryVariables) -> AppResult<ResultPage> {
        log::info!(
            "AniList: Searching page {} ({} per page, search: {:?})",
            variables.page,
            variables.per_page,
            variables.search
        );

        let variables = serde_json::to_value(variables)?;
        let data: SearchData = self
            .make_graphql_request(SEARCH_ANIME_QUERY, variables)
            .await?;
        let page = self.mapper.map_page(data);

        log::info!(
            "AniList: Found {} results on page {}/{}",
            page.len(),
            page.current_page,
            page.last_page
        );
        Ok(page)
    }

    async fn get_anime_detail(&self, id: i64) -> AppResult<Option<AnimeDetail>> {
        log::info!("AniList: Getting anime detail for ID '{}'", id);

        let data: DetailData = self
            .make_graphql_request(ANIME_DETAIL_QUERY, json!({ "id": id }))
            .await?;

        let detail = self.mapper.map_detail(data);
        if detail.is_none() {
            log::info!("AniList: No anime found for ID '{}'", id);
        }
        Ok(detail)
    }
}
