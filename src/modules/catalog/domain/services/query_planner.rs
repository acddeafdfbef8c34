//! Translation of a [`SearchRequest`] into catalog query variables, and the
//! post-fetch steps the catalog endpoint cannot express.

use chrono::Datelike;
use serde::Serialize;
use std::cmp::Ordering;

use crate::modules::catalog::domain::{
    entities::{MediaSummary, ResultPage},
    value_objects::{MediaFormat, MediaSeason, MediaSort, MediaStatus, SearchRequest},
};

/// Weight of the average score in the hybrid rank
pub const HYBRID_SCORE_WEIGHT: f64 = 0.7;
/// Weight of popularity in the hybrid rank
pub const HYBRID_POPULARITY_WEIGHT: f64 = 0.3;
/// Years before the current one still accepted by the recency filter
pub const RECENT_YEARS_WINDOW: i32 = 2;

/// Wire-level variable set for the catalog search query
///
/// Neutral filters are `None` and never serialized, so the payload carries no nulls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogQueryVariables {
    pub page: u32,
    #[serde(rename = "perPage")]
    pub per_page: u32,
    pub sort: Vec<MediaSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_in: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<MediaSeason>,
    #[serde(rename = "seasonYear", skip_serializing_if = "Option::is_none")]
    pub season_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_in: Option<Vec<MediaStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_in: Option<Vec<MediaFormat>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes_greater: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes_lesser: Option<u32>,
    #[serde(rename = "averageScore_greater", skip_serializing_if = "Option::is_none")]
    pub average_score_greater: Option<u32>,
    /// Set for hybrid sorting; results must be re-ranked after fetching
    #[serde(skip)]
    pub client_rerank: bool,
}

/// Rank used by the hybrid sort, missing values count as 0
pub fn hybrid_rank(item: &MediaSummary) -> f64 {
    let score = item.average_score.unwrap_or(0) as f64;
    let popularity = item.popularity.unwrap_or(0) as f64;
    score * HYBRID_SCORE_WEIGHT + popularity * HYBRID_POPULARITY_WEIGHT
}

#[derive(Debug, Clone, Default)]
pub struct QueryPlanner {
    current_year: Option<i32>,
}

impl QueryPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the year used by the recency filter
    pub fn with_current_year(year: i32) -> Self {
        Self {
            current_year: Some(year),
        }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Build query variables for a request. Never fails.
    pub fn plan(&self, request: &SearchRequest) -> CatalogQueryVariables {
        let episode_bounds = request.episode_range.bounds();
        let genres: Vec<String> = request
            .genres
            .iter()
            .map(|genre| genre.trim())
            .filter(|genre| !genre.is_empty())
            .map(str::to_string)
            .collect();

        CatalogQueryVariables {
            page: request.page.max(1),
            per_page: request.per_page.max(1),
            sort: request.sort_mode.sort_keys(),
            search: request.trimmed_search_term().map(str::to_string),
            genre_in: (!genres.is_empty()).then_some(genres),
            season: request.season.filter(|season| *season != MediaSeason::Unknown),
            season_year: request.season_year,
            status_in: request.status.media_status().map(|status| vec![status]),
            format_in: request.format.media_format().map(|format| vec![format]),
            episodes_greater: episode_bounds.greater,
            episodes_lesser: episode_bounds.lesser,
            average_score_greater: request.score_range.lower_bound(),
            client_rerank: request.sort_mode.requires_client_rerank(),
        }
    }

    /// Apply the recency filter, then the hybrid re-sort, to one fetched page
    pub fn post_process(&self, request: &SearchRequest, mut page: ResultPage) -> ResultPage {
        if request.recent_years_only {
            let earliest = self.current_year() - RECENT_YEARS_WINDOW;
            let before = page.items.len();
            page.items
                .retain(|item| item.season_year.map_or(false, |year| year >= earliest));
            log::debug!(
                "Recency filter (>= {}) kept {} of {} items",
                earliest,
                page.items.len(),
                before
            );
        }

        if request.sort_mode.requires_client_rerank() {
            // sort_by is stable, equal ranks keep the order the endpoint returned
            page.items.sort_by(|a, b| {
                hybrid_rank(b)
                    .partial_cmp(&hybrid_rank(a))
                    .unwrap_or(Ordering::Equal)
            });
        }

        page
    }
}
