//! Anime discovery core
//!
//! * [`modules::catalog`]: search request planning and the AniList catalog
//! * [`modules::artwork`]: TMDB poster / backdrop matching
//! * [`modules::favorites`]: optimistic favorites stored in Firestore
//!
//! [`app::AppState`] wires them together from [`shared::config::AppConfig`].

pub mod app;
pub mod modules;
pub mod shared;

pub use app::AppState;

use modules::catalog::{CatalogQueryVariables, QueryPlanner, ResultPage, SearchRequest};

/// Translate a search request into catalog query variables
pub fn plan_query(request: &SearchRequest) -> CatalogQueryVariables {
    QueryPlanner::new().plan(request)
}

/// Apply the recency filter and hybrid re-sort to a fetched page
pub fn post_process_results(request: &SearchRequest, page: ResultPage) -> ResultPage {
    QueryPlanner::new().post_process(request, page)
}
