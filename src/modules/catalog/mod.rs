pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::CatalogService;
pub use domain::{
    AnimeDetail, CatalogQueryVariables, CatalogRepository, MediaSummary, MediaTitle,
    QueryPlanner, ResultPage, SearchRequest, SortMode,
};
pub use infrastructure::AniListAdapter;
