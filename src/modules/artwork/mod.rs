pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::ArtworkService;
pub use domain::{
    ImageCandidate, ImageMatcher, ImageSearchRepository, ImageUrlBuilder, MatchResult,
    MatchTarget,
};
pub use infrastructure::TmdbAdapter;
