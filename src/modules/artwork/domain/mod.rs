pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::ImageCandidate;
pub use repositories::ImageSearchRepository;
pub use services::{ImageMatcher, TitleNormalizer};
pub use value_objects::{ImageUrlBuilder, MatchResult, MatchTarget};
