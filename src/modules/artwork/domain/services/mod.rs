mod image_matcher;
pub mod match_scorer;
mod title_normalizer;

pub use image_matcher::{CandidateMatch, ImageMatcher};
pub use title_normalizer::*;
