mod image_candidate;

pub use image_candidate::ImageCandidate;
