mod image_url;
mod match_target;

pub use image_url::*;
pub use match_target::*;
