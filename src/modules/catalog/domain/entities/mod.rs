mod anime_detail;
mod media_summary;

pub use anime_detail::*;
pub use media_summary::*;
