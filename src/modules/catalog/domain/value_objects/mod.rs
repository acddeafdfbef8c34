mod media_enums;
mod search_request;

pub use media_enums::*;
pub use search_request::*;
