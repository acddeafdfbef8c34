mod image_search_repository;

pub use image_search_repository::*;
