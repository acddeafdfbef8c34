mod favorites_repository;

pub use favorites_repository::*;
