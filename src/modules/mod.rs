pub mod artwork;
pub mod catalog;
pub mod favorites;
