pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::FavoritesService;
pub use domain::{FavoriteRecord, FavoritesRepository, UserSession};
pub use infrastructure::FirestoreFavoritesAdapter;
