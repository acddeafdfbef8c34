pub mod entities;
pub mod repositories;

pub use entities::{FavoriteRecord, UserSession};
pub use repositories::FavoritesRepository;
