pub mod firestore;

pub use firestore::FirestoreFavoritesAdapter;
