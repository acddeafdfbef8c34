pub mod anilist;

pub use anilist::AniListAdapter;
