//! Application configuration loaded from the environment
//!
//! Values come from process environment variables, optionally seeded from a
//! `.env` file. Blank values are treated as absent.

use std::env;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_ANILIST_ENDPOINT: &str = "https://graphql.anilist.co";
pub const DEFAULT_TMDB_API_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_TMDB_LANGUAGE: &str = "ko-KR";
pub const DEFAULT_TMDB_FALLBACK_LANGUAGE: &str = "en-US";
pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

#[derive(Debug, Clone, PartialEq)]
pub struct AniListConfig {
    pub endpoint: String,
}

impl Default for AniListConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ANILIST_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TmdbConfig {
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub image_base_url: String,
    pub language: String,
    pub fallback_language: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_TMDB_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_TMDB_IMAGE_BASE_URL.to_string(),
            language: DEFAULT_TMDB_LANGUAGE.to_string(),
            fallback_language: DEFAULT_TMDB_FALLBACK_LANGUAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FirebaseConfig {
    pub api_key: Option<String>,
    pub project_id: Option<String>,
    pub firestore_base_url: String,
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            project_id: None,
            firestore_base_url: DEFAULT_FIRESTORE_BASE_URL.to_string(),
        }
    }
}

impl FirebaseConfig {
    /// Api key and project id, or a configuration error naming what is missing
    pub fn credentials(&self) -> AppResult<(&str, &str)> {
        match (self.api_key.as_deref(), self.project_id.as_deref()) {
            (Some(key), Some(project)) => Ok((key, project)),
            (None, _) => Err(AppError::ConfigurationError(
                "FIREBASE_API_KEY is not set".to_string(),
            )),
            (_, None) => Err(AppError::ConfigurationError(
                "FIREBASE_PROJECT_ID is not set".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub anilist: AniListConfig,
    pub tmdb: TmdbConfig,
    pub firebase: FirebaseConfig,
}

impl AppConfig {
    /// Load configuration from `.env` (if present) and the process environment
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let config = Self {
            anilist: AniListConfig {
                endpoint: get_or("ANILIST_ENDPOINT", DEFAULT_ANILIST_ENDPOINT),
            },
            tmdb: TmdbConfig {
                api_key: get("TMDB_API_KEY"),
                api_base_url: get_or("TMDB_API_BASE_URL", DEFAULT_TMDB_API_BASE_URL),
                image_base_url: get_or("TMDB_IMAGE_BASE_URL", DEFAULT_TMDB_IMAGE_BASE_URL),
                language: get_or("TMDB_LANGUAGE", DEFAULT_TMDB_LANGUAGE),
                fallback_language: get_or(
                    "TMDB_FALLBACK_LANGUAGE",
                    DEFAULT_TMDB_FALLBACK_LANGUAGE,
                ),
            },
            firebase: FirebaseConfig {
                api_key: get("FIREBASE_API_KEY"),
                project_id: get("FIREBASE_PROJECT_ID"),
                firestore_base_url: get_or("FIRESTORE_BASE_URL", DEFAULT_FIRESTORE_BASE_URL),
            },
        };

        if config.tmdb.api_key.is_none() {
            log::warn!("TMDB_API_KEY not found in environment, artwork matching is disabled");
        }
        if config.firebase.credentials().is_err() {
            log::warn!("Firebase settings not found in environment, favorites are unavailable");
        }

        config
    }

    pub fn with_anilist_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.anilist.endpoint = endpoint.into();
        self
    }

    pub fn with_tmdb_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.tmdb.api_key = Some(api_key.into());
        self
    }

    pub fn with_tmdb_base_urls(
        mut self,
        api_base_url: impl Into<String>,
        image_base_url: impl Into<String>,
    ) -> Self {
        self.tmdb.api_base_url = api_base_url.into();
        self.tmdb.image_base_url = image_base_url.into();
        self
    }

    pub fn with_firebase(
        mut self,
        api_key: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        self.firebase.api_key = Some(api_key.into());
        self.firebase.project_id = Some(project_id.into());
        self
    }

    pub fn with_firestore_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.firebase.firestore_base_url = base_url.into();
        self
    }
}
