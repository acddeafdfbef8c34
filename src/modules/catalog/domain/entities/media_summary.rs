use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::value_objects::{MediaFormat, MediaSeason, MediaStatus};

/// Title variants of a catalog entry; at least one is expected to be present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

impl MediaTitle {
    /// English title first, then romaji, then native
    pub fn preferred(&self) -> Option<&str> {
        [&self.english, &self.romaji, &self.native]
            .into_iter()
            .filter_map(|title| title.as_deref())
            .find(|title| !title.trim().is_empty())
    }

    /// Every non-blank variant, romaji first
    pub fn variants(&self) -> Vec<&str> {
        [&self.romaji, &self.english, &self.native]
            .into_iter()
            .filter_map(|title| title.as_deref())
            .filter(|title| !title.trim().is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.variants().is_empty()
    }
}

/// One catalog entry as shown in a result grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSummary {
    pub id: i64,
    pub title: MediaTitle,
    pub cover_image_url: Option<String>,
    pub banner_image_url: Option<String>,
    pub description: Option<String>,
    pub episodes: Option<u32>,
    /// 0 to 100
    pub average_score: Option<u32>,
    pub popularity: Option<u64>,
    pub genres: Vec<String>,
    pub format: Option<MediaFormat>,
    pub status: Option<MediaStatus>,
    pub season: Option<MediaSeason>,
    pub season_year: Option<i32>,
}

impl MediaSummary {
    pub fn new(id: i64, title: MediaTitle) -> Self {
        Self {
            id,
            title,
            ..Default::default()
        }
    }
}

/// One page of catalog results; item order is significant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    pub current_page: u32,
    pub last_page: u32,
    pub has_next_page: bool,
    pub items: Vec<MediaSummary>,
}

impl ResultPage {
    pub fn new(items: Vec<MediaSummary>) -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            has_next_page: false,
            items,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
