//! AniList GraphQL response models
//!
//! Every field is optional: AniList returns `null` freely and a missing value
//! must never fail a whole page.

use serde::Deserialize;

use crate::modules::catalog::domain::value_objects::{MediaFormat, MediaSeason, MediaStatus};

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CoverImage {
    pub extra_large: Option<String>,
    pub large: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: Option<i32>,
    pub last_page: Option<i32>,
    pub has_next_page: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: Option<i64>,
    pub title: Option<MediaTitle>,
    pub cover_image: Option<CoverImage>,
    pub banner_image: Option<String>,
    pub description: Option<String>,
    pub episodes: Option<i32>,
    pub average_score: Option<i32>,
    pub popularity: Option<i64>,
    pub genres: Option<Vec<Option<String>>>,
    pub format: Option<MediaFormat>,
    pub status: Option<MediaStatus>,
    pub season: Option<MediaSeason>,
    pub season_year: Option<i32>,
    pub studios: Option<StudioConnection>,
    pub trailer: Option<MediaTrailer>,
    pub relations: Option<MediaConnection>,
    pub recommendations: Option<RecommendationConnection>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub page_info: Option<PageInfo>,
    pub media: Option<Vec<Option<Media>>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchData {
    #[serde(rename = "Page")]
    pub page: Option<Page>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DetailData {
    #[serde(rename = "Media")]
    pub media: Option<Media>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Studio {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct StudioConnection {
    pub nodes: Option<Vec<Option<Studio>>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct MediaTrailer {
    pub id: Option<String>,
    pub site: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MediaEdge {
    pub relation_type: Option<String>,
    pub node: Option<Media>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct MediaConnection {
    pub edges: Option<Vec<Option<MediaEdge>>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub media_recommendation: Option<Media>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct RecommendationConnection {
    pub nodes: Option<Vec<Option<Recommendation>>>,
}
