use serde::{Deserialize, Serialize};

use super::media_summary::{MediaSummary, MediaTitle};
use crate::modules::catalog::domain::value_objects::MediaFormat;

/// Compact card used for relations and recommendations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaCard {
    pub id: i64,
    pub title: MediaTitle,
    pub cover_image_url: Option<String>,
    pub average_score: Option<u32>,
    pub format: Option<MediaFormat>,
    pub season_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRelation {
    /// Upstream relation type such as `SEQUEL` or `PREQUEL`
    pub relation_type: String,
    pub media: MediaCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trailer {
    pub id: String,
    pub site: String,
}

impl Trailer {
    /// Watch URL for YouTube trailers, `None` for other hosts
    pub fn youtube_url(&self) -> Option<String> {
        if self.site.eq_ignore_ascii_case("youtube") && !self.id.is_empty() {
            Some(format!("https://www.youtube.com/watch?v={}", self.id))
        } else {
            None
        }
    }
}

/// Full detail view of one title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeDetail {
    pub summary: MediaSummary,
    pub studios: Vec<String>,
    pub trailer: Option<Trailer>,
    pub relations: Vec<MediaRelation>,
    pub recommendations: Vec<MediaCard>,
}

impl AnimeDetail {
    pub fn id(&self) -> i64 {
        self.summary.id
    }

    pub fn sequels(&self) -> impl Iterator<Item = &MediaRelation> {
        self.relations
            .iter()
            .filter(|relation| relation.relation_type == "SEQUEL")
    }
}
