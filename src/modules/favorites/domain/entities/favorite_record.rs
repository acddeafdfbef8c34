use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::{
    entities::{MediaSummary, MediaTitle},
    value_objects::MediaFormat,
};

/// One bookmarked title of one user
///
/// Identified by `{user_id}_{anime_id}`, so a user holds at most one record per title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    pub user_id: String,
    pub anime_id: i64,
    pub title: MediaTitle,
    pub cover_image_url: Option<String>,
    pub format: Option<MediaFormat>,
    pub average_score: Option<u32>,
    pub episodes: Option<u32>,
    pub popularity: Option<u64>,
}

impl FavoriteRecord {
    pub fn from_media(user_id: impl Into<String>, media: &MediaSummary) -> Self {
        Self {
            user_id: user_id.into(),
            anime_id: media.id,
            title: media.title.clone(),
            cover_image_url: media.cover_image_url.clone(),
            format: media.format,
            average_score: media.average_score,
            episodes: media.episodes,
            popularity: media.popularity,
        }
    }

    pub fn document_id(&self) -> String {
        Self::document_id_for(&self.user_id, self.anime_id)
    }

    pub fn document_id_for(user_id: &str, anime_id: i64) -> String {
        format!("{}_{}", user_id, anime_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_is_composite() {
        let media = MediaSummary::new(
            154587,
            MediaTitle {
                romaji: Some("Sousou no Frieren".to_string()),
                ..Default::default()
            },
        );
        let record = FavoriteRecord::from_media("uid42", &media);

        assert_eq!(record.document_id(), "uid42_154587");
        assert_eq!(record.title.romaji.as_deref(), Some("Sousou no Frieren"));
    }
}
