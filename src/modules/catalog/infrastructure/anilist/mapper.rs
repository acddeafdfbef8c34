use super::models::{self, DetailData, Media, SearchData};
use crate::log_warn;
use crate::modules::catalog::domain::entities::{
    AnimeDetail, MediaCard, MediaRelation, MediaSummary, MediaTitle, ResultPage, Trailer,
};

/// Converts AniList response models into catalog entities
#[derive(Debug, Clone, Default)]
pub struct AniListMapper;

impl AniListMapper {
    pub fn new() -> Self {
        Self
    }

    fn map_title(title: Option<models::MediaTitle>) -> MediaTitle {
        let title = title.unwrap_or_default();
        MediaTitle {
            romaji: title.romaji,
            english: title.english,
            native: title.native,
        }
    }

    fn cover_url(cover: &Option<models::CoverImage>) -> Option<String> {
        cover
            .as_ref()
            .and_then(|cover| cover.large.clone().or_else(|| cover.extra_large.clone()))
    }

    /// Negative or out-of-range counts are treated as unknown
    fn non_negative_u32(value: Option<i32>) -> Option<u32> {
        value.and_then(|value| u32::try_from(value).ok())
    }

    fn non_negative_u64(value: Option<i64>) -> Option<u64> {
        value.and_then(|value| u64::try_from(value).ok())
    }

    /// Map one media node; `None` when the node carries no id
    pub fn map_summary(&self, media: Media) -> Option<MediaSummary> {
        let Some(id) = media.id else {
            log_warn!("AniList: skipping media without id");
            return None;
        };

        Some(MediaSummary {
            id,
            cover_image_url: Self::cover_url(&media.cover_image),
            title: Self::map_title(media.title),
            banner_image_url: media.banner_image,
            description: media.description,
            episodes: Self::non_negative_u32(media.episodes),
            average_score: Self::non_negative_u32(media.average_score),
            popularity: Self::non_negative_u64(media.popularity),
            genres: media
                .genres
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .collect(),
            format: media.format,
            status: media.status,
            season: media.season,
            season_year: media.season_year,
        })
    }

    fn map_card(&self, media: Media) -> Option<MediaCard> {
        let id = media.id?;
        Some(MediaCard {
            id,
            cover_image_url: Self::cover_url(&media.cover_image),
            title: Self::map_title(media.title),
            average_score: Self::non_negative_u32(media.average_score),
            format: media.format,
            season_year: media.season_year,
        })
    }

    pub fn map_page(&self, data: SearchData) -> ResultPage {
        let page = data.page.unwrap_or_default();
        let info = page.page_info.unwrap_or_default();

        let items: Vec<MediaSummary> = page
            .media
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .filter_map(|media| self.map_summary(media))
            .collect();

        let current_page = info
            .current_page
            .and_then(|page| u32::try_from(page).ok())
            .unwrap_or(1);

        ResultPage {
            current_page,
            last_page: info
                .last_page
                .and_then(|page| u32::try_from(page).ok())
                .unwrap_or(current_page),
            has_next_page: info.has_next_page.unwrap_or(false),
            items,
        }
    }

    pub fn map_detail(&self, data: DetailData) -> Option<AnimeDetail> {
        let mut media = data.media?;

        let studios = media
            .studios
            .take()
            .and_then(|connection| connection.nodes)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .filter_map(|studio| studio.name)
            .collect();

        let trailer = media.trailer.take().and_then(|trailer| {
            Some(Trailer {
                id: trailer.id?,
                site: trailer.site?,
            })
        });

        let relations = media
            .relations
            .take()
            .and_then(|connection| connection.edges)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .filter_map(|edge| {
                let card = self.map_card(edge.node?)?;
                Some(MediaRelation {
                    relation_type: edge.relation_type.unwrap_or_else(|| "OTHER".to_string()),
                    media: card,
                })
            })
            .collect();

        let recommendations = media
            .recommendations
            .take()
            .and_then(|connection| connection.nodes)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .filter_map(|node| node.media_recommendation)
            .filter_map(|media| self.map_card(media))
            .collect();

        let summary = self.map_summary(media)?;

        Some(AnimeDetail {
            summary,
            studios,
            trailer,
            relations,
            recommendations,
        })
    }
}
