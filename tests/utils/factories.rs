/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use anidex_lib::modules::{
    artwork::ImageCandidate,
    catalog::{
        domain::value_objects::{MediaFormat, MediaStatus},
        MediaSummary, MediaTitle, ResultPage,
    },
    favorites::{FavoriteRecord, UserSession},
};

pub struct MediaFactory {
    summary: MediaSummary,
}

impl MediaFactory {
    pub fn new(id: i64) -> Self {
        Self {
            summary: MediaSummary {
                format: Some(MediaFormat::Tv),
                status: Some(MediaStatus::Finished),
                ..MediaSummary::new(
                    id,
                    MediaTitle {
                        romaji: Some(format!("Test Anime {}", id)),
                        ..Default::default()
                    },
                )
            },
        }
    }

    pub fn romaji(mut self, title: &str) -> Self {
        self.summary.title.romaji = Some(title.to_string());
        self
    }

    pub fn english(mut self, title: &str) -> Self {
        self.summary.title.english = Some(title.to_string());
        self
    }

    pub fn score(mut self, score: u32) -> Self {
        self.summary.average_score = Some(score);
        self
    }

    pub fn popularity(mut self, popularity: u64) -> Self {
        self.summary.popularity = Some(popularity);
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.summary.season_year = Some(year);
        self
    }

    pub fn episodes(mut self, episodes: u32) -> Self {
        self.summary.episodes = Some(episodes);
        self
    }

    pub fn build(self) -> MediaSummary {
        self.summary
    }
}

pub fn page_of(items: Vec<MediaSummary>) -> ResultPage {
    ResultPage::new(items)
}

pub fn ids(page: &ResultPage) -> Vec<i64> {
    page.items.iter().map(|item| item.id).collect()
}

pub struct CandidateFactory {
    candidate: ImageCandidate,
}

impl CandidateFactory {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            candidate: ImageCandidate {
                poster_path: Some(format!("/poster_{}.jpg", id)),
                backdrop_path: Some(format!("/backdrop_{}.jpg", id)),
                vote_average: Some(0.0),
                popularity: Some(0.0),
                ..ImageCandidate::new(id, name)
            },
        }
    }

    pub fn also_named(mut self, name: &str) -> Self {
        self.candidate.names.push(name.to_string());
        self
    }

    pub fn aired(mut self, date: &str) -> Self {
        self.candidate.first_air_date = Some(date.to_string());
        self
    }

    pub fn vote(mut self, vote_average: f64) -> Self {
        self.candidate.vote_average = Some(vote_average);
        self
    }

    pub fn popularity(mut self, popularity: f64) -> Self {
        self.candidate.popularity = Some(popularity);
        self
    }

    pub fn without_backdrop(mut self) -> Self {
        self.candidate.backdrop_path = None;
        self
    }

    pub fn build(self) -> ImageCandidate {
        self.candidate
    }
}

pub fn session() -> UserSession {
    UserSession::new("user-1", "id-token-1")
        .with_profile(Some("Tester".to_string()), Some("tester@example.com".to_string()))
}

pub fn favorite(id: i64) -> FavoriteRecord {
    FavoriteRecord::from_media("user-1", &MediaFactory::new(id).build())
}
