use super::models::TvShow;
use crate::modules::artwork::domain::entities::ImageCandidate;

#[derive(Debug, Clone, Default)]
pub struct TmdbMapper;

impl TmdbMapper {
    pub fn new() -> Self {
        Self
    }

    /// Localized name first, then the original name when it differs
    pub fn map_candidate(&self, show: TvShow) -> ImageCandidate {
        let mut names: Vec<String> = Vec::new();
        for name in [show.name, show.original_name].into_iter().flatten() {
            if !name.trim().is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }

        ImageCandidate {
            id: show.id,
            names,
            first_air_date: show.first_air_date.filter(|date| !date.is_empty()),
            vote_average: show.vote_average,
            popularity: show.popularity,
            poster_path: show.poster_path,
            backdrop_path: show.backdrop_path,
        }
    }

    pub fn map_candidates(&self, shows: Vec<TvShow>) -> Vec<ImageCandidate> {
        shows
            .into_iter()
            .map(|show| self.map_candidate(show))
            .collect()
    }
}
