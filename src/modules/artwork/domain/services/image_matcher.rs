use super::{match_scorer, title_normalizer::TitleNormalizer};
use crate::modules::artwork::domain::{
    entities::ImageCandidate,
    value_objects::{ImageUrlBuilder, MatchResult, MatchTarget},
};

/// Winning candidate together with its score
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateMatch<'a> {
    pub candidate: &'a ImageCandidate,
    pub score: f64,
}

/// Picks the best artwork candidate for a title
///
/// Network-free: candidates are fetched by the caller.
pub struct ImageMatcher {
    normalizer: TitleNormalizer,
    urls: ImageUrlBuilder,
}

impl Default for ImageMatcher {
    fn default() -> Self {
        Self::new(ImageUrlBuilder::default())
    }
}

impl ImageMatcher {
    pub fn new(urls: ImageUrlBuilder) -> Self {
        Self {
            normalizer: TitleNormalizer::for_matching(),
            urls,
        }
    }

    pub fn normalizer(&self) -> &TitleNormalizer {
        &self.normalizer
    }

    /// Normalized, de-duplicated titles of the target
    pub fn normalized_targets(&self, target: &MatchTarget) -> Vec<String> {
        self.normalizer.normalize_all(target.all_titles())
    }

    /// Score every candidate and return the most confident one
    pub fn best_candidate<'a>(
        &self,
        target: &MatchTarget,
        candidates: &'a [ImageCandidate],
    ) -> Option<CandidateMatch<'a>> {
        let targets = self.normalized_targets(target);
        if targets.is_empty() {
            return None;
        }

        let scores: Vec<f64> = candidates
            .iter()
            .map(|candidate| {
                let names = self
                    .normalizer
                    .normalize_all(candidate.names.iter().map(String::as_str));
                match_scorer::score_candidate(&targets, &names, candidate, target.season_year)
            })
            .collect();

        let (index, score) = match match_scorer::pick_best(&scores) {
            Some(best) => best,
            None => {
                log::debug!(
                    "No confident artwork match for {:?} among {} candidates",
                    target.primary_query(),
                    candidates.len()
                );
                return None;
            }
        };

        let candidate = &candidates[index];
        log::debug!(
            "Artwork match for {:?}: candidate {} ({:?}) scored {:.2}",
            target.primary_query(),
            candidate.id,
            candidate.names.first(),
            score
        );
        Some(CandidateMatch { candidate, score })
    }

    /// Poster and backdrop URLs of the best candidate, or [`MatchResult::none`]
    pub fn select(&self, target: &MatchTarget, candidates: &[ImageCandidate]) -> MatchResult {
        match self.best_candidate(target, candidates) {
            Some(CandidateMatch { candidate, .. }) => MatchResult {
                poster_url: self.urls.poster(candidate.poster_path.as_deref()),
                backdrop_url: self.urls.backdrop(candidate.backdrop_path.as_deref()),
            },
            None => MatchResult::none(),
        }
    }
}
