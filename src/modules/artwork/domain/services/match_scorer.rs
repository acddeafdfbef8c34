//! Candidate scoring for artwork matching
//!
//! All functions are pure and operate on already normalized titles.

use crate::modules::artwork::domain::entities::ImageCandidate;

pub const EXACT_MATCH_SCORE: f64 = 100.0;
pub const CONTAINS_MATCH_SCORE: f64 = 70.0;
pub const SAME_YEAR_BONUS: f64 = 15.0;
pub const ADJACENT_YEAR_BONUS: f64 = 5.0;
pub const YEAR_MISMATCH_PENALTY: f64 = -20.0;
pub const VOTE_AVERAGE_WEIGHT: f64 = 2.0;
pub const POPULARITY_DIVISOR: f64 = 150.0;
/// Best scores below this are rejected instead of guessed
pub const CONFIDENCE_THRESHOLD: f64 = 40.0;

/// Score of one normalized pair: exact 100, containment 70, else 0
pub fn pair_score(target: &str, name: &str) -> f64 {
    if target.is_empty() || name.is_empty() {
        0.0
    } else if target == name {
        EXACT_MATCH_SCORE
    } else if target.contains(name) || name.contains(target) {
        CONTAINS_MATCH_SCORE
    } else {
        0.0
    }
}

/// Best pair score across every target and candidate name (max, never a sum)
pub fn name_score(targets: &[String], names: &[String]) -> f64 {
    targets
        .iter()
        .flat_map(|target| names.iter().map(move |name| pair_score(target, name)))
        .fold(0.0, f64::max)
}

/// +15 same year, +5 within one year, -20 otherwise; 0 when either year is unknown
pub fn year_adjustment(season_year: Option<i32>, candidate_year: Option<i32>) -> f64 {
    match (season_year, candidate_year) {
        (Some(hint), Some(year)) => match hint.abs_diff(year) {
            0 => SAME_YEAR_BONUS,
            1 => ADJACENT_YEAR_BONUS,
            _ => YEAR_MISMATCH_PENALTY,
        },
        _ => 0.0,
    }
}

/// Small bonus used to separate candidates of the same name tier
pub fn tie_breaker(candidate: &ImageCandidate) -> f64 {
    candidate.vote_average.unwrap_or(0.0) * VOTE_AVERAGE_WEIGHT
        + candidate.popularity.unwrap_or(0.0) / POPULARITY_DIVISOR
}

/// Total score of a candidate whose names are already normalized
pub fn score_candidate(
    targets: &[String],
    normalized_names: &[String],
    candidate: &ImageCandidate,
    season_year: Option<i32>,
) -> f64 {
    name_score(targets, normalized_names)
        + year_adjustment(season_year, candidate.first_air_year())
        + tie_breaker(candidate)
}

/// Index and score of the highest scoring candidate
///
/// Ties keep the earliest candidate. Returns `None` when the best score is
/// under [`CONFIDENCE_THRESHOLD`] or there are no candidates.
pub fn pick_best(scores: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, score) in scores.iter().copied().enumerate() {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }
    best.filter(|(_, score)| *score >= CONFIDENCE_THRESHOLD)
}
