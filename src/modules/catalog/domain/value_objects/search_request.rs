use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::media_enums::{MediaFormat, MediaSeason, MediaSort, MediaStatus};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 24;

/// How results should be ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortMode {
    #[default]
    Popularity,
    Score,
    Trending,
    Latest,
    /// Weighted blend of score and popularity, computed client-side
    Hybrid,
}

impl SortMode {
    /// Parse a UI value, falling back to `Popularity` for anything unrecognized
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "SCORE" => SortMode::Score,
            "TRENDING" => SortMode::Trending,
            "LATEST" => SortMode::Latest,
            "HYBRID" => SortMode::Hybrid,
            _ => SortMode::Popularity,
        }
    }

    pub fn sort_keys(&self) -> Vec<MediaSort> {
        match self {
            SortMode::Popularity => vec![MediaSort::PopularityDesc],
            SortMode::Score => vec![MediaSort::ScoreDesc],
            SortMode::Trending => vec![MediaSort::TrendingDesc],
            SortMode::Latest => vec![MediaSort::StartDateDesc],
            SortMode::Hybrid => vec![MediaSort::ScoreDesc, MediaSort::PopularityDesc],
        }
    }

    /// The endpoint cannot compute this ordering, results must be re-ranked locally
    pub fn requires_client_rerank(&self) -> bool {
        matches!(self, SortMode::Hybrid)
    }
}

impl From<String> for SortMode {
    fn from(value: String) -> Self {
        Self::parse_lossy(&value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFilter {
    #[default]
    Any,
    Releasing,
    Finished,
}

impl StatusFilter {
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "RELEASING" => StatusFilter::Releasing,
            "FINISHED" => StatusFilter::Finished,
            _ => StatusFilter::Any,
        }
    }

    pub fn media_status(&self) -> Option<MediaStatus> {
        match self {
            StatusFilter::Any => None,
            StatusFilter::Releasing => Some(MediaStatus::Releasing),
            StatusFilter::Finished => Some(MediaStatus::Finished),
        }
    }
}

impl From<String> for StatusFilter {
    fn from(value: String) -> Self {
        Self::parse_lossy(&value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormatFilter {
    #[default]
    Any,
    Tv,
    Movie,
    Ova,
    Ona,
    Special,
}

impl FormatFilter {
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "TV" => FormatFilter::Tv,
            "MOVIE" => FormatFilter::Movie,
            "OVA" => FormatFilter::Ova,
            "ONA" => FormatFilter::Ona,
            "SPECIAL" => FormatFilter::Special,
            _ => FormatFilter::Any,
        }
    }

    pub fn media_format(&self) -> Option<MediaFormat> {
        match self {
            FormatFilter::Any => None,
            FormatFilter::Tv => Some(MediaFormat::Tv),
            FormatFilter::Movie => Some(MediaFormat::Movie),
            FormatFilter::Ova => Some(MediaFormat::Ova),
            FormatFilter::Ona => Some(MediaFormat::Ona),
            FormatFilter::Special => Some(MediaFormat::Special),
        }
    }
}

impl From<String> for FormatFilter {
    fn from(value: String) -> Self {
        Self::parse_lossy(&value)
    }
}

/// Numeric bounds sent as `episodes_greater` / `episodes_lesser`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EpisodeBounds {
    pub greater: Option<u32>,
    pub lesser: Option<u32>,
}

/// Episode count buckets
///
/// Buckets are `(greater, lesser]`: 12, 26 and 99 each close one bucket and are
/// excluded from the next by the strict lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum EpisodeRange {
    #[default]
    #[serde(rename = "ANY")]
    Any,
    #[serde(rename = "1_12")]
    UpTo12,
    #[serde(rename = "13_26")]
    From13To26,
    #[serde(rename = "27_99")]
    From27To99,
    #[serde(rename = "100_PLUS")]
    From100,
}

impl EpisodeRange {
    pub const ALL: [EpisodeRange; 5] = [
        EpisodeRange::Any,
        EpisodeRange::UpTo12,
        EpisodeRange::From13To26,
        EpisodeRange::From27To99,
        EpisodeRange::From100,
    ];

    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "1_12" => EpisodeRange::UpTo12,
            "13_26" => EpisodeRange::From13To26,
            "27_99" => EpisodeRange::From27To99,
            "100_PLUS" => EpisodeRange::From100,
            _ => EpisodeRange::Any,
        }
    }

    pub fn bounds(&self) -> EpisodeBounds {
        let (greater, lesser) = match self {
            EpisodeRange::Any => (None, None),
            EpisodeRange::UpTo12 => (Some(0), Some(12)),
            EpisodeRange::From13To26 => (Some(12), Some(26)),
            EpisodeRange::From27To99 => (Some(26), Some(99)),
            EpisodeRange::From100 => (Some(99), None),
        };
        EpisodeBounds { greater, lesser }
    }

    /// Whether an episode count falls in this bucket
    pub fn contains(&self, episodes: u32) -> bool {
        let bounds = self.bounds();
        bounds.greater.map_or(true, |low| episodes > low)
            && bounds.lesser.map_or(true, |high| episodes <= high)
    }
}

impl From<String> for EpisodeRange {
    fn from(value: String) -> Self {
        Self::parse_lossy(&value)
    }
}

/// Minimum average score filter; no upper bound is ever applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum ScoreRange {
    #[default]
    #[serde(rename = "ANY")]
    Any,
    #[serde(rename = "60_100")]
    From60,
    #[serde(rename = "70_100")]
    From70,
    #[serde(rename = "80_100")]
    From80,
    #[serde(rename = "90_100")]
    From90,
}

impl ScoreRange {
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "60_100" => ScoreRange::From60,
            "70_100" => ScoreRange::From70,
            "80_100" => ScoreRange::From80,
            "90_100" => ScoreRange::From90,
            _ => ScoreRange::Any,
        }
    }

    pub fn lower_bound(&self) -> Option<u32> {
        match self {
            ScoreRange::Any => None,
            ScoreRange::From60 => Some(60),
            ScoreRange::From70 => Some(70),
            ScoreRange::From80 => Some(80),
            ScoreRange::From90 => Some(90),
        }
    }
}

impl From<String> for ScoreRange {
    fn from(value: String) -> Self {
        Self::parse_lossy(&value)
    }
}

/// Declarative search / filter / sort request coming from the UI
///
/// Requests are values: every `with_*` call returns a new request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    pub search_term: Option<String>,
    pub sort_mode: SortMode,
    pub genres: BTreeSet<String>,
    pub status: StatusFilter,
    pub format: FormatFilter,
    pub episode_range: EpisodeRange,
    pub score_range: ScoreRange,
    pub recent_years_only: bool,
    pub season: Option<MediaSeason>,
    pub season_year: Option<i32>,
    pub page: u32,
    pub per_page: u32,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            search_term: None,
            sort_mode: SortMode::default(),
            genres: BTreeSet::new(),
            status: StatusFilter::default(),
            format: FormatFilter::default(),
            episode_range: EpisodeRange::default(),
            score_range: ScoreRange::default(),
            recent_years_only: false,
            season: None,
            season_year: None,
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search term with surrounding whitespace removed, `None` when blank
    pub fn trimmed_search_term(&self) -> Option<&str> {
        self.search_term
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self.page = DEFAULT_PAGE;
        self
    }

    pub fn with_sort_mode(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self.page = DEFAULT_PAGE;
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self.page = DEFAULT_PAGE;
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self.page = DEFAULT_PAGE;
        self
    }

    pub fn with_format(mut self, format: FormatFilter) -> Self {
        self.format = format;
        self.page = DEFAULT_PAGE;
        self
    }

    pub fn with_episode_range(mut self, range: EpisodeRange) -> Self {
        self.episode_range = range;
        self.page = DEFAULT_PAGE;
        self
    }

    pub fn with_score_range(mut self, range: ScoreRange) -> Self {
        self.score_range = range;
        self.page = DEFAULT_PAGE;
        self
    }

    pub fn with_recent_years_only(mut self, enabled: bool) -> Self {
        self.recent_years_only = enabled;
        self.page = DEFAULT_PAGE;
        self
    }

    pub fn with_season(mut self, season: Option<MediaSeason>, season_year: Option<i32>) -> Self {
        self.season = season;
        self.season_year = season_year;
        self.page = DEFAULT_PAGE;
        self
    }

    /// Change page without touching filters
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Back to neutral filters, keeping page size
    pub fn reset_filters(self) -> Self {
        Self {
            per_page: self.per_page,
            ..Self::default()
        }
    }
}
