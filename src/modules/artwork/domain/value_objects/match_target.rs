use serde::{Deserialize, Serialize};

/// Title to find artwork for
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTarget {
    pub title: Option<String>,
    pub alt_titles: Vec<String>,
    pub season_year: Option<i32>,
}

impl MatchTarget {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_alt_titles<I, S>(mut self, alt_titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alt_titles = alt_titles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_season_year(mut self, season_year: Option<i32>) -> Self {
        self.season_year = season_year;
        self
    }

    /// Query string: the title, else the first non-blank alternate title
    pub fn primary_query(&self) -> Option<&str> {
        self.title
            .iter()
            .chain(self.alt_titles.iter())
            .map(|title| title.trim())
            .find(|title| !title.is_empty())
    }

    /// Every title variant in priority order
    pub fn all_titles(&self) -> impl Iterator<Item = &str> {
        self.title
            .iter()
            .chain(self.alt_titles.iter())
            .map(String::as_str)
    }
}

/// Chosen artwork; both slots are `None` when nothing matched confidently
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
}

impl MatchResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.poster_url.is_none() && self.backdrop_url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_query_falls_back_to_alt_titles() {
        let target = MatchTarget {
            title: Some("   ".to_string()),
            alt_titles: vec!["".to_string(), " Frieren ".to_string()],
            season_year: None,
        };
        assert_eq!(target.primary_query(), Some("Frieren"));

        assert_eq!(MatchTarget::default().primary_query(), None);
        assert_eq!(MatchTarget::new("Naruto").primary_query(), Some("Naruto"));
    }

    #[test]
    fn test_match_result_none_is_empty() {
        assert!(MatchResult::none().is_empty());
        let partial = MatchResult {
            poster_url: None,
            backdrop_url: Some("b".to_string()),
        };
        assert!(!partial.is_empty());
    }
}
