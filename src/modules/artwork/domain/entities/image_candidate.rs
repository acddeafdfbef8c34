use serde::{Deserialize, Serialize};

/// One raw result of the image search endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageCandidate {
    pub id: i64,
    /// Localized and original names
    pub names: Vec<String>,
    /// `YYYY-MM-DD` as sent upstream, possibly empty
    pub first_air_date: Option<String>,
    pub vote_average: Option<f64>,
    pub popularity: Option<f64>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

impl ImageCandidate {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            names: vec![name.into()],
            ..Default::default()
        }
    }

    /// Year from a leading four-digit prefix of the first air date
    pub fn first_air_year(&self) -> Option<i32> {
        let date = self.first_air_date.as_deref()?;
        let prefix = date.get(..4)?;
        if prefix.chars().all(|c| c.is_ascii_digit()) {
            prefix.parse().ok()
        } else {
            None
        }
    }
}
