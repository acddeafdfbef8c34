use crate::shared::config::DEFAULT_TMDB_IMAGE_BASE_URL;

pub const POSTER_SIZE: &str = "w500";
pub const BACKDROP_SIZE: &str = "w780";

/// Builds absolute image CDN URLs from relative image paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    base_url: String,
}

impl Default for ImageUrlBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_TMDB_IMAGE_BASE_URL)
    }
}

impl ImageUrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/{size}{path}`, `None` for a missing or blank path
    pub fn build(&self, path: Option<&str>, size: &str) -> Option<String> {
        let path = path.map(str::trim).filter(|path| !path.is_empty())?;
        if path.starts_with('/') {
            Some(format!("{}/{}{}", self.base_url, size, path))
        } else {
            Some(format!("{}/{}/{}", self.base_url, size, path))
        }
    }

    pub fn poster(&self, path: Option<&str>) -> Option<String> {
        self.build(path, POSTER_SIZE)
    }

    pub fn backdrop(&self, path: Option<&str>) -> Option<String> {
        self.build(path, BACKDROP_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_and_backdrop_sizes() {
        let urls = ImageUrlBuilder::default();

        assert_eq!(
            urls.poster(Some("/abc.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
        assert_eq!(
            urls.backdrop(Some("/wide.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w780/wide.jpg")
        );
    }

    #[test]
    fn test_missing_path_yields_none() {
        let urls = ImageUrlBuilder::new("http://cdn.local/");
        assert_eq!(urls.poster(None), None);
        assert_eq!(urls.backdrop(Some("  ")), None);
        assert_eq!(
            urls.poster(Some("p.jpg")).as_deref(),
            Some("http://cdn.local/w500/p.jpg")
        );
    }
}
