/// Transformation that can be applied to a title
///
/// Each transformation is composable and testable in isolation.
pub trait TitleTransformation: Send + Sync {
    fn transform(&self, title: &str) -> String;
    fn name(&self) -> &'static str;
}

/// Converts title to lowercase
#[derive(Debug, Clone)]
pub struct LowercaseTransform;

impl TitleTransformation for LowercaseTransform {
    fn transform(&self, title: &str) -> String {
        title.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "Lowercase"
    }
}

/// Keeps ASCII alphanumerics, whitespace, Hangul, kana and CJK ideographs
#[derive(Debug, Clone)]
pub struct KeepTitleScriptsTransform;

impl KeepTitleScriptsTransform {
    pub fn is_title_char(c: char) -> bool {
        c.is_ascii_alphanumeric()
            || c.is_whitespace()
            || matches!(c,
                '\u{AC00}'..='\u{D7A3}'   // Hangul syllables
                | '\u{1100}'..='\u{11FF}' // Hangul jamo
                | '\u{3131}'..='\u{318E}' // Hangul compatibility jamo
                | '\u{3041}'..='\u{3096}' // Hiragana
                | '\u{30A1}'..='\u{30FA}' // Katakana
                | '\u{30FC}'              // Katakana prolonged sound mark
                | '\u{4E00}'..='\u{9FFF}' // CJK unified ideographs
                | '\u{3400}'..='\u{4DBF}' // CJK extension A
            )
    }
}

impl TitleTransformation for KeepTitleScriptsTransform {
    fn transform(&self, title: &str) -> String {
        title.chars().filter(|c| Self::is_title_char(*c)).collect()
    }

    fn name(&self) -> &'static str {
        "KeepTitleScripts"
    }
}

/// Normalizes whitespace (collapses multiple spaces, trims)
#[derive(Debug, Clone)]
pub struct NormalizeWhitespaceTransform;

impl TitleTransformation for NormalizeWhitespaceTransform {
    fn transform(&self, title: &str) -> String {
        title.split_whitespace().collect::<Vec<&str>>().join(" ")
    }

    fn name(&self) -> &'static str {
        "NormalizeWhitespace"
    }
}

/// Title normalizer that applies a pipeline of transformations
pub struct TitleNormalizer {
    transformations: Vec<Box<dyn TitleTransformation>>,
}

impl TitleNormalizer {
    /// Create a new empty normalizer
    pub fn new() -> Self {
        Self {
            transformations: Vec::new(),
        }
    }

    /// Pipeline used before any title comparison
    pub fn for_matching() -> Self {
        Self::new()
            .with_lowercase()
            .with_keep_title_scripts()
            .with_normalize_whitespace()
    }

    pub fn with_lowercase(mut self) -> Self {
        self.transformations.push(Box::new(LowercaseTransform));
        self
    }

    pub fn with_keep_title_scripts(mut self) -> Self {
        self.transformations.push(Box::new(KeepTitleScriptsTransform));
        self
    }

    pub fn with_normalize_whitespace(mut self) -> Self {
        self.transformations
            .push(Box::new(NormalizeWhitespaceTransform));
        self
    }

    /// Apply all transformations to the title
    pub fn normalize(&self, title: &str) -> String {
        let mut result = title.to_string();

        for transformation in &self.transformations {
            result = transformation.transform(&result);
            log::trace!("After {}: '{}'", transformation.name(), result);
        }

        result
    }

    /// Normalize every title, dropping blanks and duplicates, first occurrence wins
    pub fn normalize_all<'a, I>(&self, titles: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for title in titles {
            let value = self.normalize(title);
            if !value.is_empty() && !normalized.contains(&value) {
                normalized.push(value);
            }
        }
        normalized
    }

    pub fn transformation_count(&self) -> usize {
        self.transformations.len()
    }
}

impl Default for TitleNormalizer {
    fn default() -> Self {
        Self::for_matching()
    }
}
