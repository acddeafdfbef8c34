use super::models::{
    integer_value, read_integer, read_string, string_value, FirestoreDocument, FirestoreFields,
};
use crate::modules::catalog::domain::{entities::MediaTitle, value_objects::MediaFormat};
use crate::modules::favorites::domain::entities::FavoriteRecord;

/// Converts favorite records to and from Firestore documents
#[derive(Debug, Clone, Default)]
pub struct FirestoreMapper;

impl FirestoreMapper {
    pub fn new() -> Self {
        Self
    }

    /// Typed fields of a record; absent values are left out
    pub fn to_fields(&self, record: &FavoriteRecord) -> FirestoreFields {
        let mut fields = FirestoreFields::new();
        fields.insert("userId".to_string(), string_value(&record.user_id));
        fields.insert("animeId".to_string(), integer_value(record.anime_id));

        let strings = [
            ("titleRomaji", record.title.romaji.as_deref()),
            ("titleEnglish", record.title.english.as_deref()),
            ("titleNative", record.title.native.as_deref()),
            ("coverImage", record.cover_image_url.as_deref()),
            ("format", record.format.map(|format| format.as_str())),
        ];
        for (key, value) in strings {
            if let Some(value) = value.filter(|value| !value.is_empty()) {
                fields.insert(key.to_string(), string_value(value));
            }
        }

        let integers = [
            ("averageScore", record.average_score.map(u64::from)),
            ("episodes", record.episodes.map(u64::from)),
            ("popularity", record.popularity),
        ];
        for (key, value) in integers {
            if let Some(value) = value {
                fields.insert(key.to_string(), integer_value(value));
            }
        }

        fields
    }

    /// Anime id from the numeric suffix of a `.../favorites/{uid}_{animeId}` name
    fn anime_id_from_name(name: &str) -> Option<i64> {
        let document_id = name.rsplit('/').next()?;
        document_id.rsplit('_').next()?.parse().ok()
    }

    /// Record from a stored document; `None` when no usable anime id exists
    pub fn from_document(&self, document: FirestoreDocument, user_id: &str) -> Option<FavoriteRecord> {
        let fields = &document.fields;
        let anime_id = read_integer(fields, "animeId")
            .or_else(|| document.name.as_deref().and_then(Self::anime_id_from_name))
            .filter(|id| *id > 0)?;

        let non_negative_u32 = |key: &str| read_integer(fields, key).and_then(|v| u32::try_from(v).ok());

        Some(FavoriteRecord {
            user_id: read_string(fields, "userId").unwrap_or_else(|| user_id.to_string()),
            anime_id,
            title: MediaTitle {
                romaji: read_string(fields, "titleRomaji"),
                english: read_string(fields, "titleEnglish"),
                native: read_string(fields, "titleNative"),
            },
            cover_image_url: read_string(fields, "coverImage"),
            format: read_string(fields, "format").map(|format| MediaFormat::parse_lossy(&format)),
            average_score: non_negative_u32("averageScore"),
            episodes: non_negative_u32("episodes"),
            popularity: read_integer(fields, "popularity").and_then(|v| u64::try_from(v).ok()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> FavoriteRecord {
        FavoriteRecord {
            user_id: "uid".to_string(),
            anime_id: 21,
            title: MediaTitle {
                romaji: Some("One Piece".to_string()),
                english: None,
                native: Some("ワンピース".to_string()),
            },
            cover_image_url: Some("https://img/21.jpg".to_string()),
            format: Some(MediaFormat::Tv),
            average_score: Some(88),
            episodes: None,
            popularity: Some(500000),
        }
    }

    #[test]
    fn test_to_fields_omits_absent_values() {
        let fields = FirestoreMapper::new().to_fields(&record());

        assert_eq!(fields["userId"], json!({ "stringValue": "uid" }));
        assert_eq!(fields["animeId"], json!({ "integerValue": "21" }));
        assert_eq!(fields["format"], json!({ "stringValue": "TV" }));
        assert_eq!(fields["averageScore"], json!({ "integerValue": "88" }));
        assert!(!fields.contains_key("episodes"));
        assert!(!fields.contains_key("titleEnglish"));
    }

    #[test]
    fn test_document_round_trip_keeps_record() {
        let mapper = FirestoreMapper::new();
        let document = FirestoreDocument {
            name: Some("projects/p/databases/(default)/documents/favorites/uid_21".to_string()),
            fields: mapper.to_fields(&record()),
        };

        assert_eq!(mapper.from_document(document, "uid"), Some(record()));
    }

    #[test]
    fn test_anime_id_falls_back_to_document_name() {
        let document = FirestoreDocument {
            name: Some("projects/p/databases/(default)/documents/favorites/abc_def_77".to_string()),
            fields: FirestoreFields::new(),
        };

        let record = FirestoreMapper::new().from_document(document, "abc_def").unwrap();

        assert_eq!(record.anime_id, 77);
        assert_eq!(record.user_id, "abc_def");
    }

    #[test]
    fn test_document_without_id_is_skipped() {
        let document = FirestoreDocument {
            name: Some("projects/p/databases/(default)/documents/favorites/uid_".to_string()),
            fields: FirestoreFields::new(),
        };

        assert!(FirestoreMapper::new().from_document(document, "uid").is_none());
    }
}
