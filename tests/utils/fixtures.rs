/// Canned upstream payloads
use serde_json::{json, Value};

pub fn anilist_media(id: i64, romaji: &str, score: i64, popularity: i64, year: i64) -> Value {
    json!({
        "id": id,
        "title": { "romaji": romaji, "english": null, "native": null },
        "coverImage": { "large": format!("https://img.anili.st/{}.jpg", id) },
        "bannerImage": null,
        "episodes": 12,
        "averageScore": score,
        "popularity": popularity,
        "genres": ["Action"],
        "format": "TV",
        "status": "FINISHED",
        "season": "SPRING",
        "seasonYear": year,
        "description": "..."
    })
}

pub fn anilist_page(media: Vec<Value>) -> Value {
    json!({
        "data": {
            "Page": {
                "pageInfo": { "currentPage": 1, "lastPage": 3, "hasNextPage": true },
                "media": media
            }
        }
    })
}

pub fn tmdb_show(id: i64, name: &str, original_name: &str, first_air_date: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "original_name": original_name,
        "first_air_date": first_air_date,
        "vote_average": 8.0,
        "popularity": 45.0,
        "poster_path": format!("/poster_{}.jpg", id),
        "backdrop_path": format!("/backdrop_{}.jpg", id),
        "origin_country": ["JP"]
    })
}

pub fn tmdb_results(results: Vec<Value>) -> Value {
    let total = results.len();
    json!({
        "page": 1,
        "results": results,
        "total_pages": 1,
        "total_results": total
    })
}

pub fn firestore_document(user_id: &str, anime_id: i64, romaji: &str) -> Value {
    json!({
        "name": format!(
            "projects/demo/databases/(default)/documents/favorites/{}_{}",
            user_id, anime_id
        ),
        "fields": {
            "userId": { "stringValue": user_id },
            "animeId": { "integerValue": anime_id.to_string() },
            "titleRomaji": { "stringValue": romaji },
            "format": { "stringValue": "TV" },
            "averageScore": { "integerValue": "80" }
        },
        "createTime": "2024-01-01T00:00:00Z",
        "updateTime": "2024-01-01T00:00:00Z"
    })
}
