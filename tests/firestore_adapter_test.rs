mod utils;

use anidex_lib::modules::favorites::{FavoritesRepository, FirestoreFavoritesAdapter};
use anidex_lib::shared::{config::FirebaseConfig, errors::AppError};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use utils::factories::{favorite, session};
use utils::fixtures::firestore_document;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOCUMENTS: &str = "/projects/demo/databases/(default)/documents";

fn adapter(mock_server: &MockServer) -> FirestoreFavoritesAdapter {
    let config = FirebaseConfig {
        api_key: Some("fb-key".to_string()),
        project_id: Some("demo".to_string()),
        firestore_base_url: mock_server.uri(),
    };
    FirestoreFavoritesAdapter::new(&config).unwrap()
}

#[tokio::test]
async fn test_list_runs_user_query_with_bearer_token() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{}:runQuery", DOCUMENTS)))
        .and(query_param("key", "fb-key"))
        .and(header("authorization", "Bearer id-token-1"))
        .and(body_partial_json(json!({
            "structuredQuery": {
                "where": { "fieldFilter": { "value": { "stringValue": "user-1" } } }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "document": firestore_document("user-1", 21, "One Piece"), "readTime": "2024-01-01T00:00:00Z" },
            { "document": firestore_document("user-1", 1535, "Death Note"), "readTime": "2024-01-01T00:00:00Z" }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let records = adapter(&mock_server).list_for_user(&session()).await.unwrap();

    let ids: Vec<i64> = records.iter().map(|record| record.anime_id).collect();
    assert_eq!(ids, vec![21, 1535]);
    assert_eq!(records[1].title.romaji.as_deref(), Some("Death Note"));
    assert_eq!(records[0].average_score, Some(80));
}

#[tokio::test]
async fn test_empty_collection_returns_metadata_only_row() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{}:runQuery", DOCUMENTS)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "readTime": "2024-01-01T00:00:00Z" }])),
        )
        .mount(&mock_server)
        .await;

    let records = adapter(&mock_server).list_for_user(&session()).await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_save_patches_composite_document() {
    let mock_server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(format!("{}/favorites/user-1_21", DOCUMENTS)))
        .and(header("authorization", "Bearer id-token-1"))
        .and(body_partial_json(json!({
            "fields": {
                "userId": { "stringValue": "user-1" },
                "animeId": { "integerValue": "21" },
                "titleRomaji": { "stringValue": "Test Anime 21" },
                "format": { "stringValue": "TV" }
            }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(firestore_document("user-1", 21, "Test Anime 21")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    assert_ok!(adapter(&mock_server).save(&session(), &favorite(21)).await);
}

#[tokio::test]
async fn test_save_for_other_user_is_rejected_locally() {
    let mock_server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut record = favorite(21);
    record.user_id = "someone-else".to_string();

    let err = assert_err!(adapter(&mock_server).save(&session(), &record).await);

    assert!(matches!(err, AppError::ValidationError(_)));
}

#[tokio::test]
async fn test_remove_deletes_document() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{}/favorites/user-1_21", DOCUMENTS)))
        .and(query_param("key", "fb-key"))
        .and(header("authorization", "Bearer id-token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert_ok!(adapter(&mock_server).remove(&session(), 21).await);
}

#[tokio::test]
async fn test_permission_denied_is_transport_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "Missing or insufficient permissions.", "status": "PERMISSION_DENIED" }
        })))
        .mount(&mock_server)
        .await;

    let result = adapter(&mock_server).remove(&session(), 21).await;

    match result {
        Err(AppError::TransportError(message)) => {
            assert!(message.contains("insufficient permissions"))
        }
        other => panic!("expected TransportError, got {:?}", other),
    }
}
