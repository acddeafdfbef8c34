//! Firestore REST adapter for favorites
//!
//! Records live in the `favorites` collection under `{userId}_{animeId}`.
//! Every call is authorized with the session's id token.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{mapper::FirestoreMapper, models::RunQueryRow};
use crate::{
    modules::favorites::domain::{
        entities::{FavoriteRecord, UserSession},
        repositories::FavoritesRepository,
    },
    shared::{
        config::FirebaseConfig,
        errors::{AppError, AppResult},
        infrastructure::HttpClient,
    },
};

pub const FAVORITES_COLLECTION: &str = "favorites";

pub struct FirestoreFavoritesAdapter {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
    project_id: String,
    mapper: FirestoreMapper,
}

impl FirestoreFavoritesAdapter {
    /// Fails with a configuration error when the api key or project id is missing
    pub fn new(config: &FirebaseConfig) -> AppResult<Self> {
        let (api_key, project_id) = config.credentials()?;
        Ok(Self {
            http_client: HttpClient::new("Firestore"),
            base_url: config.firestore_base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            project_id: project_id.to_string(),
            mapper: FirestoreMapper::new(),
        })
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents",
            self.base_url, self.project_id
        )
    }

    fn run_query_url(&self) -> String {
        format!(
            "{}:runQuery?key={}",
            self.documents_url(),
            urlencoding::encode(&self.api_key)
        )
    }

    fn document_url(&self, document_id: &str) -> String {
        format!(
            "{}/{}/{}?key={}",
            self.documents_url(),
            FAVORITES_COLLECTION,
            urlencoding::encode(document_id),
            urlencoding::encode(&self.api_key)
        )
    }

    fn user_query(user_id: &str) -> Value {
        json!({
            "structuredQuery": {
                "from": [{ "collectionId": FAVORITES_COLLECTION }],
                "where": {
                    "fieldFilter": {
                        "field": { "fieldPath": "userId" },
                        "op": "EQUAL",
                        "value": { "stringValue": user_id }
                    }
                }
            }
        })
    }

    fn ensure_session(session: &UserSession) -> AppResult<()> {
        session.validate()
    }
}

#[async_trait]
impl FavoritesRepository for FirestoreFavoritesAdapter {
    async fn list_for_user(&self, session: &UserSession) -> AppResult<Vec<FavoriteRecord>> {
        Self::ensure_session(session)?;
        log::info!("Firestore: Listing favorites for user {}", session.user_id);

        let rows: Vec<RunQueryRow> = self
            .http_client
            .post_json(
                &self.run_query_url(),
                &Self::user_query(&session.user_id),
                Some(&session.id_token),
            )
            .await?;

        let records: Vec<FavoriteRecord> = rows
            .into_iter()
            .filter_map(|row| row.document)
            .filter_map(|document| self.mapper.from_document(document, &session.user_id))
            .collect();

        log::info!(
            "Firestore: Found {} favorites for user {}",
            records.len(),
            session.user_id
        );
        Ok(records)
    }

    async fn save(&self, session: &UserSession, record: &FavoriteRecord) -> AppResult<()> {
        Self::ensure_session(session)?;
        if record.user_id != session.user_id {
            return Err(AppError::ValidationError(format!(
                "Favorite {} belongs to another user",
                record.document_id()
            )));
        }

        log::info!("Firestore: Saving favorite {}", record.document_id());
        let body = json!({ "fields": self.mapper.to_fields(record) });
        let _: Value = self
            .http_client
            .patch_json(
                &self.document_url(&record.document_id()),
                &body,
                Some(&session.id_token),
            )
            .await?;
        Ok(())
    }

    async fn remove(&self, session: &UserSession, anime_id: i64) -> AppResult<()> {
        Self::ensure_session(session)?;
        let document_id = FavoriteRecord::document_id_for(&session.user_id, anime_id);

        log::info!("Firestore: Removing favorite {}", document_id);
        self.http_client
            .delete(&self.document_url(&document_id), Some(&session.id_token))
            .await
    }
}
