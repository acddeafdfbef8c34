use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

/// Signed-in identity handed over by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub user_id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    /// Bearer token for document store requests
    #[serde(skip_serializing)]
    pub id_token: String,
}

impl UserSession {
    pub fn new(user_id: impl Into<String>, id_token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: None,
            email: None,
            id_token: id_token.into(),
        }
    }

    pub fn with_profile(mut self, display_name: Option<String>, email: Option<String>) -> Self {
        self.display_name = display_name;
        self.email = email;
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.user_id.trim().is_empty() {
            return Err(AppError::ValidationError("Session has no user id".to_string()));
        }
        if self.id_token.trim().is_empty() {
            return Err(AppError::ValidationError("Session has no id token".to_string()));
        }
        Ok(())
    }
}
