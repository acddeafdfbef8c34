//! JSON HTTP client shared by every external adapter
//!
//! Requests are issued once: a transport failure or a non-2xx status surfaces
//! immediately as [`AppError::TransportError`], nothing is retried.

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::TimedOperation;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

const USER_AGENT: &str = "anidex/0.1 (+https://github.com/anidex/anidex)";

/// Thin wrapper over `reqwest::Client` that decodes JSON bodies
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    provider_name: String,
}

impl HttpClient {
    pub fn new(provider_name: &str) -> Self {
        Self {
            client: Client::new(),
            provider_name: provider_name.to_string(),
        }
    }

    /// Create a client with a preconfigured `reqwest::Client` (for testing)
    pub fn with_client(provider_name: &str, client: Client) -> Self {
        Self {
            client,
            provider_name: provider_name.to_string(),
        }
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// GET and decode a JSON body
    pub async fn get<T>(&self, url: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(Method::GET, url, None, None).await?;
        self.parse_response(response).await
    }

    /// POST a JSON body and decode the JSON response
    pub async fn post_json<T>(&self, url: &str, body: &Value, bearer: Option<&str>) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, url, Some(body), bearer).await?;
        self.parse_response(response).await
    }

    /// PATCH a JSON body and decode the JSON response
    pub async fn patch_json<T>(&self, url: &str, body: &Value, bearer: Option<&str>) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(Method::PATCH, url, Some(body), bearer).await?;
        self.parse_response(response).await
    }

    /// DELETE, ignoring any response body
    pub async fn delete(&self, url: &str, bearer: Option<&str>) -> AppResult<()> {
        self.send(Method::DELETE, url, None, bearer).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> AppResult<Response> {
        let timer = TimedOperation::new(&self.provider_name, method.as_str());

        let mut request_builder = self
            .client
            .request(method, url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json");

        if let Some(token) = bearer {
            request_builder = request_builder.bearer_auth(token);
        }

        // Add body for POST/PATCH requests
        if let Some(json_body) = body {
            request_builder = request_builder.json(json_body);
        }

        let response = request_builder.send().await.map_err(|e| {
            log::warn!("{} request failed: {}", self.provider_name, e);
            AppError::TransportError(format!("{} request failed: {}", self.provider_name, e))
        })?;

        let status = response.status();
        timer.finish(status.as_str());

        if !status.is_success() {
            let detail = Self::error_detail(response).await;
            log::error!(
                "{} API returned error: {}{}",
                self.provider_name,
                status,
                detail.as_deref().map(|d| format!(" ({})", d)).unwrap_or_default()
            );
            return Err(AppError::TransportError(match detail {
                Some(detail) => format!("{} API returned {}: {}", self.provider_name, status, detail),
                None => format!("{} API returned {}", self.provider_name, status),
            }));
        }

        Ok(response)
    }

    /// Pull `error.message` (Google), `errors[0].message` (GraphQL) or
    /// `status_message` (TMDB) out of an error body
    async fn error_detail(response: Response) -> Option<String> {
        let body: Value = response.json().await.ok()?;
        body.pointer("/error/message")
            .or_else(|| body.pointer("/0/error/message"))
            .or_else(|| body.pointer("/errors/0/message"))
            .or_else(|| body.get("status_message"))
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Parse the response body as JSON
    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::TransportError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name,
                e,
                if response_text.len() > 200 {
                    format!("{}...", response_text.chars().take(200).collect::<String>())
                } else {
                    response_text
                }
            ))
        })
    }
}
