//! HTTP transport for the dashboard backend.
//!
//! Wraps the backend's REST endpoints using [`reqwest`], attaching the
//! bearer token and mapping non-2xx responses to [`ClientError::Api`].

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::envelope;
use crate::error::ClientError;
use crate::transport::{ApiRequest, Transport, UploadRequest};

/// Multipart field name the upload endpoint reads the file from.
const UPLOAD_FIELD: &str = "file";

/// HTTP client for a single backend instance.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client with a per-request timeout.
    ///
    /// * `base_url` - Backend origin, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ---- private helpers ----

    /// Return the response unchanged on 2xx, otherwise an
    /// [`ClientError::Api`] carrying the backend's message.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|value| envelope::message(&value))
            .unwrap_or(body);
        tracing::warn!(status = status.as_u16(), %message, "Backend returned an error status");
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Decode a successful response body; empty bodies become `null`.
    async fn parse_response(response: reqwest::Response) -> Result<Value, ClientError> {
        let response = Self::ensure_success(response).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, ClientError> {
        tracing::debug!(method = ?request.method, path = %request.path, "Sending request");

        let mut builder = self
            .client
            .request(request.method.into(), self.url(&request.path))
            .query(&request.query);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        Self::parse_response(response).await
    }

    async fn upload(&self, request: UploadRequest) -> Result<Value, ClientError> {
        tracing::debug!(path = %request.path, file = %request.file_name, "Uploading file");

        let part = reqwest::multipart::Part::bytes(request.bytes)
            .file_name(request.file_name)
            .mime_str(&request.mime_type)?;
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD, part);

        let mut builder = self.client.post(self.url(&request.path)).multipart(form);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        Self::parse_response(response).await
    }
}
