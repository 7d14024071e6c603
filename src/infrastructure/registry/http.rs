//! HTTP registry client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::{entry_document, INDEX_DOCUMENT};
use crate::domain::ports::{RegistrySource, SourceError};

/// A registry served over HTTP(S), e.g. `https://ui.shadcn.com/r`
#[derive(Debug, Clone)]
pub struct HttpRegistry {
    base: String,
    client: Client,
}

impl HttpRegistry {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            base,
            client: Client::new(),
        }
    }

    fn url(&self, document: &str) -> String {
        format!("{}/{}", self.base, document)
    }

    async fn get_json(&self, url: String) -> Result<Value, SourceError> {
        tracing::debug!(%url, "fetching registry document");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        tracing::debug!(%url, status = status.as_u16(), "registry responded");

        match status {
            StatusCode::UNAUTHORIZED => return Err(SourceError::Unauthorized { url }),
            StatusCode::FORBIDDEN => return Err(SourceError::Forbidden { url }),
            StatusCode::NOT_FOUND => return Err(SourceError::NotFound { url }),
            s if !s.is_success() => {
                // Registries may explain the failure in an `error` field.
                let body: Option<Value> = response.json().await.ok();
                let message = body
                    .as_ref()
                    .and_then(|b| b.get("error"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .or_else(|| s.canonical_reason().map(str::to_string))
                    .unwrap_or_else(|| "request failed".to_string());
                return Err(SourceError::Status {
                    url,
                    status: s.as_u16(),
                    message,
                });
            }
            _ => {}
        }

        let text = response.text().await.map_err(|e| SourceError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| SourceError::InvalidJson {
            url,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl RegistrySource for HttpRegistry {
    fn location(&self) -> &str {
        &self.base
    }

    async fn fetch_index(&self) -> Result<Value, SourceError> {
        self.get_json(self.url(INDEX_DOCUMENT)).await
    }

    async fn fetch_entry(&self, style: &str, name: &str) -> Result<Value, SourceError> {
        self.get_json(self.url(&entry_document(style, name))).await
    }
}
