use serde_json::Value;

use crate::config::Config;
use crate::error::{ImportError, Result};

/// Thin client for the OpenMRS REST API. Every call authenticates with the
/// same basic-auth credentials and blocks the pipeline until it completes;
/// there is no retry and no timeout.
pub struct OpenMrsClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl OpenMrsClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }

    /// Create a person resource and return its server-assigned uuid.
    pub async fn create_person(&self, payload: &Value) -> Result<String> {
        let body = self.create("person", payload).await?;
        extract_uuid(&body, "person")
    }

    /// Create a patient resource and return its server-assigned uuid.
    pub async fn create_patient(&self, payload: &Value) -> Result<String> {
        let body = self.create("patient", payload).await?;
        extract_uuid(&body, "patient")
    }

    /// Create an encounter resource and return the response body.
    pub async fn create_encounter(&self, payload: &Value) -> Result<Value> {
        self.create("encounter", payload).await
    }

    async fn create(&self, resource: &'static str, payload: &Value) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, resource);
        tracing::debug!(url = %url, "Creating {}", resource);

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImportError::Rejected {
                resource,
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

fn extract_uuid(body: &Value, resource: &'static str) -> Result<String> {
    body.get("uuid")
        .and_then(|uuid| uuid.as_str())
        .map(|uuid| uuid.to_string())
        .ok_or(ImportError::MissingUuid { resource })
}
