//! HTTP adapter for the profile directory service.
//!
//! Talks to the internal identity service that owns profile rows. The
//! adapter performs exactly one request per `fetch_profile` call; retry
//! and coalescing are the session resolver's job.
//!
//! Classification:
//! - `404` - the actor is valid but has no profile row (`Ok(None)`)
//! - request timeout / connect failure / `5xx` - transient
//!   (`Timeout` / `Unavailable`)
//! - other `4xx` - terminal (`Rejected`), typically a bad service token

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, OrganizationId, UserId};
use crate::domain::identity::{OrgRole, Profile};
use crate::ports::{DirectoryError, ProfileDirectory};

/// Configuration for the HTTP directory client.
#[derive(Debug, Clone)]
pub struct ProfileDirectoryClientConfig {
    /// Base URL of the identity service (e.g. "https://identity.internal").
    pub base_url: String,

    /// Service token presented as a bearer credential.
    pub service_token: SecretString,

    /// Per-request timeout. This is the adapter's only timeout; a request
    /// exceeding it surfaces as `DirectoryError::Timeout`.
    pub request_timeout: Duration,
}

impl ProfileDirectoryClientConfig {
    /// Creates a configuration with the default 10 second timeout.
    pub fn new(base_url: impl Into<String>, service_token: SecretString) -> Self {
        Self {
            base_url: base_url.into(),
            service_token,
            request_timeout: Duration::from_secs(10),
        }
    }

    /// Sets a custom request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Wire shape of a profile row as the identity service returns it.
#[derive(Debug, Deserialize)]
struct ProfileRow {
    user_id: String,
    organization_id: Uuid,
    display_name: String,
    email: String,
    role: Option<OrgRole>,
}

impl ProfileRow {
    fn into_profile(self) -> Result<Profile, DirectoryError> {
        let user_id = UserId::new(self.user_id)
            .map_err(|e| DirectoryError::Rejected(format!("Invalid profile row: {}", e)))?;
        Ok(Profile::new(
            user_id,
            OrganizationId::from_uuid(self.organization_id),
            self.display_name,
            self.email,
            self.role,
        ))
    }
}

/// HTTP implementation of `ProfileDirectory`.
pub struct HttpProfileDirectory {
    client: reqwest::Client,
    config: ProfileDirectoryClientConfig,
}

impl HttpProfileDirectory {
    /// Creates a new directory client.
    pub fn new(config: ProfileDirectoryClientConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to build directory HTTP client: {}", e),
                )
            })?;
        Ok(Self { client, config })
    }

    fn profile_url(&self, actor_id: &str) -> String {
        format!(
            "{}/v1/profiles/{}",
            self.config.base_url.trim_end_matches('/'),
            actor_id
        )
    }

    fn classify_transport(error: reqwest::Error) -> DirectoryError {
        if error.is_timeout() {
            DirectoryError::Timeout
        } else {
            DirectoryError::Unavailable(error.to_string())
        }
    }
}

#[async_trait]
impl ProfileDirectory for HttpProfileDirectory {
    async fn fetch_profile(&self, actor_id: &str) -> Result<Option<Profile>, DirectoryError> {
        let url = self.profile_url(actor_id);
        tracing::debug!("Fetching profile row from {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(self.config.service_token.expose_secret())
            .send()
            .await
            .map_err(Self::classify_transport)?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let row: ProfileRow = response.json().await.map_err(|e| {
                    DirectoryError::Rejected(format!("Malformed profile row: {}", e))
                })?;
                row.into_profile().map(Some)
            }
            status if status.is_server_error() => {
                tracing::warn!("Directory returned {}", status);
                Err(DirectoryError::Unavailable(format!(
                    "Directory returned {}",
                    status
                )))
            }
            status => {
                tracing::warn!("Directory rejected request with {}", status);
                Err(DirectoryError::Rejected(format!(
                    "Directory returned {}",
                    status
                )))
            }
        }
    }
}
