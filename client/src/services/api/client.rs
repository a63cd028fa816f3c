//! # API Client
//!
//! Main HTTP client for the supply API.
//!
//! Every authenticated call goes through [`ApiClient::authorized`], which reads the
//! session token and fails with [`AppError::MissingSession`] before any request is
//! built when no token is stored. Responses go through [`ApiClient::send`], which
//! maps transport failures, non-2xx statuses and undecodable bodies onto
//! [`AppError`].

use std::time::Instant;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::services::session::SessionStore;

/// HTTP client for the supply API.
///
/// Holds a connection-pooled `reqwest::Client` and the session it authenticates with.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Create a client for `config.api_base_url`.
    ///
    /// No timeout is set unless `config.request_timeout` asks for one.
    pub fn new(config: &AppConfig, session: SessionStore) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request builder with no credentials (login only)
    pub(crate) fn public(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Request builder carrying `Authorization: Bearer <token>`
    pub(crate) async fn authorized(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let token = self.session.get().await.ok_or_else(|| {
            tracing::warn!(path = %path, "Refusing authenticated request without a session");
            AppError::MissingSession
        })?;
        Ok(self.client.request(method, self.url(path)).bearer_auth(token))
    }

    /// Send a request and decode a JSON body of type `T`.
    ///
    /// An empty 2xx body decodes as `{}` so acknowledgement types with all-optional
    /// fields still succeed.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        let start = Instant::now();

        let response = request.send().await.map_err(|e| {
            tracing::error!(endpoint, error = %e, "Network error");
            AppError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!(endpoint, error = %e, "Failed to read response body");
            AppError::Transport(e.to_string())
        })?;
        let duration_ms = start.elapsed().as_millis();

        if !status.is_success() {
            tracing::warn!(
                endpoint,
                status = status.as_u16(),
                duration_ms,
                "API request failed"
            );
            return Err(AppError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload = if body.trim().is_empty() { "{}" } else { body.as_str() };
        let decoded = serde_json::from_str::<T>(payload).map_err(|e| {
            tracing::error!(endpoint, error = %e, "Response parse error");
            AppError::from(e)
        })?;

        tracing::debug!(endpoint, status = status.as_u16(), duration_ms, "API request succeeded");
        Ok(decoded)
    }
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, phone_number: u64, password: String) -> Result<shared::LoginResponse> {
        crate::services::api::auth::login(self, phone_number, password).await
    }

    async fn register_user(&self, request: shared::RegisterRequest) -> Result<shared::MessageResponse> {
        crate::services::api::auth::register_user(self, request).await
    }

    async fn get_rate(&self) -> Result<shared::Rate> {
        crate::services::api::rate::get_rate(self).await
    }

    async fn update_rate(
        &self,
        id: &str,
        request: shared::UpdateRateRequest,
    ) -> Result<shared::MessageResponse> {
        crate::services::api::rate::update_rate(self, id, request).await
    }

    async fn get_users(&self) -> Result<shared::UsersResponse> {
        crate::services::api::users::get_users(self).await
    }

    async fn get_supply(&self) -> Result<shared::SupplyPage> {
        crate::services::api::supply::get_supply(self).await
    }

    async fn post_supply(&self, entry: shared::NewSupply) -> Result<shared::MessageResponse> {
        crate::services::api::supply::post_supply(self, entry).await
    }

    async fn post_special_supply(&self, entry: shared::NewSupply) -> Result<shared::MessageResponse> {
        crate::services::api::supply::post_special_supply(self, entry).await
    }

    async fn get_supply_range(&self, range: &shared::SupplyRange) -> Result<shared::SupplyRangeResponse> {
        crate::services::api::supply::get_supply_range(self, range).await
    }

    async fn delete_supply(&self, id: &str) -> Result<shared::MessageResponse> {
        crate::services::api::supply::delete_supply(self, id).await
    }

    async fn mark_completed(&self, range: &shared::SupplyRange) -> Result<shared::MessageResponse> {
        crate::services::api::supply::mark_completed(self, range).await
    }
}
