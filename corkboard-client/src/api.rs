use corkboard_core::api::{ApiResponse, UpdateThemeRequest, routes::v1};
use corkboard_model::UserThemePreferences;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::{sync::Arc, time::Duration};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::ClientError;

/// Theme endpoints of a Corkboard server, authenticated with a bearer token.
#[derive(Clone, Debug)]
pub struct ThemeApiClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ThemeApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub async fn fetch_preferences(
        &self,
    ) -> Result<UserThemePreferences, ClientError> {
        let request = self.client.get(self.url(v1::users::CURRENT_THEME));
        self.execute_json(request).await
    }

    /// Sends the whole-record update and returns what the server stored.
    pub async fn save(
        &self,
        update: &UpdateThemeRequest,
    ) -> Result<UserThemePreferences, ClientError> {
        let request = self
            .client
            .put(self.url(v1::users::CURRENT_THEME))
            .json(update);
        self.execute_json(request).await
    }

    pub async fn reset(&self) -> Result<UserThemePreferences, ClientError> {
        self.save(&UpdateThemeRequest::reset()).await
    }

    pub async fn fetch_css(&self) -> Result<String, ClientError> {
        let request = self.client.get(self.url(v1::users::CURRENT_THEME_CSS));
        let response = self.execute(request).await?;
        Ok(response.text().await?)
    }

    async fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token.read().await.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = self.authorize(request).await.send().await?;

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => {
                debug!("session rejected; clearing token");
                self.set_token(None).await;
                Err(ClientError::Unauthorized)
            }
            status => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                warn!(%status, %message, "theme request rejected");
                Err(ClientError::Rejected {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.execute(request).await?;
        let envelope: ApiResponse<T> = response.json().await?;
        envelope.data.ok_or_else(|| {
            ClientError::InvalidResponse(
                envelope
                    .error
                    .unwrap_or_else(|| "Empty response from server".to_string()),
            )
        })
    }
}
