use async_trait::async_trait;
use tracing::debug;

use shared_config::AppConfig;

use crate::error::LoginError;
use crate::models::LoginProfile;

/// The two calls the wizard makes against the messaging-platform login SDK.
/// Injected rather than reached for as an ambient global, so tests can
/// substitute a fake.
#[async_trait]
pub trait LoginProvider: Send + Sync {
    async fn init(&self, channel_id: &str) -> Result<(), LoginError>;

    /// `None` means the platform is reachable but no user is logged in.
    async fn get_profile(&self) -> Result<Option<LoginProfile>, LoginError>;
}

/// Talks to the platform's HTTP API. The access token comes from the device
/// environment; without one there is no active login to fetch.
pub struct HttpLoginProvider {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl HttpLoginProvider {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.login_api_base_url.trim_end_matches('/').to_string(),
            access_token: config.login_access_token.clone(),
        }
    }
}

#[async_trait]
impl LoginProvider for HttpLoginProvider {
    async fn init(&self, channel_id: &str) -> Result<(), LoginError> {
        if channel_id.is_empty() {
            return Err(LoginError::NotConfigured);
        }

        let url = format!("{}/liff/v1/apps/{}/verify", self.base_url, channel_id);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(LoginError::InitFailed(format!(
                "verify endpoint returned {}",
                response.status()
            )));
        }

        debug!(channel_id, "login sdk initialized");
        Ok(())
    }

    async fn get_profile(&self) -> Result<Option<LoginProfile>, LoginError> {
        if self.access_token.is_empty() {
            return Ok(None);
        }

        let url = format!("{}/v2/profile", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        // An expired or revoked token is "not logged in", not a failure.
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(LoginError::ProfileFetch(format!(
                "profile endpoint returned {}",
                response.status()
            )));
        }

        let profile = response.json::<LoginProfile>().await?;
        Ok(Some(profile))
    }
}
