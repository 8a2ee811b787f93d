use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub login_channel_id: String,
    pub login_api_base_url: String,
    pub login_access_token: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            login_channel_id: env::var("LOGIN_CHANNEL_ID")
                .unwrap_or_else(|_| {
                    warn!("LOGIN_CHANNEL_ID not set, login prefill disabled");
                    String::new()
                }),
            login_api_base_url: env::var("LOGIN_API_BASE_URL")
                .unwrap_or_else(|_| {
                    warn!("LOGIN_API_BASE_URL not set, using default");
                    "https://api.line.me".to_string()
                }),
            login_access_token: env::var("LOGIN_ACCESS_TOKEN")
                .unwrap_or_else(|_| String::new()),
        };

        if !config.is_login_configured() {
            warn!("Login integration not configured - the wizard runs unauthenticated");
        }

        config
    }

    pub fn is_login_configured(&self) -> bool {
        !self.login_channel_id.is_empty()
    }
}
