use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("login sdk not configured")]
    NotConfigured,

    #[error("login sdk initialization failed: {0}")]
    InitFailed(String),

    #[error("profile fetch failed: {0}")]
    ProfileFetch(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
