use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{bearer_token, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use login_cell::error::LoginError;
use login_cell::services::client::{HttpLoginProvider, LoginProvider};
use shared_config::AppConfig;

fn test_config(base_url: &str, access_token: &str) -> AppConfig {
    AppConfig {
        login_channel_id: "1657000000-test".to_string(),
        login_api_base_url: base_url.to_string(),
        login_access_token: access_token.to_string(),
    }
}

#[tokio::test]
async fn test_init_succeeds_against_the_verify_endpoint() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/liff/v1/apps/1657000000-test/verify"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let provider = HttpLoginProvider::new(&test_config(&mock_server.uri(), "token-abc"));

    assert!(provider.init("1657000000-test").await.is_ok());
}

#[tokio::test]
async fn test_init_with_an_empty_channel_id_is_not_configured() {
    let provider = HttpLoginProvider::new(&test_config("http://localhost:1", ""));

    let err = provider.init("").await.unwrap_err();
    assert_matches!(err, LoginError::NotConfigured);
}

#[tokio::test]
async fn test_init_failure_is_reported() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let provider = HttpLoginProvider::new(&test_config(&mock_server.uri(), "token-abc"));

    let err = provider.init("1657000000-test").await.unwrap_err();
    assert_matches!(err, LoginError::InitFailed(_));
}

#[tokio::test]
async fn test_get_profile_parses_the_platform_payload() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/profile"))
        .and(bearer_token("token-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "displayName": "Chen Wei",
            "userId": "U4af4980629"
        })))
        .mount(&mock_server)
        .await;

    let provider = HttpLoginProvider::new(&test_config(&mock_server.uri(), "token-abc"));

    let profile = provider
        .get_profile()
        .await
        .expect("profile fetch should succeed")
        .expect("a profile should be returned");
    assert_eq!(profile.display_name, "Chen Wei");
    assert_eq!(profile.user_id, "U4af4980629");
}

#[tokio::test]
async fn test_get_profile_without_a_token_means_not_logged_in() {
    // no server: the call must short-circuit before any request
    let provider = HttpLoginProvider::new(&test_config("http://localhost:1", ""));

    let profile = provider.get_profile().await.expect("should not fail");
    assert!(profile.is_none());
}

#[tokio::test]
async fn test_get_profile_treats_401_as_logged_out() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/profile"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let provider = HttpLoginProvider::new(&test_config(&mock_server.uri(), "expired-token"));

    let profile = provider.get_profile().await.expect("should not fail");
    assert!(profile.is_none());
}

#[tokio::test]
async fn test_get_profile_server_error_is_reported() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/profile"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let provider = HttpLoginProvider::new(&test_config(&mock_server.uri(), "token-abc"));

    let err = provider.get_profile().await.unwrap_err();
    assert_matches!(err, LoginError::ProfileFetch(_));
}
