//! Integration tests for [`image_search_bot::search_candidates`] against a mock Bing endpoint.

use std::time::Duration;

use image_handlers::DEFAULT_MAX_IMAGE_BYTES;
use image_search_bot::{search_candidates, SearchConfig};
use image_search_client::BingSearchConfig;
use mockito::Matcher;

fn search_config(server: &mockito::ServerGuard) -> SearchConfig {
    SearchConfig {
        bing: BingSearchConfig::new("test-key").with_api_root(server.url()),
        commands: vec!["pic".to_string()],
        download_timeout: Duration::from_secs(5),
        max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
    }
}

/// **Test: candidates are deduplicated and filtered by the default preprocessor.**
#[tokio::test]
async fn test_search_candidates_preprocesses_results() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/Image")
        .match_query(Matcher::UrlEncoded("Query".into(), "'cats'".into()))
        .with_status(200)
        .with_body(
            r#"{"d": {"results": [
                {"MediaUrl": "https://img.test/a.jpg", "ContentType": "image/jpeg"},
                {"MediaUrl": "https://img.test/a.jpg", "ContentType": "image/jpeg"},
                {"MediaUrl": "https://img.test/b.svg", "ContentType": "image/svg+xml"},
                {"MediaUrl": "https://img.test/c.png", "ContentType": "image/png"}
            ]}}"#,
        )
        .create_async()
        .await;

    let images = search_candidates(&search_config(&server), "cats").await.unwrap();

    let mut urls: Vec<&str> = images.iter().map(|i| i.url.as_str()).collect();
    urls.sort();
    assert_eq!(urls, vec!["https://img.test/a.jpg", "https://img.test/c.png"]);
}

/// **Test: a failing provider yields an empty list, not an error.**
#[tokio::test]
async fn test_search_candidates_swallows_provider_errors() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/Image")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let images = search_candidates(&search_config(&server), "cats").await.unwrap();
    assert!(images.is_empty());
}

/// **Test: an invalid config is rejected before any request.**
#[tokio::test]
async fn test_search_candidates_rejects_invalid_config() {
    let server = mockito::Server::new_async().await;
    let mut config = search_config(&server);
    config.commands.clear();
    assert!(search_candidates(&config, "cats").await.is_err());
}
