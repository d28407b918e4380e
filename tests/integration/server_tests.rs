//! Integration tests for the HTTP service
//!
//! The router is served on an ephemeral port and driven with reqwest while
//! wiremock plays the job board.

mod common;

use common::{results_page, test_config, SEARCH_PATH};
use job_harvest::crawler::Harvester;
use axum::routing::get;
use axum::Router;
use job_harvest::server::{build_router, health_handler, with_layers, AppState};
use job_harvest::Config;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serves the router on 127.0.0.1 and returns its base URL
async fn spawn_app(config: &Config) -> String {
    let harvester = Harvester::new(config).expect("Failed to build harvester");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, build_router(Arc::new(harvester)))
            .await
            .expect("Server error");
    });

    format!("http://{}", address)
}

#[tokio::test]
async fn test_post_jobs_returns_json_array() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(
            Some("1"),
            &[
                ("Go Developer", "https://example.com/oferta/1"),
                ("Platform Engineer", "https://example.com/oferta/2"),
            ],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = spawn_app(&test_config(&mock_server)).await;
    let response = reqwest::Client::new()
        .post(format!("{}/jobs", app))
        .body(json!({ "query": "golang", "isintern": false }).to_string())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("application/json"));

    let body: Value = serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert_eq!(
        body,
        json!([
            { "title": "Go Developer", "link": "https://example.com/oferta/1" },
            { "title": "Platform Engineer", "link": "https://example.com/oferta/2" }
        ])
    );
}

#[tokio::test]
async fn test_post_jobs_passes_filter_codes() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/praca/intern;kw"))
        .and(query_param("et", "1,3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(results_page(Some("1"), &[("Intern", "/oferta/1")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = spawn_app(&test_config(&mock_server)).await;
    let response = reqwest::Client::new()
        .post(format!("{}/jobs", app))
        .body(r#"{"query":"intern","isIntern":true,"et":[1,3]}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_empty_result_is_empty_array() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(None, &[])))
        .mount(&mock_server)
        .await;

    let app = spawn_app(&test_config(&mock_server)).await;
    let response = reqwest::Client::new()
        .post(format!("{}/jobs", app))
        .body(r#"{"query":"golang"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "[]");
}

#[tokio::test]
async fn test_malformed_body_is_400() {
    let mock_server = MockServer::start().await;
    let app = spawn_app(&test_config(&mock_server)).await;
    let client = reqwest::Client::new();

    for body in ["not json", "", r#"{"query": 42}"#, r#"{"et": "1,3"}"#] {
        let response = client
            .post(format!("{}/jobs", app))
            .body(body)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400, "body {:?}", body);
        assert_eq!(response.text().await.unwrap(), "Invalid request");
    }

    // The crawl never started
    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_start_page_failure_is_500() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let mut config = Config::default();
    config.site.base_url = format!("http://127.0.0.1:{}/praca/", port);

    let app = spawn_app(&config).await;
    let response = reqwest::Client::new()
        .post(format!("{}/jobs", app))
        .body(r#"{"query":"golang"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(response.text().await.unwrap(), "Failed to fetch start url");
}

#[tokio::test]
async fn test_cors_preflight() {
    let mock_server = MockServer::start().await;
    let app = spawn_app(&test_config(&mock_server)).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/jobs", app))
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    let methods = response.headers()["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .to_uppercase();
    assert!(methods.contains("POST"));
}

#[tokio::test]
async fn test_plain_options_is_200() {
    let mock_server = MockServer::start().await;
    let app = spawn_app(&test_config(&mock_server)).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/jobs", app))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_cors_header_on_post() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(Some("0"), &[])))
        .mount(&mock_server)
        .await;

    let app = spawn_app(&test_config(&mock_server)).await;
    let response = reqwest::Client::new()
        .post(format!("{}/jobs", app))
        .header("Origin", "http://localhost:5173")
        .body(r#"{"query":"golang"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_health() {
    let mock_server = MockServer::start().await;
    let app = spawn_app(&test_config(&mock_server)).await;

    let response = reqwest::get(format!("{}/health", app)).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");
}

async fn faulting_handler() -> &'static str {
    panic!("handler fault")
}

#[tokio::test]
async fn test_handler_panic_becomes_500_and_server_keeps_serving() {
    let harvester = Harvester::new(&Config::default()).expect("Failed to build harvester");
    let routes = Router::new()
        .route("/fault", get(faulting_handler))
        .route("/health", get(health_handler));
    let app = with_layers(routes).with_state(AppState {
        harvester: Arc::new(harvester),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{}/fault", address))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(response.text().await.unwrap(), "internal error");

    let health = client
        .get(format!("http://{}/health", address))
        .send()
        .await
        .unwrap();
    assert_eq!(health.status(), 200);
    assert_eq!(health.text().await.unwrap(), "ok");
}
