mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linkmap::api::handlers::redirect_handler;

#[tokio::test]
async fn test_redirect_success() {
    let server = common::create_test_server(&[("dogs", "www.dogs.com")]);

    let response = server.get("/dogs").await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "www.dogs.com");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::create_test_server(&[("dogs", "www.dogs.com")]);

    let response = server.get("/cats").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "Not Found");
    assert!(response.headers().get("location").is_none());
}

#[tokio::test]
async fn test_redirect_every_entry() {
    let pairs = [
        ("dogs", "www.dogs.com"),
        ("cats", "www.cats.com"),
        ("news", "https://news.example.com/today?lang=en"),
    ];
    let server = common::create_test_server(&pairs);

    for (key, target) in pairs {
        let response = server.get(&format!("/{key}")).await;

        assert_eq!(response.status_code(), 307);
        assert_eq!(response.header("location"), target);
    }
}

#[tokio::test]
async fn test_redirect_nested_key() {
    let server = common::create_test_server(&[("docs/intro", "https://docs.example.com/intro")]);

    let response = server.get("/docs/intro").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(
        response.header("location"),
        "https://docs.example.com/intro"
    );
}

#[tokio::test]
async fn test_redirect_percent_encoded_key() {
    let server = common::create_test_server(&[("my dogs", "www.dogs.com")]);

    let response = server.get("/my%20dogs").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "www.dogs.com");
}

#[tokio::test]
async fn test_redirect_invalid_utf8_key_not_found() {
    let server = common::create_test_server(&[("dogs", "www.dogs.com")]);

    let response = server.get("/%FF").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "Not Found");
}

#[tokio::test]
async fn test_redirect_any_method() {
    let server = common::create_test_server(&[("dogs", "www.dogs.com")]);

    let response = server.post("/dogs").await;
    assert_eq!(response.status_code(), 307);

    let response = server.delete("/cats").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_root_path_not_found() {
    let server = common::create_test_server(&[("dogs", "www.dogs.com")]);

    let response = server.get("/").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "Not Found");
}

#[tokio::test]
async fn test_empty_mapping_not_found() {
    let server = common::create_test_server(&[]);

    let response = server.get("/dogs").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_invalid_target_returns_server_error() {
    let server = common::create_test_server(&[("broken", "www.example.com/\r\nx")]);

    let response = server.get("/broken").await;

    assert_eq!(response.status_code(), 500);
}

#[tokio::test]
async fn test_redirect_handler_standalone() {
    let state = common::create_test_state(&[("dogs", "www.dogs.com")]);
    let app = Router::new()
        .route("/go/{*key}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/go/dogs").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "www.dogs.com");
}
