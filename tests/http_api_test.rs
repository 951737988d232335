mod common;

use anyhow::Result;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use common::{setup_app_with, RecordingLauncher};
use lumen::config::Settings;
use lumen::server::app::create_app;

async fn setup_test_server(settings: Settings) -> Result<TestServer> {
    let test_app = setup_app_with(settings, RecordingLauncher::default()).await;
    let app = create_app(test_app.app, Some("http://localhost:3000")).await?;
    Ok(TestServer::new(app)?)
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let server = setup_test_server(Settings::default()).await?;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["service"], "lumen-server");
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_graphql_post_round_trip() -> Result<()> {
    let server = setup_test_server(Settings::default()).await?;

    let response = server
        .post("/graphql")
        .json(&json!({
            "query": "mutation Create($name: String!) { createChannel(model: { name: $name }) { id name enabled } }",
            "variables": { "name": "Ambient" }
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body["data"]["createChannel"],
        json!({ "id": 1, "name": "Ambient", "enabled": true })
    );

    Ok(())
}

#[tokio::test]
async fn test_playground_served_when_enabled() -> Result<()> {
    let server = setup_test_server(Settings::default()).await?;

    let response = server.get("/graphql").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("GraphQL Playground"));

    Ok(())
}

#[tokio::test]
async fn test_playground_hidden_when_disabled() -> Result<()> {
    let settings = Settings {
        disable_playground: true,
        ..Settings::default()
    };
    let server = setup_test_server(settings).await?;

    let response = server.get("/graphql").await;

    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}

#[tokio::test]
async fn test_invalid_cors_origin_is_rejected() {
    let test_app = setup_app_with(Settings::default(), RecordingLauncher::default()).await;
    let result = create_app(test_app.app, Some("not a\nheader")).await;
    assert!(result.is_err());
}
