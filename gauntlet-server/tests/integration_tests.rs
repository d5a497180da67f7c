//! Integration tests for the Gauntlet HTTP server

use gauntlet_server::AppState;
use serde_json::{json, Value};

const USERNAME: &str = "tony.stark";
const PASSWORD: &str = "howard";

/// Test server setup helper
async fn setup_test_server() -> (String, tokio::task::JoinHandle<()>) {
    let app = gauntlet_server::app(AppState::in_memory());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to port");
    let addr = listener.local_addr().expect("Failed to get local address");
    let base_url = format!("http://{}", addr);

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (base_url, handle)
}

#[tokio::test]
async fn test_list_stones() {
    let (base_url, _handle) = setup_test_server().await;

    let response = reqwest::Client::new()
        .get(format!("{}/stones", base_url))
        .basic_auth(USERNAME, Some(PASSWORD))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);

    let body: Vec<Value> = response.json().await.expect("Failed to parse response");
    let names: Vec<&str> = body.iter().filter_map(|s| s["name"].as_str()).collect();
    assert_eq!(names, ["space", "mind", "reality", "power", "time", "soul"]);
    assert_eq!(
        body[0],
        json!({"name": "space", "color": "blue", "power": "Teleportation", "status": "secured"})
    );
}

#[tokio::test]
async fn test_list_is_stable_across_requests() {
    let (base_url, _handle) = setup_test_server().await;
    let client = reqwest::Client::new();

    let mut bodies = Vec::new();
    for _ in 0..3 {
        let body = client
            .get(format!("{}/stones", base_url))
            .basic_auth(USERNAME, Some(PASSWORD))
            .send()
            .await
            .expect("Failed to send request")
            .text()
            .await
            .expect("Failed to read body");
        bodies.push(body);
    }

    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn test_get_every_stone() {
    let (base_url, _handle) = setup_test_server().await;
    let client = reqwest::Client::new();

    for name in ["space", "mind", "reality", "power", "time", "soul"] {
        let response = client
            .get(format!("{}/stones/{}", base_url, name))
            .basic_auth(USERNAME, Some(PASSWORD))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status().as_u16(), 200, "{name}");
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["name"], name);
    }
}

#[tokio::test]
async fn test_get_space_exact_body() {
    let (base_url, _handle) = setup_test_server().await;

    let response = reqwest::Client::new()
        .get(format!("{}/stones/space", base_url))
        .basic_auth(USERNAME, Some(PASSWORD))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"name":"space","color":"blue","power":"Teleportation","status":"secured"}"#
    );
}

#[tokio::test]
async fn test_get_nonexistent_stone() {
    let (base_url, _handle) = setup_test_server().await;

    let response = reqwest::Client::new()
        .get(format!("{}/stones/nonexistent", base_url))
        .basic_auth(USERNAME, Some(PASSWORD))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(response.text().await.unwrap(), "Not Found");
}

#[tokio::test]
async fn test_report_accepted() {
    let (base_url, _handle) = setup_test_server().await;

    let response = reqwest::Client::new()
        .post(format!("{}/stones/report", base_url))
        .basic_auth(USERNAME, Some(PASSWORD))
        .body(r#"{"stone":"space","report":"lost"}"#)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 202);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_report_invalid_json() {
    let (base_url, _handle) = setup_test_server().await;

    let response = reqwest::Client::new()
        .post(format!("{}/stones/report", base_url))
        .basic_auth(USERNAME, Some(PASSWORD))
        .header("Content-Type", "application/json")
        .body("{invalid json}")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(response.text().await.unwrap(), "Bad Request");
}

#[tokio::test]
async fn test_no_authorization_header() {
    let (base_url, _handle) = setup_test_server().await;
    let client = reqwest::Client::new();

    let requests = [
        client.get(format!("{}/stones", base_url)),
        client.get(format!("{}/stones/space", base_url)),
        client
            .post(format!("{}/stones/report", base_url))
            .body(r#"{"stone":"space","report":"lost"}"#),
    ];

    for request in requests {
        let response = request.send().await.expect("Failed to send request");
        assert_eq!(response.status().as_u16(), 401);
        assert!(response.headers().contains_key("www-authenticate"));
        assert_eq!(response.text().await.unwrap(), "Unauthorized");
    }
}

#[tokio::test]
async fn test_wrong_credentials() {
    let (base_url, _handle) = setup_test_server().await;

    let response = reqwest::Client::new()
        .get(format!("{}/stones", base_url))
        .basic_auth("peter.parker", Some("may"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn test_concurrent_requests() {
    let (base_url, _handle) = setup_test_server().await;
    let client = reqwest::Client::new();

    let tasks: Vec<_> = (0..20)
        .map(|_| {
            let client = client.clone();
            let url = format!("{}/stones/mind", base_url);
            tokio::spawn(async move {
                client
                    .get(url)
                    .basic_auth(USERNAME, Some(PASSWORD))
                    .send()
                    .await
                    .map(|response| response.status().as_u16())
            })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap(), 200);
    }
}
