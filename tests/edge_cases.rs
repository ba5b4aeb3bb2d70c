use crate::common::spawn_app;

mod common;

#[tokio::test]
async fn unknown_route_returns_error_envelope() {
    let app = spawn_app().await;

    let response = app.api_client
        .get(&format!("{}/nope", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["status"], 404);
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn unknown_route_inside_scope_is_not_found() {
    let app = spawn_app().await;

    let response = app.api_client
        .get(&format!("{}/quiz/history", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn malformed_json_is_a_validation_error() {
    let app = spawn_app().await;

    let response = app.api_client
        .post(&format!("{}/quiz/generate", &app.address))
        .header("Content-Type", "application/json")
        .body("{ not json")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn fractional_question_count_is_rejected() {
    let app = spawn_app().await;

    let response = app.api_client
        .post(&format!("{}/quiz/generate", &app.address))
        .json(&serde_json::json!({ "question_type": "mcq", "difficulty": "easy", "question_count": 2.5 }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = spawn_app().await;

    let response = app.api_client
        .get(&format!("{}/health", &app.address))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert!(response.headers().get("access-control-allow-origin").is_some());
}
