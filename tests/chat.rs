use crate::common::spawn_app;

mod common;

#[tokio::test]
async fn chat_reply_cites_the_chapter() {
    let app = spawn_app().await;

    let response = app.api_client
        .post(&format!("{}/chat/message", &app.address))
        .json(&serde_json::json!({
            "content": "What is the work-energy theorem?",
            "pdf_id": "ch3",
            "session_id": "session-1"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["session_id"], "session-1");
    assert_eq!(json["role"], "assistant");
    assert!(!json["content"].as_str().unwrap().is_empty());
    let citations = json["citations"].as_array().unwrap();
    assert_eq!(citations[0]["pdf_id"], "ch3");
    assert_eq!(citations[0]["chapter"], "Work Energy Power");
}

#[tokio::test]
async fn chat_without_session_gets_one() {
    let app = spawn_app().await;

    let response = app.api_client
        .post(&format!("{}/chat/message", &app.address))
        .json(&serde_json::json!({ "content": "Explain projectile motion" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    let json: serde_json::Value = response.json().await.unwrap();
    assert!(!json["session_id"].as_str().unwrap().is_empty());
    assert_eq!(json["citations"][0]["pdf_id"], "ch1");
}

#[tokio::test]
async fn blank_chat_message_is_rejected() {
    let app = spawn_app().await;

    let response = app.api_client
        .post(&format!("{}/chat/message", &app.address))
        .json(&serde_json::json!({ "content": "  " }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
}
