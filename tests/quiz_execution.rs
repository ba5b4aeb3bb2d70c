use crate::common::{generate_quiz, spawn_app};

mod common;

async fn submit(app: &common::TestApp, body: serde_json::Value) -> reqwest::Response {
    app.api_client
        .post(&format!("{}/quiz/submit", &app.address))
        .json(&body)
        .send()
        .await
        .expect("Failed to submit")
}

#[tokio::test]
async fn submission_is_scored() {
    let app = spawn_app().await;

    let response = submit(&app, serde_json::json!({
        "quiz_id": "quiz_123",
        "answers": { "q1": 1, "q2": 0, "q3": 2 },
        "time_taken": 240
    })).await;

    assert_eq!(200, response.status().as_u16());
    let result: serde_json::Value = response.json().await.unwrap();
    assert_eq!(result["quiz_id"], "quiz_123");
    assert_eq!(result["correct_answers"], 2);
    assert_eq!(result["total_questions"], 3);
    assert_eq!(result["score"], 66.7);
    assert_eq!(result["performance"], "Good");
    assert_eq!(result["time_taken"], 240);
    assert_eq!(result["results"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn empty_submission_scores_zero() {
    let app = spawn_app().await;

    let response = submit(&app, serde_json::json!({
        "quiz_id": "quiz_123",
        "answers": {},
        "time_taken": 10
    })).await;

    assert_eq!(200, response.status().as_u16());
    let result: serde_json::Value = response.json().await.unwrap();
    assert_eq!(result["score"], 0.0);
    assert_eq!(result["performance"], "Needs Improvement");
}

#[tokio::test]
async fn generated_quiz_can_be_submitted() {
    let app = spawn_app().await;

    let quiz: serde_json::Value = generate_quiz(&app, serde_json::json!({
        "question_type": "mcq",
        "difficulty": "medium",
        "question_count": 4
    }))
    .await
    .json()
    .await
    .unwrap();

    let answers: serde_json::Map<String, serde_json::Value> = quiz["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| (q["id"].as_str().unwrap().to_string(), serde_json::json!(1)))
        .collect();

    let response = submit(&app, serde_json::json!({
        "quiz_id": quiz["id"],
        "answers": answers,
        "time_taken": 120
    })).await;

    assert_eq!(200, response.status().as_u16());
    let result: serde_json::Value = response.json().await.unwrap();
    assert_eq!(result["quiz_id"], quiz["id"]);
    assert_eq!(result["score"], 100.0);
    assert_eq!(result["performance"], "Excellent");
}

#[tokio::test]
async fn submission_without_quiz_id_is_rejected() {
    let app = spawn_app().await;

    let response = submit(&app, serde_json::json!({ "answers": { "q1": 1 } })).await;

    assert_eq!(400, response.status().as_u16());
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["status"], 400);
}
