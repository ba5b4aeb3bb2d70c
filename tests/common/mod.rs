use std::net::TcpListener;
use studymate_api::bank::QuestionBank;
use studymate_api::run;

#[allow(dead_code)]
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_limit(20 * 1024 * 1024).await
}

pub async fn spawn_app_with_limit(max_upload_bytes: u64) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let bank = QuestionBank::builtin().expect("Failed to load builtin question bank");
    let server = run(listener, bank, max_upload_bytes).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        api_client: reqwest::Client::new(),
    }
}

#[allow(dead_code)]
pub async fn generate_quiz(app: &TestApp, body: serde_json::Value) -> reqwest::Response {
    app.api_client
        .post(&format!("{}/quiz/generate", &app.address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request.")
}
