use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::bank::{AnswerKey, BankQuestion, QuestionType};
use crate::id::Id;
use crate::quiz::{Difficulty, Performance, QuizType};

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
    pub status: String,
    pub version: String,
    /// Endpoint name to `METHOD path`.
    pub endpoints: BTreeMap<String, String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub pages: u32,
    pub description: String,
    pub progress: u8,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PdfList {
    pub pdfs: Vec<Chapter>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub id: Id,
    pub filename: String,
    pub size_bytes: u64,
    pub pages: u32,
    pub status: String,
    pub message: String,
}

/// Body of `POST /quiz/generate`. Values stay as raw strings and numbers so
/// that range and enum checks produce readable 400s.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateQuizRequest {
    #[serde(default)]
    pub pdf_id: Option<String>,
    #[serde(default = "default_question_type")]
    #[schema(example = "mixed")]
    pub question_type: String,
    #[serde(default = "default_difficulty")]
    #[schema(example = "medium")]
    pub difficulty: String,
    #[serde(default = "default_question_count")]
    #[schema(example = 10)]
    pub question_count: i64,
}

fn default_question_type() -> String {
    "mcq".to_string()
}

fn default_difficulty() -> String {
    "medium".to_string()
}

fn default_question_count() -> i64 {
    5
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(flatten)]
    pub answer: AnswerKey,
    pub explanation: String,
    pub chapter: String,
}

impl Question {
    pub fn from_bank(id: String, q: &BankQuestion) -> Self {
        Question {
            id,
            text: q.text.clone(),
            answer: q.answer.clone(),
            explanation: q.explanation.clone(),
            chapter: q.chapter.clone(),
        }
    }

    pub fn question_type(&self) -> QuestionType {
        self.answer.question_type()
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Quiz {
    pub id: Id,
    pub pdf_id: Option<String>,
    pub question_type: QuizType,
    pub difficulty: Difficulty,
    pub questions: Vec<Question>,
    pub time_limit_seconds: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitQuizRequest {
    pub quiz_id: String,
    /// Question id to submitted answer. Any JSON value is accepted.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub answers: BTreeMap<String, serde_json::Value>,
    /// Seconds spent on the quiz.
    #[serde(default)]
    pub time_taken: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnswerResult {
    pub question_id: String,
    pub correct: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResult {
    pub quiz_id: String,
    pub score: f64,
    pub correct_answers: usize,
    pub total_questions: usize,
    pub time_taken: u64,
    pub performance: Performance,
    pub feedback: String,
    pub results: Vec<AnswerResult>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatMessageRequest {
    pub content: String,
    pub pdf_id: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Citation {
    pub pdf_id: String,
    pub chapter: String,
    pub page: u32,
    pub excerpt: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    pub id: Id,
    pub session_id: String,
    pub role: String,
    pub content: String,
    pub citations: Vec<Citation>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuizAttempt {
    pub id: String,
    pub subject: String,
    pub score: u32,
    pub date: String,
    pub total_questions: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Dashboard {
    pub total_quizzes: u32,
    pub average_score: f64,
    pub study_hours: u32,
    pub topics_mastered: u32,
    pub recent_attempts: Vec<QuizAttempt>,
    pub strong_topics: Vec<String>,
    pub weak_topics: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScorePoint {
    pub week: String,
    pub average_score: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChapterAccuracy {
    pub chapter_id: String,
    pub chapter: String,
    pub accuracy: f64,
    pub attempts: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TypeAccuracy {
    pub question_type: QuestionType,
    pub accuracy: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DailyStudy {
    pub day: String,
    pub minutes: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Analytics {
    pub score_trend: Vec<ScorePoint>,
    pub chapter_accuracy: Vec<ChapterAccuracy>,
    pub question_type_accuracy: Vec<TypeAccuracy>,
    pub study_minutes_by_day: Vec<DailyStudy>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    pub status: u16,
}
