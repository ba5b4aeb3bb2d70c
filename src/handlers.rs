use actix_multipart::{Multipart, MultipartError};
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use futures_util::TryStreamExt;
use std::collections::BTreeMap;

use crate::catalog;
use crate::chat;
use crate::error::ApiError;
use crate::id::Id;
use crate::models::{
    Analytics, ChatMessageRequest, ChatResponse, Dashboard, ErrorResponse, GenerateQuizRequest, HealthResponse,
    PdfList, Quiz, QuizResult, ServiceInfo, SubmitQuizRequest, UploadResponse,
};
use crate::progress;
use crate::quiz::{self, QuizParams};
use crate::state::AppState;

const ENDPOINTS: &[(&str, &str)] = &[
    ("root", "GET /"),
    ("health", "GET /health"),
    ("pdfs", "GET /pdfs/"),
    ("upload", "POST /pdfs/upload"),
    ("quiz_generate", "POST /quiz/generate"),
    ("quiz_submit", "POST /quiz/submit"),
    ("chat", "POST /chat/message"),
    ("dashboard", "GET /progress/dashboard"),
    ("analytics", "GET /progress/analytics"),
    ("docs", "GET /swagger-ui/"),
];

#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 200, description = "Service banner and endpoint map", body = ServiceInfo)
    )
)]
pub async fn root() -> impl Responder {
    let endpoints: BTreeMap<String, String> = ENDPOINTS
        .iter()
        .map(|(name, route)| (name.to_string(), route.to_string()))
        .collect();

    HttpResponse::Ok().json(ServiceInfo {
        message: "StudyMate API is running!".to_string(),
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Health Check", body = HealthResponse)
    )
)]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

#[utoipa::path(
    get,
    path = "/pdfs/",
    tag = "Pdfs",
    responses(
        (status = 200, description = "Available chapters", body = PdfList)
    )
)]
pub async fn list_pdfs() -> impl Responder {
    HttpResponse::Ok().json(PdfList {
        pdfs: catalog::chapters(),
    })
}

fn multipart_error(e: MultipartError) -> ApiError {
    ApiError::Validation(format!("Malformed multipart upload: {}", e))
}

#[utoipa::path(
    post,
    path = "/pdfs/upload",
    tag = "Pdfs",
    request_body(content = String, content_type = "multipart/form-data", description = "PDF in the `file` field"),
    responses(
        (status = 200, description = "Upload acknowledged", body = UploadResponse),
        (status = 400, description = "Missing, empty, oversized or non-PDF file", body = ErrorResponse)
    )
)]
pub async fn upload_pdf(data: web::Data<AppState>, mut payload: Multipart) -> Result<HttpResponse, ApiError> {
    while let Some(mut field) = payload.try_next().await.map_err(multipart_error)? {
        if field.name() != "file" {
            continue;
        }

        let filename = catalog::require_pdf_filename(field.content_disposition().get_filename())?;

        let mut size_bytes: u64 = 0;
        while let Some(chunk) = field.try_next().await.map_err(multipart_error)? {
            size_bytes += chunk.len() as u64;
            if size_bytes > data.max_upload_bytes {
                return Err(ApiError::Validation(format!(
                    "File exceeds the {} byte upload limit",
                    data.max_upload_bytes
                )));
            }
        }
        if size_bytes == 0 {
            return Err(ApiError::Validation("Uploaded file is empty".to_string()));
        }

        let pages = catalog::estimate_pages(size_bytes);
        log::info!("Accepted upload {} ({} bytes, ~{} pages)", filename, size_bytes, pages);

        return Ok(HttpResponse::Ok().json(UploadResponse {
            id: Id::new(),
            message: format!("{} processed successfully", filename),
            filename,
            size_bytes,
            pages,
            status: "processed".to_string(),
        }));
    }

    Err(ApiError::Validation("Missing 'file' field in upload".to_string()))
}

#[utoipa::path(
    post,
    path = "/quiz/generate",
    tag = "Quiz",
    request_body = GenerateQuizRequest,
    responses(
        (status = 200, description = "Assembled quiz", body = Quiz),
        (status = 400, description = "Invalid type, difficulty or count", body = ErrorResponse)
    )
)]
pub async fn generate_quiz(
    data: web::Data<AppState>,
    req: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, ApiError> {
    let params = QuizParams::try_from(&*req)?;
    let quiz = quiz::generate(&data.bank, &params, &mut rand::thread_rng());

    log::info!(
        "Generated quiz {} ({}, {} of {} questions, {}s)",
        quiz.id,
        params.quiz_type,
        quiz.questions.len(),
        params.count,
        quiz.time_limit_seconds
    );
    Ok(HttpResponse::Ok().json(quiz))
}

#[utoipa::path(
    post,
    path = "/quiz/submit",
    tag = "Quiz",
    request_body = SubmitQuizRequest,
    responses(
        (status = 200, description = "Scored submission", body = QuizResult),
        (status = 400, description = "Malformed submission", body = ErrorResponse)
    )
)]
pub async fn submit_quiz(req: web::Json<SubmitQuizRequest>) -> impl Responder {
    let result = quiz::score(&req);
    log::info!(
        "Scored quiz {}: {}/{} ({}%)",
        result.quiz_id,
        result.correct_answers,
        result.total_questions,
        result.score
    );
    HttpResponse::Ok().json(result)
}

#[utoipa::path(
    post,
    path = "/chat/message",
    tag = "Chat",
    request_body = ChatMessageRequest,
    responses(
        (status = 200, description = "Tutor reply with citations", body = ChatResponse),
        (status = 400, description = "Empty message", body = ErrorResponse)
    )
)]
pub async fn chat_message(req: web::Json<ChatMessageRequest>) -> Result<HttpResponse, ApiError> {
    let reply = chat::reply(&req, &mut rand::thread_rng())?;
    Ok(HttpResponse::Ok().json(reply))
}

#[utoipa::path(
    get,
    path = "/progress/dashboard",
    tag = "Progress",
    responses(
        (status = 200, description = "Dashboard summary", body = Dashboard)
    )
)]
pub async fn progress_dashboard() -> impl Responder {
    HttpResponse::Ok().json(progress::dashboard())
}

#[utoipa::path(
    get,
    path = "/progress/analytics",
    tag = "Progress",
    responses(
        (status = 200, description = "Analytics breakdown", body = Analytics)
    )
)]
pub async fn progress_analytics() -> impl Responder {
    HttpResponse::Ok().json(progress::analytics())
}

pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}
