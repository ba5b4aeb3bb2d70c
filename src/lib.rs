use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{middleware, web, App, HttpServer};
use std::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::bank::{AnswerKey, QuestionType};
use crate::models::{
    AnswerResult, Analytics, Chapter, ChapterAccuracy, ChatMessageRequest, ChatResponse, Citation, DailyStudy,
    Dashboard, ErrorResponse, GenerateQuizRequest, HealthResponse, PdfList, Question, Quiz, QuizAttempt, QuizResult,
    ScorePoint, ServiceInfo, SubmitQuizRequest, TypeAccuracy, UploadResponse,
};
use crate::quiz::{Difficulty, Performance, QuizType};

pub mod bank;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod handlers;
pub mod id;
pub mod models;
pub mod progress;
pub mod quiz;
pub mod state;

use bank::QuestionBank;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::root,
        handlers::health_check,
        handlers::list_pdfs,
        handlers::upload_pdf,
        handlers::generate_quiz,
        handlers::submit_quiz,
        handlers::chat_message,
        handlers::progress_dashboard,
        handlers::progress_analytics,
    ),
    components(
        schemas(
            id::Id, ServiceInfo, HealthResponse, Chapter, PdfList, UploadResponse,
            GenerateQuizRequest, QuizType, Difficulty, QuestionType, AnswerKey, Question, Quiz,
            SubmitQuizRequest, AnswerResult, QuizResult, Performance,
            ChatMessageRequest, ChatResponse, Citation,
            Dashboard, QuizAttempt, Analytics, ScorePoint, ChapterAccuracy, TypeAccuracy, DailyStudy,
            ErrorResponse
        )
    ),
    tags(
        (name = "System", description = "System endpoints"),
        (name = "Pdfs", description = "Study material endpoints"),
        (name = "Quiz", description = "Quiz generation and scoring"),
        (name = "Chat", description = "Tutor chat"),
        (name = "Progress", description = "Progress tracking")
    )
)]
pub struct ApiDoc;

pub fn run(listener: TcpListener, bank: QuestionBank, max_upload_bytes: u64) -> Result<Server, std::io::Error> {
    let data = web::Data::new(AppState { bank, max_upload_bytes });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .route("/", web::get().to(handlers::root))
            .route("/health", web::get().to(handlers::health_check))
            .service(
                web::scope("/pdfs")
                    .route("/", web::get().to(handlers::list_pdfs))
                    .route("/upload", web::post().to(handlers::upload_pdf))
            )
            .service(
                web::scope("/quiz")
                    .route("/generate", web::post().to(handlers::generate_quiz))
                    .route("/submit", web::post().to(handlers::submit_quiz))
            )
            .route("/chat/message", web::post().to(handlers::chat_message))
            .service(
                web::scope("/progress")
                    .route("/dashboard", web::get().to(handlers::progress_dashboard))
                    .route("/analytics", web::get().to(handlers::progress_analytics))
            )
            .default_service(web::route().to(handlers::not_found))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
