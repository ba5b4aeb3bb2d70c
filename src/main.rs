use env_logger::Env;
use std::io::{Error, ErrorKind};
use std::net::TcpListener;
use studymate_api::bank::{QuestionBank, QuestionType};
use studymate_api::config::Settings;
use studymate_api::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let settings = Settings::from_env().map_err(|e| Error::new(ErrorKind::InvalidInput, e))?;

    let bank = match &settings.seed_dir {
        Some(dir) => QuestionBank::load_dir(dir),
        None => QuestionBank::builtin(),
    }
    .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;

    log::info!(
        "Question bank ready: {} mcq, {} saq, {} laq",
        bank.questions_of_type(QuestionType::Mcq).len(),
        bank.questions_of_type(QuestionType::Saq).len(),
        bank.questions_of_type(QuestionType::Laq).len()
    );

    let address = settings.address();
    log::info!("Starting server at http://{}", address);
    log::info!("Swagger UI available at http://{}/swagger-ui/", address);

    let listener = TcpListener::bind(&address)?;
    run(listener, bank, settings.max_upload_bytes)?.await
}
