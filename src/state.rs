use crate::bank::QuestionBank;

/// Shared by every worker. Built once at startup and never mutated.
pub struct AppState {
    pub bank: QuestionBank,
    pub max_upload_bytes: u64,
}
