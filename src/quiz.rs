use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::bank::{BankQuestion, QuestionBank, QuestionType};
use crate::error::ApiError;
use crate::id::Id;
use crate::models::{AnswerResult, GenerateQuizRequest, Question, Quiz, QuizResult, SubmitQuizRequest};

pub const MIN_QUESTIONS: i64 = 1;
pub const MAX_QUESTIONS: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuizType {
    Mcq,
    Saq,
    Laq,
    Mixed,
}

impl FromStr for QuizType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mcq" => Ok(QuizType::Mcq),
            "saq" => Ok(QuizType::Saq),
            "laq" => Ok(QuizType::Laq),
            "mixed" => Ok(QuizType::Mixed),
            other => Err(ApiError::Validation(format!(
                "Invalid question_type '{}': expected one of mcq, saq, laq, mixed",
                other
            ))),
        }
    }
}

impl fmt::Display for QuizType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuizType::Mcq => "mcq",
            QuizType::Saq => "saq",
            QuizType::Laq => "laq",
            QuizType::Mixed => "mixed",
        })
    }
}

/// Accepted and echoed back, but it does not influence which questions are
/// picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ApiError::Validation(format!(
                "Invalid difficulty '{}': expected one of easy, medium, hard",
                other
            ))),
        }
    }
}

/// A generate request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizParams {
    pub pdf_id: Option<String>,
    pub quiz_type: QuizType,
    pub difficulty: Difficulty,
    pub count: usize,
}

impl TryFrom<&GenerateQuizRequest> for QuizParams {
    type Error = ApiError;

    fn try_from(req: &GenerateQuizRequest) -> Result<Self, Self::Error> {
        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&req.question_count) {
            return Err(ApiError::Validation(format!(
                "question_count must be between {} and {}, got {}",
                MIN_QUESTIONS, MAX_QUESTIONS, req.question_count
            )));
        }
        Ok(QuizParams {
            pdf_id: req.pdf_id.clone(),
            quiz_type: req.question_type.parse()?,
            difficulty: req.difficulty.parse()?,
            count: req.question_count as usize,
        })
    }
}

/// How many mcq, saq and laq questions a mixed quiz of `count` asks for.
pub fn mixed_split(count: usize) -> (usize, usize, usize) {
    let mcq = count / 2;
    let saq = count / 3;
    (mcq, saq, count - mcq - saq)
}

pub fn time_limit_seconds(questions: &[Question]) -> u32 {
    questions
        .iter()
        .map(|q| q.question_type().time_limit_seconds())
        .sum()
}

fn sample<'a, R: Rng + ?Sized>(
    bank: &'a QuestionBank,
    kind: QuestionType,
    count: usize,
    rng: &mut R,
) -> impl Iterator<Item = &'a BankQuestion> {
    // choose_multiple caps at the slice length, so a short bank just yields fewer.
    bank.questions_of_type(kind).choose_multiple(rng, count)
}

/// Assembles a quiz by sampling without replacement from `bank`.
pub fn generate<R: Rng + ?Sized>(bank: &QuestionBank, params: &QuizParams, rng: &mut R) -> Quiz {
    let picked: Vec<&BankQuestion> = match params.quiz_type {
        QuizType::Mcq => sample(bank, QuestionType::Mcq, params.count, rng).collect(),
        QuizType::Saq => sample(bank, QuestionType::Saq, params.count, rng).collect(),
        QuizType::Laq => sample(bank, QuestionType::Laq, params.count, rng).collect(),
        QuizType::Mixed => {
            let (mcq, saq, laq) = mixed_split(params.count);
            let mut picked: Vec<&BankQuestion> = sample(bank, QuestionType::Mcq, mcq, rng).collect();
            picked.extend(sample(bank, QuestionType::Saq, saq, rng));
            picked.extend(sample(bank, QuestionType::Laq, laq, rng));
            picked
        }
    };

    if picked.len() < params.count {
        log::warn!(
            "Bank holds only {} {} questions, {} requested",
            picked.len(),
            params.quiz_type,
            params.count
        );
    }

    let questions: Vec<Question> = picked
        .into_iter()
        .enumerate()
        .map(|(i, q)| Question::from_bank(format!("q{}", i + 1), q))
        .collect();

    Quiz {
        id: Id::new(),
        pdf_id: params.pdf_id.clone(),
        question_type: params.quiz_type,
        difficulty: params.difficulty,
        time_limit_seconds: time_limit_seconds(&questions),
        questions,
        created_at: Utc::now(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Performance {
    Excellent,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Performance {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Performance::Excellent
        } else if score >= 60.0 {
            Performance::Good
        } else {
            Performance::NeedsImprovement
        }
    }

    pub fn feedback(self) -> &'static str {
        match self {
            Performance::Excellent => "Outstanding work! You have a strong grasp of this material.",
            Performance::Good => "Good job! Review the explanations for the questions you missed.",
            Performance::NeedsImprovement => {
                "Keep practicing. Revisit the chapter and try another quiz."
            }
        }
    }
}

/// Placeholder scoring: an answer counts as correct when it is the JSON
/// integer 0 or 1. The generated quiz and the bank are not consulted.
fn is_accepted(answer: &serde_json::Value) -> bool {
    matches!(answer.as_i64(), Some(0) | Some(1))
}

pub fn score(submission: &SubmitQuizRequest) -> QuizResult {
    let results: Vec<AnswerResult> = submission
        .answers
        .iter()
        .map(|(question_id, answer)| AnswerResult {
            question_id: question_id.clone(),
            correct: is_accepted(answer),
        })
        .collect();

    let total = results.len();
    let correct = results.iter().filter(|r| r.correct).count();
    let score = if total == 0 {
        0.0
    } else {
        let raw = correct as f64 / total as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    };
    let performance = Performance::from_score(score);

    QuizResult {
        quiz_id: submission.quiz_id.clone(),
        score,
        correct_answers: correct,
        total_questions: total,
        time_taken: submission.time_taken,
        performance,
        feedback: performance.feedback().to_string(),
        results,
    }
}
