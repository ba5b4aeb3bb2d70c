use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use utoipa::ToSchema;
use walkdir::WalkDir;

/// Seed files compiled into the binary. They form the default bank when no
/// seed directory is configured.
const BUILTIN_SEEDS: &[(&str, &str)] = &[
    ("ch1_units.json", include_str!("../seed/physics/ch1_units.json")),
    (
        "ch2_motion_straight_line.json",
        include_str!("../seed/physics/ch2_motion_straight_line.json"),
    ),
    (
        "ch3_work_energy_power.json",
        include_str!("../seed/physics/ch3_work_energy_power.json"),
    ),
    ("ch4_motion_in_plane.json", include_str!("../seed/physics/ch4_motion_in_plane.json")),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Mcq,
    Saq,
    Laq,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [QuestionType::Mcq, QuestionType::Saq, QuestionType::Laq];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Mcq => "mcq",
            QuestionType::Saq => "saq",
            QuestionType::Laq => "laq",
        }
    }

    /// Time budget granted per question of this type.
    pub fn time_limit_seconds(self) -> u32 {
        match self {
            QuestionType::Mcq => 60,
            QuestionType::Saq => 180,
            QuestionType::Laq => 300,
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown question type '{0}'")]
pub struct UnknownQuestionType(pub String);

impl FromStr for QuestionType {
    type Err = UnknownQuestionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mcq" => Ok(QuestionType::Mcq),
            "saq" => Ok(QuestionType::Saq),
            "laq" => Ok(QuestionType::Laq),
            other => Err(UnknownQuestionType(other.to_string())),
        }
    }
}

/// The answer side of a question. The `type` tag decides whether a choice
/// list or a written sample answer is present, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnswerKey {
    Mcq { options: Vec<String>, correct_index: usize },
    Saq { sample_answer: String },
    Laq { sample_answer: String },
}

impl AnswerKey {
    pub fn question_type(&self) -> QuestionType {
        match self {
            AnswerKey::Mcq { .. } => QuestionType::Mcq,
            AnswerKey::Saq { .. } => QuestionType::Saq,
            AnswerKey::Laq { .. } => QuestionType::Laq,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankQuestion {
    pub text: String,
    pub answer: AnswerKey,
    pub explanation: String,
    pub chapter: String,
}

impl BankQuestion {
    pub fn question_type(&self) -> QuestionType {
        self.answer.question_type()
    }

    fn check(&self) -> Result<(), String> {
        if self.text.trim().is_empty() {
            return Err("question text is empty".to_string());
        }
        match &self.answer {
            AnswerKey::Mcq { options, correct_index } => {
                if options.is_empty() {
                    return Err(format!("'{}' has no options", self.text));
                }
                if *correct_index >= options.len() {
                    return Err(format!(
                        "'{}' has correct_index {} but only {} options",
                        self.text,
                        correct_index,
                        options.len()
                    ));
                }
            }
            AnswerKey::Saq { sample_answer } | AnswerKey::Laq { sample_answer } => {
                if sample_answer.trim().is_empty() {
                    return Err(format!("'{}' has an empty sample answer", self.text));
                }
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct ChapterSeed {
    chapter_id: String,
    chapter: String,
    questions: Vec<QuestionSeed>,
}

#[derive(Deserialize)]
struct QuestionSeed {
    text: String,
    #[serde(flatten)]
    answer: AnswerKey,
    explanation: String,
}

#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("failed to parse seed {name}: {error}")]
    Parse {
        name: String,
        #[source]
        error: serde_json::Error,
    },
    #[error("invalid question in seed {name}: {reason}")]
    Invalid { name: String, reason: String },
    #[error("failed to walk seed directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("no usable seed files found under {0}")]
    Empty(PathBuf),
}

/// Read-only question catalog, partitioned by question type.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    mcq: Vec<BankQuestion>,
    saq: Vec<BankQuestion>,
    laq: Vec<BankQuestion>,
}

impl QuestionBank {
    pub fn builtin() -> Result<Self, BankError> {
        Self::from_seeds(BUILTIN_SEEDS.iter().copied())
    }

    /// Builds a bank from `(name, json)` pairs. Any malformed seed fails the
    /// whole load.
    pub fn from_seeds<'a>(seeds: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self, BankError> {
        let mut bank = QuestionBank::default();
        for (name, json) in seeds {
            let seed: ChapterSeed = serde_json::from_str(json).map_err(|error| BankError::Parse {
                name: name.to_string(),
                error,
            })?;
            bank.add_chapter(name, seed)?;
        }
        Ok(bank)
    }

    /// Loads every `*.json` seed under `dir`. Unreadable or invalid files are
    /// logged and skipped; an empty result is an error.
    pub fn load_dir(dir: &Path) -> Result<Self, BankError> {
        let mut bank = QuestionBank::default();
        log::info!("Loading question bank from {}", dir.display());

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if !path.extension().map_or(false, |ext| ext == "json") {
                continue;
            }

            let content = match std::fs::read_to_string(path) {
                Ok(c) => c,
                Err(e) => {
                    log::error!("Failed to read seed file {:?}: {}", path, e);
                    continue;
                }
            };

            let seed: ChapterSeed = match serde_json::from_str(&content) {
                Ok(s) => s,
                Err(e) => {
                    log::error!("Failed to parse seed file {:?}: {}", path, e);
                    continue;
                }
            };

            // Validate the whole chapter before any of it lands in the bank.
            let mut chapter = QuestionBank::default();
            match chapter.add_chapter(&path.display().to_string(), seed) {
                Ok(()) => bank.extend(chapter),
                Err(e) => log::error!("Skipping seed file {:?}: {}", path, e),
            }
        }

        if bank.is_empty() {
            return Err(BankError::Empty(dir.to_path_buf()));
        }
        Ok(bank)
    }

    fn add_chapter(&mut self, name: &str, seed: ChapterSeed) -> Result<(), BankError> {
        let count = seed.questions.len();
        for q in seed.questions {
            let question = BankQuestion {
                text: q.text,
                answer: q.answer,
                explanation: q.explanation,
                chapter: seed.chapter.clone(),
            };
            question.check().map_err(|reason| BankError::Invalid {
                name: name.to_string(),
                reason,
            })?;
            self.bucket_mut(question.question_type()).push(question);
        }
        log::debug!("Loaded {} questions for {} ({})", count, seed.chapter_id, seed.chapter);
        Ok(())
    }

    fn extend(&mut self, other: QuestionBank) {
        self.mcq.extend(other.mcq);
        self.saq.extend(other.saq);
        self.laq.extend(other.laq);
    }

    fn bucket_mut(&mut self, kind: QuestionType) -> &mut Vec<BankQuestion> {
        match kind {
            QuestionType::Mcq => &mut self.mcq,
            QuestionType::Saq => &mut self.saq,
            QuestionType::Laq => &mut self.laq,
        }
    }

    pub fn questions_of_type(&self, kind: QuestionType) -> &[BankQuestion] {
        match kind {
            QuestionType::Mcq => &self.mcq,
            QuestionType::Saq => &self.saq,
            QuestionType::Laq => &self.laq,
        }
    }

    /// Lookup by type name; unknown names yield an empty slice.
    pub fn questions_of(&self, name: &str) -> &[BankQuestion] {
        match name.parse::<QuestionType>() {
            Ok(kind) => self.questions_of_type(kind),
            Err(_) => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.mcq.len() + self.saq.len() + self.laq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
