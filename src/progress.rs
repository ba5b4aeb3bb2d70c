//! Fabricated progress data. Nothing is tracked; these payloads are fixed.

use crate::bank::QuestionType;
use crate::models::{Analytics, ChapterAccuracy, DailyStudy, Dashboard, QuizAttempt, ScorePoint, TypeAccuracy};

pub fn dashboard() -> Dashboard {
    Dashboard {
        total_quizzes: 15,
        average_score: 78.5,
        study_hours: 24,
        topics_mastered: 8,
        recent_attempts: vec![
            attempt("1", "Physics - Units & Measurement", 85, "2 hours ago", 10),
            attempt("2", "Physics - Motion in Straight Line", 72, "1 day ago", 8),
            attempt("3", "Physics - Work Energy Power", 90, "2 days ago", 12),
        ],
        strong_topics: vec!["Units & Measurement".to_string(), "Work Energy Power".to_string()],
        weak_topics: vec!["Motion in Plane".to_string()],
    }
}

fn attempt(id: &str, subject: &str, score: u32, date: &str, total_questions: u32) -> QuizAttempt {
    QuizAttempt {
        id: id.to_string(),
        subject: subject.to_string(),
        score,
        date: date.to_string(),
        total_questions,
    }
}

pub fn analytics() -> Analytics {
    let score_trend = [("Week 1", 65.0), ("Week 2", 70.5), ("Week 3", 74.0), ("Week 4", 78.5)]
        .into_iter()
        .map(|(week, average_score)| ScorePoint {
            week: week.to_string(),
            average_score,
        })
        .collect();

    let chapter_accuracy = [
        ("ch1", "Units and Measurement", 85.0, 5),
        ("ch2", "Motion in Straight Line", 72.0, 4),
        ("ch3", "Work Energy Power", 90.0, 4),
        ("ch4", "Motion in a Plane", 55.0, 2),
    ]
    .into_iter()
    .map(|(chapter_id, chapter, accuracy, attempts)| ChapterAccuracy {
        chapter_id: chapter_id.to_string(),
        chapter: chapter.to_string(),
        accuracy,
        attempts,
    })
    .collect();

    let question_type_accuracy = [(QuestionType::Mcq, 82.0), (QuestionType::Saq, 74.5), (QuestionType::Laq, 63.0)]
        .into_iter()
        .map(|(question_type, accuracy)| TypeAccuracy {
            question_type,
            accuracy,
        })
        .collect();

    let study_minutes_by_day = [
        ("Mon", 45),
        ("Tue", 30),
        ("Wed", 60),
        ("Thu", 20),
        ("Fri", 50),
        ("Sat", 90),
        ("Sun", 40),
    ]
    .into_iter()
    .map(|(day, minutes)| DailyStudy {
        day: day.to_string(),
        minutes,
    })
    .collect();

    Analytics {
        score_trend,
        chapter_accuracy,
        question_type_accuracy,
        study_minutes_by_day,
    }
}
