use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog;
use crate::error::ApiError;
use crate::id::Id;
use crate::models::{ChatMessageRequest, ChatResponse, Citation};

const DEFAULT_CHAPTER: &str = "ch1";

const REPLIES: &[&str] = &[
    "Great question! The key idea is to start from the definitions and check that the units on both sides of your equation agree.",
    "Let's break this down step by step. First identify the known quantities, then pick the equation that links them to the unknown.",
    "A helpful way to think about this is to sketch a graph of the motion. The slope and the area under the curve usually tell you what you need.",
    "This concept often shows up in exams. Focus on the conditions under which the law applies, since questions like to test the edge cases.",
    "Try working through a numerical example with simple values first. Once the pattern is clear, the general result follows.",
];

const EXCERPTS: &[&str] = &[
    "The physical quantities are expressed in terms of fundamental units.",
    "For uniformly accelerated motion, the kinematic equations relate displacement, velocity, acceleration and time.",
    "The work done by a force is the product of the component of the force along the displacement and the displacement.",
    "The total mechanical energy of a system is conserved if the forces doing work on it are conservative.",
];

/// Builds a canned tutor reply citing the requested chapter, or the first
/// chapter when none (or an unknown one) is given.
pub fn reply<R: Rng + ?Sized>(req: &ChatMessageRequest, rng: &mut R) -> Result<ChatResponse, ApiError> {
    if req.content.trim().is_empty() {
        return Err(ApiError::Validation("Message content must not be empty".to_string()));
    }

    let chapter = req
        .pdf_id
        .as_deref()
        .and_then(catalog::find_chapter)
        .or_else(|| catalog::find_chapter(DEFAULT_CHAPTER))
        .ok_or_else(|| ApiError::Internal("chapter catalog is empty".to_string()))?;

    let content = REPLIES.choose(rng).copied().unwrap_or(REPLIES[0]);
    let excerpt = EXCERPTS.choose(rng).copied().unwrap_or(EXCERPTS[0]);
    let page = rng.gen_range(1..=chapter.pages.max(1));

    Ok(ChatResponse {
        id: Id::new(),
        session_id: req
            .session_id
            .clone()
            .unwrap_or_else(|| Id::new().to_string()),
        role: "assistant".to_string(),
        content: content.to_string(),
        citations: vec![Citation {
            pdf_id: chapter.id,
            chapter: chapter.title,
            page,
            excerpt: excerpt.to_string(),
        }],
        timestamp: Utc::now(),
    })
}
