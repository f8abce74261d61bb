//! The VQ Snapshot question catalog.
//!
//! Fourteen statements, each answered on a five-point Likert scale from
//! "Disagree" (1) to "Agree" (5). Catalog order is display order only; the
//! score does not depend on it.

use serde::Serialize;

/// A single assessment statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
}

/// Lowest Likert response.
pub const LIKERT_MIN: u8 = 1;

/// Highest Likert response.
pub const LIKERT_MAX: u8 = 5;

/// Label shown under the low end of the scale.
pub const LIKERT_LOW_LABEL: &str = "Disagree";

/// Label shown under the high end of the scale.
pub const LIKERT_HIGH_LABEL: &str = "Agree";

/// Prompt shown alongside the results.
pub const REFLECTION_PROMPT: &str = "Think of one time in the last year you acted against your own values. What was the pressure, and how would you handle it differently next time?";

/// The fixed question catalog.
pub static QUESTIONS: [Question; 14] = [
    Question { id: 1, text: "I keep my promises, even when no one will know if I don\u{2019}t." },
    Question { id: 2, text: "My private behavior matches my public claims." },
    Question { id: 3, text: "I can sense when someone\u{2019}s \u{201c}kindness\u{201d} is actually self-interest." },
    Question { id: 4, text: "I notice when people use moral language to cover questionable motives." },
    Question { id: 5, text: "I have given up money, status, or comfort to protect my values." },
    Question { id: 6, text: "I have ended a relationship or opportunity over integrity concerns." },
    Question { id: 7, text: "Under stress, I still make the choice I believe is right." },
    Question { id: 8, text: "Temptations do not change my core decisions." },
    Question { id: 9, text: "I act to protect others from unfair harm, even if I get nothing in return." },
    Question { id: 10, text: "I will stand up to unfair rules or practices, even if it\u{2019}s unpopular." },
    Question { id: 11, text: "I keep my standards in environments where most people compromise." },
    Question { id: 12, text: "I resist normalizing unethical behavior, no matter common." },
    Question { id: 13, text: "I admit my mistakes without being forced." },
    Question { id: 14, text: "I actively track my commitments and follow through." },
];

/// Number of questions in the catalog.
pub const QUESTION_COUNT: usize = QUESTIONS.len();

/// Look up a question by id.
#[must_use]
pub fn find(id: u32) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}
