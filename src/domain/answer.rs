use serde::{Deserialize, Serialize};

/// A recorded response to a quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Identifier assigned by the store on creation.
    pub id: i64,
    /// The quiz this response belongs to.
    pub quiz_id: i64,
    /// Who answered, when known.
    #[serde(default)]
    pub respondent: Option<String>,
    /// The response text.
    pub answer: String,
    /// Whether the response matched the expected answer.
    #[serde(default)]
    pub is_correct: bool,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Soft-delete flag.
    #[serde(default)]
    pub is_deleted: bool,
}

/// Fields for recording an answer.
#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub quiz_id: i64,
    pub respondent: Option<String>,
    pub answer: String,
    pub is_correct: bool,
    pub created_at: Option<String>,
}

/// Partial update for an answer; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct AnswerPatch {
    pub respondent: Option<String>,
    pub answer: Option<String>,
    pub is_correct: Option<bool>,
}
