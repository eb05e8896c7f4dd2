use serde::{Deserialize, Serialize};

/// A quiz entry as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    /// Identifier assigned by the store on creation. Immutable, never reused.
    pub id: i64,
    /// Question text shown to participants.
    pub question: String,
    /// Structured question material (choices, media references, hints).
    /// Persisted as serialized JSON text and round-tripped without loss.
    pub contents: serde_json::Value,
    /// The expected answer.
    pub answer: String,
    /// Explanation shown after answering.
    #[serde(default)]
    pub commentary: Option<String>,
    /// Who wrote the quiz.
    #[serde(default)]
    pub author: Option<String>,
    /// Filter dimension (e.g. "history", "science").
    #[serde(default)]
    pub category: Option<String>,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Soft-delete flag; flagged rows are kept but hidden from list reads.
    #[serde(default)]
    pub is_deleted: bool,
    /// Source material link.
    #[serde(default)]
    pub reference_url: Option<String>,
    /// Free-form tag.
    #[serde(default)]
    pub label: Option<String>,
}

/// Fields for creating a quiz. The id is assigned by the store; a missing
/// `created_at` defaults to the current time.
#[derive(Debug, Clone)]
pub struct NewQuiz {
    pub question: String,
    pub contents: serde_json::Value,
    pub answer: String,
    pub commentary: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub created_at: Option<String>,
    pub reference_url: Option<String>,
    pub label: Option<String>,
}

/// Partial update for a quiz; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct QuizPatch {
    pub question: Option<String>,
    pub contents: Option<serde_json::Value>,
    pub answer: Option<String>,
    pub commentary: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub reference_url: Option<String>,
    pub label: Option<String>,
}
