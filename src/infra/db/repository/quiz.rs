use super::DbConn;
use super::record::RecordRepository;
use crate::domain::{NewQuiz, Quiz, QuizPatch, StoreResult};
use crate::infra::db::schema;
use chrono::Utc;
use rusqlite::Row;
use rusqlite::types::Value;

/// Repository for quiz entries.
///
/// Serializes `contents` to JSON text before writing and deserializes it
/// after reading. A row whose stored contents no longer parse surfaces
/// `StoreError::Serialization` rather than a silent default.
pub struct QuizRepository {
    records: RecordRepository,
}

/// Row image before contents deserialization.
struct QuizRow {
    id: i64,
    question: String,
    contents: String,
    answer: String,
    commentary: Option<String>,
    author: Option<String>,
    category: Option<String>,
    created_at: String,
    is_deleted: bool,
    reference_url: Option<String>,
    label: Option<String>,
}

impl QuizRepository {
    pub fn new(conn: DbConn) -> Self {
        Self {
            records: RecordRepository::new(conn, &schema::QUIZZES),
        }
    }

    /// Insert a new quiz and return its assigned id.
    pub fn create(&self, quiz: &NewQuiz) -> StoreResult<i64> {
        let contents = serde_json::to_string(&quiz.contents)?;
        let created_at = quiz
            .created_at
            .clone()
            .unwrap_or_else(|| Utc::now().to_rfc3339());

        let mut fields: Vec<(&str, Value)> = vec![
            ("question", Value::from(quiz.question.clone())),
            ("contents", Value::from(contents)),
            ("answer", Value::from(quiz.answer.clone())),
            ("created_at", Value::from(created_at)),
        ];
        if let Some(commentary) = &quiz.commentary {
            fields.push(("commentary", Value::from(commentary.clone())));
        }
        if let Some(author) = &quiz.author {
            fields.push(("author", Value::from(author.clone())));
        }
        if let Some(category) = &quiz.category {
            fields.push(("category", Value::from(category.clone())));
        }
        if let Some(url) = &quiz.reference_url {
            fields.push(("reference_url", Value::from(url.clone())));
        }
        if let Some(label) = &quiz.label {
            fields.push(("label", Value::from(label.clone())));
        }

        self.records.insert(&fields)
    }

    /// Update the fields set in `patch`, leaving the rest untouched.
    pub fn update(&self, id: i64, patch: &QuizPatch) -> StoreResult<()> {
        let mut fields: Vec<(&str, Value)> = Vec::new();
        if let Some(question) = &patch.question {
            fields.push(("question", Value::from(question.clone())));
        }
        if let Some(contents) = &patch.contents {
            fields.push(("contents", Value::from(serde_json::to_string(contents)?)));
        }
        if let Some(answer) = &patch.answer {
            fields.push(("answer", Value::from(answer.clone())));
        }
        if let Some(commentary) = &patch.commentary {
            fields.push(("commentary", Value::from(commentary.clone())));
        }
        if let Some(author) = &patch.author {
            fields.push(("author", Value::from(author.clone())));
        }
        if let Some(category) = &patch.category {
            fields.push(("category", Value::from(category.clone())));
        }
        if let Some(url) = &patch.reference_url {
            fields.push(("reference_url", Value::from(url.clone())));
        }
        if let Some(label) = &patch.label {
            fields.push(("label", Value::from(label.clone())));
        }
        self.records.update(id, &fields)
    }

    /// Flag the quiz as deleted; it stays readable through `find_by_id`.
    pub fn delete(&self, id: i64) -> StoreResult<()> {
        self.records.soft_delete(id)
    }

    /// Read one quiz by id, regardless of its soft-delete state.
    pub fn find_by_id(&self, id: i64) -> StoreResult<Quiz> {
        self.records.fetch(id, Self::row_to_quiz).and_then(Self::hydrate)
    }

    /// All live quizzes; pass a column name to sort.
    pub fn find_all(&self, sort: Option<&str>) -> StoreResult<Vec<Quiz>> {
        let rows = self.records.fetch_all(sort, Self::row_to_quiz)?;
        rows.into_iter().map(Self::hydrate).collect()
    }

    /// All live quizzes in one category.
    pub fn find_by_category(&self, category: &str) -> StoreResult<Vec<Quiz>> {
        let rows = self.records.fetch_where(
            "category",
            Value::from(category.to_string()),
            Self::row_to_quiz,
        )?;
        rows.into_iter().map(Self::hydrate).collect()
    }

    fn row_to_quiz(row: &Row<'_>) -> rusqlite::Result<QuizRow> {
        Ok(QuizRow {
            id: row.get(0)?,
            question: row.get(1)?,
            contents: row.get(2)?,
            answer: row.get(3)?,
            commentary: row.get(4)?,
            author: row.get(5)?,
            category: row.get(6)?,
            created_at: row.get(7)?,
            is_deleted: row.get::<_, i64>(8)? != 0,
            reference_url: row.get(9)?,
            label: row.get(10)?,
        })
    }

    fn hydrate(row: QuizRow) -> StoreResult<Quiz> {
        let contents = serde_json::from_str(&row.contents)?;
        Ok(Quiz {
            id: row.id,
            question: row.question,
            contents,
            answer: row.answer,
            commentary: row.commentary,
            author: row.author,
            category: row.category,
            created_at: row.created_at,
            is_deleted: row.is_deleted,
            reference_url: row.reference_url,
            label: row.label,
        })
    }
}
