use super::DbConn;
use super::record::RecordRepository;
use crate::domain::{Answer, AnswerPatch, NewAnswer, StoreResult};
use crate::infra::db::schema;
use chrono::Utc;
use rusqlite::Row;
use rusqlite::types::Value;

/// Repository for recorded answers.
pub struct AnswerRepository {
    records: RecordRepository,
}

impl AnswerRepository {
    pub fn new(conn: DbConn) -> Self {
        Self {
            records: RecordRepository::new(conn, &schema::ANSWERS),
        }
    }

    pub fn create(&self, answer: &NewAnswer) -> StoreResult<i64> {
        let created_at = answer
            .created_at
            .clone()
            .unwrap_or_else(|| Utc::now().to_rfc3339());

        let mut fields: Vec<(&str, Value)> = vec![
            ("quiz_id", Value::from(answer.quiz_id)),
            ("answer", Value::from(answer.answer.clone())),
            ("is_correct", Value::from(answer.is_correct)),
            ("created_at", Value::from(created_at)),
        ];
        if let Some(respondent) = &answer.respondent {
            fields.push(("respondent", Value::from(respondent.clone())));
        }

        self.records.insert(&fields)
    }

    pub fn update(&self, id: i64, patch: &AnswerPatch) -> StoreResult<()> {
        let mut fields: Vec<(&str, Value)> = Vec::new();
        if let Some(respondent) = &patch.respondent {
            fields.push(("respondent", Value::from(respondent.clone())));
        }
        if let Some(answer) = &patch.answer {
            fields.push(("answer", Value::from(answer.clone())));
        }
        if let Some(is_correct) = patch.is_correct {
            fields.push(("is_correct", Value::from(is_correct)));
        }
        self.records.update(id, &fields)
    }

    pub fn delete(&self, id: i64) -> StoreResult<()> {
        self.records.soft_delete(id)
    }

    pub fn find_by_id(&self, id: i64) -> StoreResult<Answer> {
        self.records.fetch(id, Self::row_to_answer)
    }

    pub fn find_all(&self, sort: Option<&str>) -> StoreResult<Vec<Answer>> {
        self.records.fetch_all(sort, Self::row_to_answer)
    }

    /// All live answers recorded for one quiz.
    pub fn find_by_quiz(&self, quiz_id: i64) -> StoreResult<Vec<Answer>> {
        self.records
            .fetch_where("quiz_id", Value::from(quiz_id), Self::row_to_answer)
    }

    fn row_to_answer(row: &Row<'_>) -> rusqlite::Result<Answer> {
        Ok(Answer {
            id: row.get(0)?,
            quiz_id: row.get(1)?,
            respondent: row.get(2)?,
            answer: row.get(3)?,
            is_correct: row.get::<_, i64>(4)? != 0,
            created_at: row.get(5)?,
            is_deleted: row.get::<_, i64>(6)? != 0,
        })
    }
}
