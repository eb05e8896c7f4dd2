//! Integration tests for the store
//! These tests verify that the repositories work together correctly

use quizstore::domain::{NewAnswer, NewEvent, NewEventTicket, NewQuiz, QuizPatch};
use quizstore::infra::db::Database;
use serde_json::json;

fn quiz(question: &str, category: &str) -> NewQuiz {
    NewQuiz {
        question: question.to_string(),
        contents: json!({"choices": ["a", "b", "c"], "points": 1}),
        answer: "a".to_string(),
        commentary: None,
        author: Some("quizmaster".to_string()),
        category: Some(category.to_string()),
        created_at: None,
        reference_url: None,
        label: None,
    }
}

#[test]
fn test_full_store_workflow() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;

    let quiz_repo = db.quiz_repo();
    let answer_repo = db.answer_repo();
    let event_repo = db.event_repo();
    let ticket_repo = db.ticket_repo();

    // Set up an event with tickets
    let event_id = event_repo.create(&NewEvent {
        name: "Spring Quiz".to_string(),
        description: None,
        starts_at: Some("2025-04-01T19:00:00Z".to_string()),
        created_at: None,
    })?;
    let ticket_id = ticket_repo.create(&NewEventTicket {
        event_id,
        code: "SQ-1".to_string(),
        holder: Some("erin".to_string()),
        created_at: None,
    })?;

    // Author two quizzes and record answers against the first
    let q1 = quiz_repo.create(&quiz("Highest mountain?", "geography"))?;
    let q2 = quiz_repo.create(&quiz("Fastest land animal?", "science"))?;

    answer_repo.create(&NewAnswer {
        quiz_id: q1,
        respondent: Some("erin".to_string()),
        answer: "a".to_string(),
        is_correct: true,
        created_at: None,
    })?;
    answer_repo.create(&NewAnswer {
        quiz_id: q1,
        respondent: Some("frank".to_string()),
        answer: "b".to_string(),
        is_correct: false,
        created_at: None,
    })?;

    // Verify the pieces line up
    assert_eq!(event_repo.find_by_id(event_id)?.name, "Spring Quiz");
    assert_eq!(ticket_repo.find_by_event(event_id)?.len(), 1);
    assert_eq!(quiz_repo.find_all(None)?.len(), 2);
    assert_eq!(answer_repo.find_by_quiz(q1)?.len(), 2);
    assert!(answer_repo.find_by_quiz(q2)?.is_empty());

    // Rework one quiz and retire the other
    quiz_repo.update(
        q1,
        &QuizPatch {
            commentary: Some("Measured from sea level.".to_string()),
            ..Default::default()
        },
    )?;
    quiz_repo.delete(q2)?;

    let remaining = quiz_repo.find_all(Some("question"))?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, q1);
    assert_eq!(
        remaining[0].commentary.as_deref(),
        Some("Measured from sea level.")
    );

    // Retired quiz is still there when addressed directly
    assert!(quiz_repo.find_by_id(q2)?.is_deleted);

    // Tear down the event side
    ticket_repo.delete(ticket_id)?;
    assert!(ticket_repo.find_by_event(event_id)?.is_empty());

    Ok(())
}

#[test]
fn test_reopen_preserves_records() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("db.sqlite");

    let id = {
        let db = Database::open_at(path.clone())?;
        db.quiz_repo().create(&quiz("Persisted?", "meta"))?
    };

    let db = Database::open_at(path)?;
    let restored = db.quiz_repo().find_by_id(id)?;
    assert_eq!(restored.question, "Persisted?");
    assert_eq!(restored.contents, json!({"choices": ["a", "b", "c"], "points": 1}));

    Ok(())
}
