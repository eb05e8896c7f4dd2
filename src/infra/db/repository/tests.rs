use crate::domain::{
    AnswerPatch, NewAnswer, NewEvent, NewEventTicket, NewQuiz, QuizPatch, StoreError,
};
use crate::infra::db::Database;
use crate::infra::db::repository::*;
use crate::infra::db::schema;
use rusqlite::types::Value;
use serde_json::json;

fn sample_quiz() -> NewQuiz {
    NewQuiz {
        question: "Capital of France?".into(),
        contents: json!({"choices": ["Paris", "Lyon", "Marseille"], "points": 2}),
        answer: "Paris".into(),
        commentary: Some("Lyon was the capital of Gaul, not France.".into()),
        author: Some("alice".into()),
        category: Some("geography".into()),
        created_at: Some("2024-12-08T10:00:00Z".into()),
        reference_url: None,
        label: None,
    }
}

#[test]
fn test_quiz_create_then_read() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.quiz_repo();

    let new = sample_quiz();
    let id = repo.create(&new)?;
    assert_eq!(id, 1);

    let quiz = repo.find_by_id(id)?;
    assert_eq!(quiz.id, id);
    assert_eq!(quiz.question, new.question);
    assert_eq!(quiz.contents, new.contents);
    assert_eq!(quiz.answer, new.answer);
    assert_eq!(quiz.commentary, new.commentary);
    assert_eq!(quiz.author, new.author);
    assert_eq!(quiz.category, new.category);
    assert_eq!(quiz.created_at, "2024-12-08T10:00:00Z");
    assert!(!quiz.is_deleted);
    assert_eq!(quiz.reference_url, None);
    assert_eq!(quiz.label, None);

    Ok(())
}

#[test]
fn test_quiz_contents_round_trip() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.quiz_repo();

    let contents = json!({
        "choices": [
            {"text": "4", "correct": true},
            {"text": "5", "correct": false}
        ],
        "hint": null,
        "weights": [0.5, 1.0],
        "meta": {"revision": 3}
    });
    let mut new = sample_quiz();
    new.contents = contents.clone();

    let id = repo.create(&new)?;
    assert_eq!(repo.find_by_id(id)?.contents, contents);

    Ok(())
}

#[test]
fn test_quiz_update_changes_only_patched_fields() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.quiz_repo();
    let id = repo.create(&sample_quiz())?;

    let patch = QuizPatch {
        answer: Some("Paris, France".into()),
        category: Some("capitals".into()),
        ..Default::default()
    };
    repo.update(id, &patch)?;

    let quiz = repo.find_by_id(id)?;
    assert_eq!(quiz.answer, "Paris, France");
    assert_eq!(quiz.category.as_deref(), Some("capitals"));
    // untouched fields survive
    assert_eq!(quiz.question, "Capital of France?");
    assert_eq!(quiz.commentary.as_deref(), Some("Lyon was the capital of Gaul, not France."));

    Ok(())
}

#[test]
fn test_quiz_soft_delete() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.quiz_repo();

    let keep = repo.create(&sample_quiz())?;
    let gone = repo.create(&NewQuiz {
        question: "Largest planet?".into(),
        contents: json!({"choices": ["Jupiter", "Saturn"]}),
        answer: "Jupiter".into(),
        commentary: None,
        author: None,
        category: Some("science".into()),
        created_at: None,
        reference_url: None,
        label: None,
    })?;

    repo.delete(gone)?;

    let all = repo.find_all(None)?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, keep);

    // still retrievable by id, flagged
    let deleted = repo.find_by_id(gone)?;
    assert!(deleted.is_deleted);
    assert_eq!(deleted.answer, "Jupiter");

    Ok(())
}

#[test]
fn test_missing_id_fails_with_not_found() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.quiz_repo();

    let err = repo.find_by_id(999).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { id: 999, .. }));

    let patch = QuizPatch {
        question: Some("?".into()),
        ..Default::default()
    };
    assert!(matches!(
        repo.update(999, &patch).unwrap_err(),
        StoreError::NotFound { .. }
    ));
    assert!(matches!(
        repo.delete(999).unwrap_err(),
        StoreError::NotFound { .. }
    ));

    Ok(())
}

#[test]
fn test_ids_never_reused_after_delete() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.quiz_repo();

    let first = repo.create(&sample_quiz())?;
    repo.delete(first)?;
    let second = repo.create(&sample_quiz())?;

    assert!(second > first);

    Ok(())
}

#[test]
fn test_quiz_find_by_category() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.quiz_repo();

    repo.create(&sample_quiz())?;
    let mut other = sample_quiz();
    other.question = "Boiling point of water at sea level?".into();
    other.category = Some("science".into());
    let science = repo.create(&other)?;

    let found = repo.find_by_category("science")?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, science);

    // soft-deleted rows drop out of category reads too
    repo.delete(science)?;
    assert!(repo.find_by_category("science")?.is_empty());

    Ok(())
}

#[test]
fn test_find_all_sorting() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.quiz_repo();

    let mut b = sample_quiz();
    b.question = "B?".into();
    let mut a = sample_quiz();
    a.question = "A?".into();
    repo.create(&b)?;
    repo.create(&a)?;

    let sorted = repo.find_all(Some("question"))?;
    assert_eq!(sorted[0].question, "A?");
    assert_eq!(sorted[1].question, "B?");

    assert!(matches!(
        repo.find_all(Some("no_such_column")).unwrap_err(),
        StoreError::Validation(_)
    ));

    Ok(())
}

#[test]
fn test_record_repository_validation() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let records = RecordRepository::new(db.connection(), &schema::QUIZZES);

    // required field absent
    let err = records
        .insert(&[("question", Value::from("Q?".to_string()))])
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    // unknown column
    let err = records
        .insert(&[("quesiton", Value::from("Q?".to_string()))])
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    // the id is assigned by the store
    let err = records.insert(&[("id", Value::Integer(7))]).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    let id = records.insert(&[
        ("question", Value::from("Q?".to_string())),
        ("contents", Value::from("{}".to_string())),
        ("answer", Value::from("A".to_string())),
    ])?;

    // empty update set
    assert!(matches!(
        records.update(id, &[]).unwrap_err(),
        StoreError::Validation(_)
    ));
    // the id is immutable
    assert!(matches!(
        records.update(id, &[("id", Value::Integer(9))]).unwrap_err(),
        StoreError::Validation(_)
    ));

    Ok(())
}

#[test]
fn test_answer_repository() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let quiz_repo = db.quiz_repo();
    let answer_repo = db.answer_repo();

    let quiz_id = quiz_repo.create(&sample_quiz())?;

    let right = answer_repo.create(&NewAnswer {
        quiz_id,
        respondent: Some("bob".into()),
        answer: "Paris".into(),
        is_correct: true,
        created_at: None,
    })?;
    let wrong = answer_repo.create(&NewAnswer {
        quiz_id,
        respondent: None,
        answer: "Lyon".into(),
        is_correct: false,
        created_at: None,
    })?;

    let for_quiz = answer_repo.find_by_quiz(quiz_id)?;
    assert_eq!(for_quiz.len(), 2);

    answer_repo.update(
        wrong,
        &AnswerPatch {
            is_correct: Some(true),
            ..Default::default()
        },
    )?;
    assert!(answer_repo.find_by_id(wrong)?.is_correct);

    answer_repo.delete(wrong)?;
    let remaining = answer_repo.find_by_quiz(quiz_id)?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, right);

    Ok(())
}

#[test]
fn test_event_and_ticket_repositories() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let event_repo = db.event_repo();
    let ticket_repo = db.ticket_repo();

    let event_id = event_repo.create(&NewEvent {
        name: "Winter Quiz Night".into(),
        description: Some("Annual pub quiz".into()),
        starts_at: Some("2025-01-17T19:00:00Z".into()),
        created_at: None,
    })?;

    let t1 = ticket_repo.create(&NewEventTicket {
        event_id,
        code: "WQN-001".into(),
        holder: Some("carol".into()),
        created_at: None,
    })?;
    ticket_repo.create(&NewEventTicket {
        event_id,
        code: "WQN-002".into(),
        holder: None,
        created_at: None,
    })?;

    assert_eq!(ticket_repo.find_by_event(event_id)?.len(), 2);

    ticket_repo.delete(t1)?;
    let live = ticket_repo.find_by_event(event_id)?;
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].code, "WQN-002");

    // the event itself is unaffected
    assert_eq!(event_repo.find_by_id(event_id)?.name, "Winter Quiz Night");

    Ok(())
}

#[test]
fn test_corrupt_contents_surface_as_serialization_error() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.quiz_repo();
    let id = repo.create(&sample_quiz())?;

    {
        let conn = db.connection();
        let guard = conn.lock().unwrap();
        guard.execute(
            "UPDATE quizzes SET contents = 'not json' WHERE id = ?1",
            [id],
        )?;
    }

    assert!(matches!(
        repo.find_by_id(id).unwrap_err(),
        StoreError::Serialization(_)
    ));

    Ok(())
}
