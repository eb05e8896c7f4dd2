use quizstore::domain::{NewAnswer, NewEvent, NewEventTicket, NewQuiz};
use quizstore::infra::db::Database;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let db = Database::open()?;
    let quiz_repo = db.quiz_repo();
    let answer_repo = db.answer_repo();
    let event_repo = db.event_repo();
    let ticket_repo = db.ticket_repo();

    // Sample quizzes that feel like a real pub-quiz round
    let quizzes = vec![
        NewQuiz {
            question: "Which planet has the shortest day?".to_string(),
            contents: json!({
                "choices": ["Mercury", "Jupiter", "Earth", "Neptune"],
                "points": 2,
                "time_limit_seconds": 30
            }),
            answer: "Jupiter".to_string(),
            commentary: Some(
                "Jupiter completes a rotation in just under ten hours despite its size."
                    .to_string(),
            ),
            author: Some("alice".to_string()),
            category: Some("science".to_string()),
            created_at: None,
            reference_url: Some("https://solarsystem.nasa.gov/planets/jupiter".to_string()),
            label: Some("round-1".to_string()),
        },
        NewQuiz {
            question: "In which year did the Berlin Wall fall?".to_string(),
            contents: json!({
                "choices": ["1987", "1989", "1991", "1993"],
                "points": 1
            }),
            answer: "1989".to_string(),
            commentary: None,
            author: Some("alice".to_string()),
            category: Some("history".to_string()),
            created_at: None,
            reference_url: None,
            label: Some("round-1".to_string()),
        },
        NewQuiz {
            question: "What is the longest river in Europe?".to_string(),
            contents: json!({
                "choices": ["Danube", "Volga", "Rhine", "Dnieper"],
                "points": 1
            }),
            answer: "Volga".to_string(),
            commentary: Some("The Danube is the longest inside the EU.".to_string()),
            author: Some("bob".to_string()),
            category: Some("geography".to_string()),
            created_at: None,
            reference_url: None,
            label: Some("round-2".to_string()),
        },
    ];

    let mut quiz_ids = Vec::new();
    for quiz in &quizzes {
        let id = quiz_repo.create(quiz)?;
        quiz_ids.push(id);
        println!("Inserted quiz {}: {}", id, quiz.question);
    }

    // A sample event with a couple of tickets
    let event_id = event_repo.create(&NewEvent {
        name: "Winter Quiz Night".to_string(),
        description: Some("Annual pub quiz, three rounds of four questions.".to_string()),
        starts_at: Some("2025-01-17T19:00:00Z".to_string()),
        created_at: None,
    })?;
    println!("Inserted event {event_id}: Winter Quiz Night");

    for (code, holder) in [("WQN-001", Some("carol")), ("WQN-002", None)] {
        let ticket_id = ticket_repo.create(&NewEventTicket {
            event_id,
            code: code.to_string(),
            holder: holder.map(str::to_string),
            created_at: None,
        })?;
        println!("Inserted ticket {ticket_id}: {code}");
    }

    // A few recorded answers against the first quiz
    for (respondent, answer, is_correct) in [
        (Some("carol"), "Jupiter", true),
        (Some("dave"), "Mercury", false),
        (None, "Jupiter", true),
    ] {
        answer_repo.create(&NewAnswer {
            quiz_id: quiz_ids[0],
            respondent: respondent.map(str::to_string),
            answer: answer.to_string(),
            is_correct,
            created_at: None,
        })?;
    }
    println!("Inserted 3 answers for quiz {}", quiz_ids[0]);

    println!("\nSample data successfully added to the store.");
    Ok(())
}
