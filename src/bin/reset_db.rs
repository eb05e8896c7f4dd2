use rusqlite::Connection;

// Children before parents so foreign keys never block the delete.
const TABLES: [&str; 4] = ["event_tickets", "answers", "events", "quizzes"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    run()
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Determine database path
    let db_path = if let Ok(path) = std::env::var("QUIZSTORE_DB_PATH") {
        std::path::PathBuf::from(path)
    } else {
        let cwd = std::env::current_dir().unwrap_or_default();
        cwd.join(".quizstore").join("db.sqlite")
    };

    // Check if database exists
    if !db_path.exists() {
        println!("Database does not exist at: {}", db_path.display());
        println!("No reset needed.");
        return Ok(());
    }

    println!("Connecting to database at: {}", db_path.display());

    let conn = Connection::open(&db_path)?;

    let tables_exist: i32 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='quizzes'",
        [],
        |row| row.get(0),
    )?;

    if tables_exist == 0 {
        println!("Tables do not exist. No reset needed.");
        return Ok(());
    }

    println!("Current record counts:");
    for table in TABLES {
        let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })?;
        println!("  {table}: {count}");
    }

    // Reset all tables by deleting all records
    for table in TABLES {
        conn.execute(&format!("DELETE FROM {table}"), [])?;
        println!("Cleared {table} table");
    }

    // Verify that all tables are empty
    let mut leftover = 0i64;
    println!("\nAfter reset:");
    for table in TABLES {
        let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })?;
        leftover += count;
        println!("  {table}: {count}");
    }

    if leftover == 0 {
        println!("\nDatabase successfully reset! All records have been deleted.");
    } else {
        eprintln!("\nWarning: Some records still exist in the database.");
    }

    println!("Database location: {}", db_path.display());

    Ok(())
}
