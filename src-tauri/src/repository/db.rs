//! Database Connection and Setup
//!
//! Manages SQLite database connection and migrations.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::DomainError;

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    pub conn: Arc<Mutex<Connection>>,
}

impl DbState {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }
}

/// Open (or create) the database at `db_path` and run migrations.
///
/// `":memory:"` opens a private in-memory database.
pub fn init_db(db_path: &Path) -> Result<DbState, DomainError> {
    let conn = if db_path == Path::new(":memory:") {
        Connection::open_in_memory()?
    } else {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DomainError::Internal(format!("Failed to create db dir: {}", e)))?;
        }
        Connection::open(db_path)?
    };

    run_migrations(&conn)?;
    log::info!("database ready at {}", db_path.display());

    Ok(DbState::new(conn))
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool, DomainError> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for name in names {
        if name? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Run database migrations
pub(crate) fn run_migrations(conn: &Connection) -> Result<(), DomainError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS monkeys (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            species TEXT NOT NULL,
            habitat TEXT,
            conservation_status TEXT,
            image_url TEXT,
            fun_fact TEXT,
            is_favorite INTEGER NOT NULL DEFAULT 0
        )",
        [],
    )?;

    // Timestamps arrived after the first release
    if !column_exists(conn, "monkeys", "created_at")? {
        conn.execute("ALTER TABLE monkeys ADD COLUMN created_at INTEGER", [])?;
    }
    if !column_exists(conn, "monkeys", "updated_at")? {
        conn.execute("ALTER TABLE monkeys ADD COLUMN updated_at INTEGER", [])?;
    }

    Ok(())
}
