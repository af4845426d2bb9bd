use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;

use crate::error::Result;
use crate::schema::SCHEMA;

/// SQLite in-memory database identifier
const MEMORY_DB_PATH: &str = ":memory:";

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Database wrapper with connection pooling support
#[derive(Clone)]
pub struct Database {
    pub pool: DbPool,
}

impl Database {
    /// Create a new database connection pool.
    ///
    /// Pass ":memory:" for an in-memory database. An in-memory database
    /// lives and dies with its connection, so that pool is capped at a
    /// single connection.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy();
        let trimmed_path = path_str.trim();

        let pool = if trimmed_path.eq_ignore_ascii_case(MEMORY_DB_PATH) {
            Pool::builder()
                .max_size(1)
                .build(SqliteConnectionManager::memory())?
        } else {
            Pool::new(SqliteConnectionManager::file(path.as_ref()))?
        };

        Ok(Self { pool })
    }

    /// Create an in-memory database pool (useful for testing)
    pub fn in_memory() -> Result<Self> {
        Self::new(MEMORY_DB_PATH)
    }

    /// Initialize the document table and its index
    pub fn initialize(&self) -> Result<()> {
        let conn = self.connection()?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Get a connection from the pool
    pub fn connection(&self) -> Result<DbConnection> {
        Ok(self.pool.get()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_creation() {
        let db = Database::in_memory().expect("Failed to create database");
        db.initialize().expect("Failed to initialize schema");

        // Verify the documents table exists
        let conn = db.connection().expect("Failed to get connection");
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .expect("Failed to prepare statement");

        let tables: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .expect("Failed to query tables")
            .collect::<std::result::Result<Vec<_>, _>>()
            .expect("Failed to collect tables");

        assert!(tables.contains(&"documents".to_string()));
    }

    #[test]
    fn test_initialize_is_repeatable() {
        let db = Database::in_memory().expect("Failed to create database");
        db.initialize().expect("Failed to initialize schema");
        db.initialize().expect("Second initialize should not fail");
    }

    #[test]
    fn test_memory_database_detection() {
        // Various memory database path spellings
        let memory_paths = [":memory:", " :memory: ", ":MEMORY:", " :Memory: "];

        for path in &memory_paths {
            let db = Database::new(path).expect("Failed to create memory database");
            db.initialize().expect("Failed to initialize schema");
            assert_eq!(db.pool.max_size(), 1);
        }
    }

    #[test]
    fn test_schema_survives_across_pool_checkouts() {
        let db = Database::in_memory().expect("Failed to create database");
        db.initialize().expect("Failed to initialize schema");

        // A second checkout must observe the same database
        drop(db.connection().expect("First checkout failed"));
        let conn = db.connection().expect("Second checkout failed");
        let count: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='documents'",
                [],
                |row| row.get(0),
            )
            .expect("Failed to query table");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_file_database() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("lobby_test.db");

        let db = Database::new(&path).expect("Failed to create file database");
        db.initialize().expect("Failed to initialize file schema");

        assert!(path.exists());
    }
}
