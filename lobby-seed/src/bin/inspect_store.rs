// Quick diagnostic to check what a seeded store contains
use lobby_store::Database;
use rusqlite::OptionalExtension;

fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "./lobby.db".to_string());
    let db = Database::new(&path)?;
    let conn = db.connection()?;

    println!("=== Store Diagnostic ===\n");
    println!("Database: {}", path);

    // Total document count
    let total: i32 = conn.query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;
    println!("Total documents: {}", total);

    // Per-collection counts
    println!("\n=== Documents per collection ===");
    let mut stmt = conn.prepare(
        "SELECT collection_path, COUNT(*) FROM documents
         GROUP BY collection_path
         ORDER BY collection_path",
    )?;
    let counts = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i32>(1)?))
    })?;
    for entry in counts {
        let (collection, count) = entry?;
        println!("  {} ({})", collection, count);
    }

    // Document ids per collection
    println!("\n=== Document paths ===");
    let mut stmt = conn.prepare(
        "SELECT collection_path, document_id FROM documents
         ORDER BY collection_path, document_id",
    )?;
    let docs = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;
    for (i, doc) in docs.enumerate() {
        let (collection, id) = doc?;
        println!("  {}. {}/{}", i + 1, collection, id);
    }

    // Sample payload preview for the seeded user, if present
    let user_data: Option<String> = conn
        .query_row(
            "SELECT data FROM documents WHERE collection_path = 'users' AND document_id = 'user_1'",
            [],
            |row| row.get(0),
        )
        .optional()?;
    if let Some(data) = user_data {
        println!("\n=== users/user_1 ===");
        let preview = if data.len() > 200 {
            format!("{}...", &data[..200])
        } else {
            data
        };
        println!("  {}", preview);
    }

    Ok(())
}
