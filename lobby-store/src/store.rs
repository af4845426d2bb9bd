use rusqlite::OptionalExtension;
use serde_json::Value;

use crate::connection::Database;
use crate::error::Result;
use crate::path::CollectionRef;

/// Write/read surface of the document store.
///
/// `set_document` is a full-overwrite upsert: the document is created if
/// absent and replaced in full if present (last writer wins, no merge).
/// Document ids are chosen by the caller, never generated by the store.
pub trait DocumentStore {
    /// Create or fully replace `collection/{document_id}`.
    fn set_document(
        &self,
        collection: &CollectionRef,
        document_id: &str,
        document: &Value,
    ) -> Result<()>;

    /// Read a single document, if present.
    fn get_document(&self, collection: &CollectionRef, document_id: &str)
        -> Result<Option<Value>>;

    /// All documents of a collection as `(id, payload)` pairs, ordered by id.
    fn list_documents(&self, collection: &CollectionRef) -> Result<Vec<(String, Value)>>;
}

/// Document store backed by the pooled SQLite database.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// The underlying database handle, for diagnostics that query the
    /// documents table directly.
    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl DocumentStore for SqliteStore {
    fn set_document(
        &self,
        collection: &CollectionRef,
        document_id: &str,
        document: &Value,
    ) -> Result<()> {
        let conn = self.db.connection()?;
        let data = serde_json::to_string(document)?;
        conn.execute(
            "INSERT OR REPLACE INTO documents (collection_path, document_id, data)
             VALUES (?, ?, ?)",
            (collection.path(), document_id, &data),
        )?;
        Ok(())
    }

    fn get_document(
        &self,
        collection: &CollectionRef,
        document_id: &str,
    ) -> Result<Option<Value>> {
        let conn = self.db.connection()?;
        let mut stmt = conn.prepare(
            "SELECT data FROM documents
             WHERE collection_path = ? AND document_id = ?",
        )?;

        let data: Option<String> = stmt
            .query_row((collection.path(), document_id), |row| row.get(0))
            .optional()?;

        match data {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    fn list_documents(&self, collection: &CollectionRef) -> Result<Vec<(String, Value)>> {
        let conn = self.db.connection()?;
        let mut stmt = conn.prepare(
            "SELECT document_id, data FROM documents
             WHERE collection_path = ?
             ORDER BY document_id",
        )?;

        let rows = stmt
            .query_map([collection.path()], |row| {
                let id: String = row.get(0)?;
                let data: String = row.get(1)?;
                Ok((id, data))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut documents = Vec::with_capacity(rows.len());
        for (id, data) in rows {
            documents.push((id, serde_json::from_str(&data)?));
        }
        Ok(documents)
    }
}
