/// SQL schema for the document store.
///
/// Documents are JSON rows keyed by `(collection_path, document_id)`.
/// Sub-collections need no extra tables: nesting lives in the path
/// (`posts/post_1/comments`).
pub const SCHEMA: &str = r#"
-- Documents table: one row per document, payload stored as JSON text
CREATE TABLE IF NOT EXISTS documents (
    collection_path TEXT NOT NULL,
    document_id TEXT NOT NULL,
    data TEXT NOT NULL,
    PRIMARY KEY (collection_path, document_id)
);

-- Index for per-collection listings and counts
CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection_path);
"#;
