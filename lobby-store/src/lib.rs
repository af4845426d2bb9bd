pub mod connection;
pub mod error;
pub mod memory;
pub mod path;
pub mod schema;
pub mod store;

pub use connection::{Database, DbConnection, DbPool};
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use path::{CollectionRef, DocumentRef};
pub use store::{DocumentStore, SqliteStore};
