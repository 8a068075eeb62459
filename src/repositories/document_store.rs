// src/repositories/document_store.rs
//
// Document store - persistence collaborator
//
// Two named collections of JSON documents, each keyed by the record's id.
// Upsert is a full overwrite, never a merge.

use std::sync::Arc;

use chrono::Utc;
use rusqlite::params;
use serde_json::Value;

use crate::db::{get_connection, ConnectionPool};
use crate::error::{AppError, AppResult};

/// Named collections of the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Fabrics,
    Designs,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Fabrics => "fabrics",
            Collection::Designs => "designs",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait DocumentStore: Send + Sync {
    /// Every document of the collection, in store order
    fn list_all(&self, collection: Collection) -> AppResult<Vec<Value>>;

    /// Create or fully replace the document keyed by `id`
    fn upsert(&self, collection: Collection, id: &str, document: &Value) -> AppResult<()>;

    /// Remove the document keyed by `id`; removing a missing id is not an error
    fn delete_by_id(&self, collection: Collection, id: &str) -> AppResult<()>;
}

pub struct SqliteDocumentStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteDocumentStore {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl DocumentStore for SqliteDocumentStore {
    fn list_all(&self, collection: Collection) -> AppResult<Vec<Value>> {
        let conn = get_connection(&self.pool)?;

        let mut stmt = conn.prepare(
            "SELECT body FROM documents
             WHERE collection = ?1
             ORDER BY id",
        )?;

        let bodies: Vec<String> = stmt
            .query_map(params![collection.name()], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;

        bodies
            .iter()
            .map(|body| serde_json::from_str(body).map_err(AppError::Serialization))
            .collect()
    }

    fn upsert(&self, collection: Collection, id: &str, document: &Value) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;
        let body = serde_json::to_string(document)?;

        conn.execute(
            "INSERT OR REPLACE INTO documents (collection, id, body, updated_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![collection.name(), id, body, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }

    fn delete_by_id(&self, collection: Collection, id: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;

        conn.execute(
            "DELETE FROM documents WHERE collection = ?1 AND id = ?2",
            params![collection.name(), id],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, initialize_database};
    use serde_json::json;

    fn store() -> SqliteDocumentStore {
        let pool = create_memory_pool().unwrap();
        {
            let conn = pool.get().unwrap();
            initialize_database(&conn).unwrap();
        }
        SqliteDocumentStore::new(Arc::new(pool))
    }

    #[test]
    fn test_upsert_and_list() {
        let store = store();
        store
            .upsert(Collection::Fabrics, "F1", &json!({"id": "F1", "meters": 10}))
            .unwrap();

        let docs = store.list_all(Collection::Fabrics).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["meters"], 10);
        assert!(store.list_all(Collection::Designs).unwrap().is_empty());
    }

    #[test]
    fn test_upsert_overwrites_without_merging() {
        let store = store();
        store
            .upsert(Collection::Fabrics, "F1", &json!({"id": "F1", "color": "red"}))
            .unwrap();
        store
            .upsert(Collection::Fabrics, "F1", &json!({"id": "F1", "name": "Silk"}))
            .unwrap();

        let docs = store.list_all(Collection::Fabrics).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["name"], "Silk");
        assert!(docs[0].get("color").is_none());
    }

    #[test]
    fn test_collections_are_isolated() {
        let store = store();
        store.upsert(Collection::Fabrics, "X", &json!({"id": "X"})).unwrap();
        store.upsert(Collection::Designs, "X", &json!({"id": "X"})).unwrap();

        store.delete_by_id(Collection::Designs, "X").unwrap();

        assert_eq!(store.list_all(Collection::Fabrics).unwrap().len(), 1);
        assert!(store.list_all(Collection::Designs).unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let store = store();
        assert!(store.delete_by_id(Collection::Fabrics, "nope").is_ok());
    }

    #[test]
    fn test_uninitialized_database_reports_error() {
        let pool = create_memory_pool().unwrap();
        let store = SqliteDocumentStore::new(Arc::new(pool));
        let err = store.list_all(Collection::Fabrics).unwrap_err();
        assert!(err.is_persistence());
    }
}
