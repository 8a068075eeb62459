// src/repositories/design_repository.rs
//
// Design persistence - maps Design records to documents in `designs`

use std::sync::Arc;

use crate::domain::design::Design;
use crate::error::AppResult;
use crate::repositories::document_store::{Collection, DocumentStore};

#[cfg_attr(test, mockall::automock)]
pub trait DesignRepository: Send + Sync {
    fn save(&self, design: &Design) -> AppResult<()>;
    fn list_all(&self) -> AppResult<Vec<Design>>;
    fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct DocumentDesignRepository {
    store: Arc<dyn DocumentStore>,
}

impl DocumentDesignRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

impl DesignRepository for DocumentDesignRepository {
    fn save(&self, design: &Design) -> AppResult<()> {
        let document = serde_json::to_value(design)?;
        self.store.upsert(Collection::Designs, &design.id, &document)
    }

    fn list_all(&self) -> AppResult<Vec<Design>> {
        self.store
            .list_all(Collection::Designs)?
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(Into::into))
            .collect()
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        self.store.delete_by_id(Collection::Designs, id)
    }
}
