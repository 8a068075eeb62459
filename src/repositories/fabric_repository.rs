// src/repositories/fabric_repository.rs
//
// Fabric persistence - maps Fabric records to documents in `fabrics`

use std::sync::Arc;

use crate::domain::fabric::Fabric;
use crate::error::AppResult;
use crate::repositories::document_store::{Collection, DocumentStore};

#[cfg_attr(test, mockall::automock)]
pub trait FabricRepository: Send + Sync {
    fn save(&self, fabric: &Fabric) -> AppResult<()>;
    fn list_all(&self) -> AppResult<Vec<Fabric>>;
    fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct DocumentFabricRepository {
    store: Arc<dyn DocumentStore>,
}

impl DocumentFabricRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

impl FabricRepository for DocumentFabricRepository {
    fn save(&self, fabric: &Fabric) -> AppResult<()> {
        let document = serde_json::to_value(fabric)?;
        self.store.upsert(Collection::Fabrics, &fabric.id, &document)
    }

    fn list_all(&self) -> AppResult<Vec<Fabric>> {
        self.store
            .list_all(Collection::Fabrics)?
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(Into::into))
            .collect()
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        self.store.delete_by_id(Collection::Fabrics, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FabricDraft, RateCapture};
    use crate::error::AppError;
    use crate::repositories::document_store::MockDocumentStore;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_save_writes_camel_case_document_under_id() {
        let mut store = MockDocumentStore::new();
        store
            .expect_upsert()
            .withf(|collection, id, doc| {
                *collection == Collection::Fabrics && id == "F1" && doc["costPerMeter"] == 100.0
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let repo = DocumentFabricRepository::new(Arc::new(store));
        let fabric = FabricDraft::new("F1", "Cotton", None, None, 10.0, 100.0, None).into_fabric(
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            RateCapture::Unavailable,
        );
        repo.save(&fabric).unwrap();
    }

    #[test]
    fn test_malformed_document_is_a_serialization_error() {
        let mut store = MockDocumentStore::new();
        store
            .expect_list_all()
            .returning(|_| Ok(vec![json!({"id": "F1"})]));

        let repo = DocumentFabricRepository::new(Arc::new(store));
        assert!(matches!(repo.list_all(), Err(AppError::Serialization(_))));
    }
}
