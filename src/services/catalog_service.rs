// src/services/catalog_service.rs
//
// Catalog Store - owns the fabrics and designs snapshot
//
// Every write runs one chain to completion:
//   validate -> enrich (best effort) -> persist -> reload collection
//
// RULES:
// - Validation and referential checks happen before any side effect
// - A failed rate lookup never blocks a write
// - A failed store call stops the chain; the snapshot keeps its last state
// - The snapshot is only ever replaced whole, never patched
//
// Two submits for the same id that overlap race at the store and the
// later write wins. There is no version token.

use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{
    validate_design, validate_design_draft, validate_fabric, validate_fabric_draft, Design,
    DesignDraft, DomainError, Fabric, FabricDraft, FabricResolution, RateCapture,
};
use crate::error::AppResult;
use crate::events::{CatalogReloaded, DesignDeleted, DesignSaved, EventBus, FabricDeleted, FabricSaved};
use crate::infrastructure::Clock;
use crate::integrations::RateProvider;
use crate::repositories::{DesignRepository, FabricRepository};

/// Immutable view of both collections as of the last load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub fabrics: Vec<Fabric>,
    pub designs: Vec<Design>,
}

impl CatalogSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn fabric(&self, id: &str) -> Option<&Fabric> {
        self.fabrics.iter().find(|f| f.id == id)
    }

    pub fn resolve(&self, design: &Design) -> FabricResolution<'_> {
        FabricResolution::resolve(&self.fabrics, &design.fabric_id)
    }

    /// Designs that reference `fabric_id`
    pub fn dependents_of(&self, fabric_id: &str) -> Vec<&Design> {
        self.designs
            .iter()
            .filter(|d| d.fabric_id == fabric_id)
            .collect()
    }
}

/// What an upsert stored
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpsertOutcome {
    pub id: String,
    pub fx_date: NaiveDate,
    pub capture: RateCapture,
}

pub struct CatalogService {
    fabric_repo: Arc<dyn FabricRepository>,
    design_repo: Arc<dyn DesignRepository>,
    rates: Arc<dyn RateProvider>,
    clock: Arc<dyn Clock>,
    event_bus: Arc<EventBus>,
    snapshot: RwLock<Arc<CatalogSnapshot>>,
}

impl CatalogService {
    pub fn new(
        fabric_repo: Arc<dyn FabricRepository>,
        design_repo: Arc<dyn DesignRepository>,
        rates: Arc<dyn RateProvider>,
        clock: Arc<dyn Clock>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            fabric_repo,
            design_repo,
            rates,
            clock,
            event_bus,
            snapshot: RwLock::new(Arc::new(CatalogSnapshot::empty())),
        }
    }

    // ========================================================================
    // READS
    // ========================================================================

    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&self.snapshot.read().unwrap_or_else(|e| e.into_inner()))
    }

    pub fn list_fabrics(&self) -> Vec<Fabric> {
        self.snapshot().fabrics.clone()
    }

    pub fn list_designs(&self) -> Vec<Design> {
        self.snapshot().designs.clone()
    }

    // ========================================================================
    // WRITES
    // ========================================================================

    pub async fn upsert_fabric(&self, draft: FabricDraft) -> AppResult<UpsertOutcome> {
        validate_fabric_draft(&draft)?;

        let fx_date = draft.enrichment_date(self.clock.today());
        let capture = self.capture_rate(fx_date).await;
        let fabric = draft.into_fabric(fx_date, capture);
        validate_fabric(&fabric)?;

        self.fabric_repo.save(&fabric).inspect_err(|e| {
            log::error!("Failed to save fabric {}: {}", fabric.id, e);
        })?;
        log::info!("Saved fabric {} (rate captured: {})", fabric.id, capture.is_captured());

        self.event_bus
            .emit(FabricSaved::new(fabric.id.clone(), capture.is_captured()));
        self.reload_fabrics()?;

        Ok(UpsertOutcome {
            id: fabric.id,
            fx_date,
            capture,
        })
    }

    /// Designs always enrich at today's date
    pub async fn upsert_design(&self, draft: DesignDraft) -> AppResult<UpsertOutcome> {
        validate_design_draft(&draft)?;

        let fx_date = self.clock.today();
        let capture = self.capture_rate(fx_date).await;
        let design = draft.into_design(fx_date, capture);
        validate_design(&design)?;

        self.design_repo.save(&design).inspect_err(|e| {
            log::error!("Failed to save design {}: {}", design.id, e);
        })?;
        log::info!("Saved design {} (rate captured: {})", design.id, capture.is_captured());

        self.event_bus.emit(DesignSaved::new(
            design.id.clone(),
            design.fabric_id.clone(),
            capture.is_captured(),
        ));
        self.reload_designs()?;

        Ok(UpsertOutcome {
            id: design.id,
            fx_date,
            capture,
        })
    }

    /// Refused while any design in the current snapshot references the fabric
    pub fn delete_fabric(&self, id: &str) -> AppResult<()> {
        let dependents: Vec<String> = self
            .snapshot()
            .dependents_of(id)
            .into_iter()
            .map(|d| d.id.clone())
            .collect();

        if !dependents.is_empty() {
            log::info!("Refusing to delete fabric {}: used by {:?}", id, dependents);
            return Err(DomainError::Referential {
                fabric_id: id.to_string(),
                design_ids: dependents,
            }
            .into());
        }

        self.fabric_repo.delete(id).inspect_err(|e| {
            log::error!("Failed to delete fabric {}: {}", id, e);
        })?;
        log::info!("Deleted fabric {}", id);

        self.event_bus.emit(FabricDeleted::new(id.to_string()));
        self.reload_fabrics()
    }

    pub fn delete_design(&self, id: &str) -> AppResult<()> {
        self.design_repo.delete(id).inspect_err(|e| {
            log::error!("Failed to delete design {}: {}", id, e);
        })?;
        log::info!("Deleted design {}", id);

        self.event_bus.emit(DesignDeleted::new(id.to_string()));
        self.reload_designs()
    }

    // ========================================================================
    // LOADING
    // ========================================================================

    /// Load both collections, fabrics first
    pub fn load_all(&self) -> AppResult<()> {
        let fabrics = self.fabric_repo.list_all()?;
        let designs = self.design_repo.list_all()?;

        self.replace_snapshot(CatalogSnapshot { fabrics, designs });
        Ok(())
    }

    /// Forget everything loaded (sign-out)
    pub fn clear(&self) {
        *self.snapshot.write().unwrap_or_else(|e| e.into_inner()) =
            Arc::new(CatalogSnapshot::empty());
        log::debug!("Catalog snapshot cleared");
    }

    fn reload_fabrics(&self) -> AppResult<()> {
        let fabrics = self.fabric_repo.list_all()?;
        let designs = self.snapshot().designs.clone();

        self.replace_snapshot(CatalogSnapshot { fabrics, designs });
        Ok(())
    }

    fn reload_designs(&self) -> AppResult<()> {
        let designs = self.design_repo.list_all()?;
        let fabrics = self.snapshot().fabrics.clone();

        self.replace_snapshot(CatalogSnapshot { fabrics, designs });
        Ok(())
    }

    fn replace_snapshot(&self, next: CatalogSnapshot) {
        let (fabric_count, design_count) = (next.fabrics.len(), next.designs.len());

        *self.snapshot.write().unwrap_or_else(|e| e.into_inner()) = Arc::new(next);

        log::debug!(
            "Catalog reloaded: {} fabrics, {} designs",
            fabric_count,
            design_count
        );
        self.event_bus
            .emit(CatalogReloaded::new(fabric_count, design_count));
    }

    // ========================================================================
    // ENRICHMENT
    // ========================================================================

    /// A failed lookup is logged and downgraded to `Unavailable`
    async fn capture_rate(&self, date: NaiveDate) -> RateCapture {
        match self.rates.rate_for_date(date).await {
            Ok(rate) => RateCapture::Captured(rate),
            Err(e) => {
                log::warn!(
                    "Exchange rate for {} unavailable, storing local costs only: {}",
                    date,
                    e
                );
                RateCapture::Unavailable
            }
        }
    }
}
