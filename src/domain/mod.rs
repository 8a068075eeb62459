// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod costing;
pub mod design;
pub mod exchange;
pub mod fabric;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Fabric Domain
pub use fabric::{validate_fabric, validate_fabric_draft, Fabric, FabricDraft};

// Design Domain
pub use design::{validate_design, validate_design_draft, Design, DesignDraft, SizeLabel, SizeRun};

// Exchange rates
pub use exchange::{RateCapture, FOREIGN_CURRENCY, LOCAL_CURRENCY};

// Cost Model (Derived Data)
pub use costing::{design_costs, fabric_costs, DesignCosts, FabricCosts, FabricResolution};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required field is missing or not a number; nothing is written
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Deleting a fabric that designs still point at
    #[error("Fabric {fabric_id} is used in one or more designs ({}). Delete those designs first, then delete the fabric.", design_ids.join(", "))]
    Referential {
        fabric_id: String,
        design_ids: Vec<String>,
    },

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
