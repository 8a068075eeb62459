// src/lib.rs
// Garment Tracker - fabric and design cost tracking for a garment workshop
//
// Architecture:
// - Domain-centric: records, invariants and the cost model live in `domain`
// - Event-driven: services emit facts on an in-process bus
// - Explicit: derived costs are recomputed on every read, never stored
// - Session-gated: data commands need a signed-in user
// - Application Layer: UI boundary (DTOs, commands, error responses)

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod integrations;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod app;
pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    design_costs,
    fabric_costs,
    validate_design,
    validate_design_draft,
    validate_fabric,
    validate_fabric_draft,
    // Design
    Design,
    DesignCosts,
    DesignDraft,
    DomainError,
    // Fabric
    Fabric,
    FabricCosts,
    FabricDraft,
    FabricResolution,
    // Exchange
    RateCapture,
    SizeLabel,
    SizeRun,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{create_event_bus, DomainEvent, EventBus, EventLogEntry};

// ============================================================================
// PUBLIC API - Database & Repositories
// ============================================================================

pub use db::{create_connection_pool, create_memory_pool, initialize_database, ConnectionPool};

pub use repositories::{Collection, DocumentStore, SqliteDocumentStore};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{
    FrankfurterClient, IdentityProvider, LocalIdentityProvider, LookupError, RateProvider,
    Session,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{CatalogService, CatalogSnapshot, SessionService, UpsertOutcome};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use app::{assemble, build_app_state};
pub use application::AppState;
pub use config::AppConfig;

// Re-export application submodules
pub use application::commands;
pub use application::dto;
