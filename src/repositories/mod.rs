// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO event emission
// - NO cross-repository calls

pub mod design_repository;
pub mod document_store;
pub mod fabric_repository;

pub use design_repository::{DesignRepository, DocumentDesignRepository};
pub use document_store::{Collection, DocumentStore, SqliteDocumentStore};
pub use fabric_repository::{DocumentFabricRepository, FabricRepository};
