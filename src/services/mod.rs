// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;
pub mod session_service;

pub use catalog_service::{CatalogService, CatalogSnapshot, UpsertOutcome};
pub use session_service::SessionService;
