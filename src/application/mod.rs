// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - It provides the boundary between a UI shell and the services
// - It translates between DTOs and domain entities
// - Data commands require a signed-in session

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod sorting;
pub mod state;
pub mod status;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use sorting::{DesignSortKey, FabricSortKey, SortDirection, SortOrder};
pub use state::AppState;
