// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between UI and Services
// - Commands accept DTOs, return DTOs
// - Commands convert errors into ErrorResponse
// - Commands NEVER contain business logic

mod input;

pub mod design_commands;
pub mod fabric_commands;
pub mod session_commands;

pub use design_commands::*;
pub use fabric_commands::*;
pub use session_commands::*;
