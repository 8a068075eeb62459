pub mod entity;
pub mod invariants;

pub use entity::{Fabric, FabricDraft};
pub use invariants::{validate_fabric, validate_fabric_draft};
