pub mod entity;
pub mod invariants;

pub use entity::{Design, DesignDraft, SizeLabel, SizeRun};
pub use invariants::{validate_design, validate_design_draft};
