use super::entity::{Design, DesignDraft};
use crate::domain::fabric::invariants::{require_amount, require_text};
use crate::domain::{DomainError, DomainResult};

/// Validates a submitted design before anything is written
pub fn validate_design_draft(draft: &DesignDraft) -> DomainResult<()> {
    require_text("Design ID", &draft.id)?;
    require_text("Name", &draft.name)?;
    require_text("Fabric", &draft.fabric_id)?;

    if draft.pieces() == 0 {
        return Err(DomainError::Validation(
            "At least one size quantity is required".to_string(),
        ));
    }

    match draft.fabric_per_piece {
        None => {
            return Err(DomainError::Validation(
                "Fabric per Piece is required".to_string(),
            ))
        }
        Some(value) if !value.is_finite() => {
            return Err(DomainError::Validation(
                "Fabric per Piece must be a number".to_string(),
            ))
        }
        Some(_) => {}
    }

    require_amount("Other cost", draft.other_cost)?;
    Ok(())
}

/// Validates a stored design record
pub fn validate_design(design: &Design) -> DomainResult<()> {
    require_text("Design ID", &design.id)?;
    require_text("Name", &design.name)?;
    require_text("Fabric", &design.fabric_id)?;

    if design.pieces == 0 {
        return Err(DomainError::Validation(
            "At least one size quantity is required".to_string(),
        ));
    }
    if design.pieces != design.sizes.pieces() {
        return Err(DomainError::InvariantViolation(format!(
            "Design {} stores {} pieces but its sizes add up to {}",
            design.id,
            design.pieces,
            design.sizes.pieces()
        )));
    }
    if design.fx_usd_per_inr.is_some() != design.other_cost_usd.is_some() {
        return Err(DomainError::InvariantViolation(format!(
            "Design {} has a partially captured exchange rate",
            design.id
        )));
    }
    Ok(())
}

/// Critical Design Invariants:
///
/// 1. id, name and fabric_id are non-empty
/// 2. pieces == sum of sizes, and pieces > 0
/// 3. fabric_per_piece is present and numeric
/// 4. fabric_id is NOT checked against the fabrics collection here;
///    the reference is resolved lazily when costs are computed
/// 5. The enrichment date is the write date, never user-chosen
