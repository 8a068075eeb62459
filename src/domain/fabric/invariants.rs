use super::entity::{Fabric, FabricDraft};
use crate::domain::{DomainError, DomainResult};

/// Validates a submitted fabric before anything is written
pub fn validate_fabric_draft(draft: &FabricDraft) -> DomainResult<()> {
    require_text("Fabric ID", &draft.id)?;
    require_text("Name", &draft.name)?;
    require_amount("Meters", draft.meters)?;
    require_amount("Cost/m", draft.cost_per_meter)?;
    Ok(())
}

/// Validates a stored fabric record
pub fn validate_fabric(fabric: &Fabric) -> DomainResult<()> {
    require_text("Fabric ID", &fabric.id)?;
    require_text("Name", &fabric.name)?;
    require_amount("Meters", fabric.meters)?;
    require_amount("Cost/m", fabric.cost_per_meter)?;

    if fabric.fx_usd_per_inr.is_some() != fabric.cost_per_meter_usd.is_some() {
        return Err(DomainError::InvariantViolation(format!(
            "Fabric {} has a partially captured exchange rate",
            fabric.id
        )));
    }
    Ok(())
}

pub(crate) fn require_text(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Amounts must be real, finite and non-negative
pub(crate) fn require_amount(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() {
        return Err(DomainError::Validation(format!("{} must be a number", field)));
    }
    if value < 0.0 {
        return Err(DomainError::Validation(format!(
            "{} cannot be negative",
            field
        )));
    }
    Ok(())
}

/// Critical Fabric Invariants:
///
/// 1. id and name are non-empty
/// 2. meters and cost_per_meter are numbers (never NaN)
/// 3. The id never changes once created
/// 4. fx_usd_per_inr and cost_per_meter_usd are set together or not at all
/// 5. fx_date is always set, even when the rate lookup failed
