// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - Form DTOs carry raw input strings, exactly as typed
// - Row DTOs carry already formatted cells
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{
    design_costs, fabric_costs, Design, Fabric, FabricResolution, RateCapture, FOREIGN_CURRENCY,
    LOCAL_CURRENCY,
};
use crate::integrations::Session;
use crate::services::UpsertOutcome;

/// Rendered in place of a foreign amount that could not be derived
pub const MISSING_CELL: &str = "-";

pub const UNKNOWN_FABRIC: &str = "Unknown fabric";

// ============================================================================
// FORM DTOs
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FabricFormDto {
    pub id: String,
    pub name: String,
    pub color: String,
    pub supplier: String,
    pub meters: String,
    pub cost_per_meter: String,
    /// `YYYY-MM-DD` or blank
    pub purchase_date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignFormDto {
    pub id: String,
    pub name: String,
    pub fabric_id: String,
    pub size_xs: String,
    pub size_s: String,
    pub size_m: String,
    pub size_l: String,
    pub size_xl: String,
    pub fabric_per_piece: String,
    /// Blank means 0
    pub other_cost: String,
}

// ============================================================================
// FABRIC DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FabricRowDto {
    pub id: String,
    pub name: String,
    pub color: String,
    pub supplier: String,
    pub meters: String,
    pub cost_per_meter: String,
    pub cost_per_meter_usd: String,
    pub total_cost: String,
    pub total_cost_usd: String,
    pub purchase_date: String,
    pub fx_date: String,
}

impl From<&Fabric> for FabricRowDto {
    fn from(fabric: &Fabric) -> Self {
        let costs = fabric_costs(fabric);

        Self {
            id: fabric.id.clone(),
            name: fabric.name.clone(),
            color: fabric.color.clone().unwrap_or_default(),
            supplier: fabric.supplier.clone().unwrap_or_default(),
            meters: format!("{:.2}", fabric.meters),
            cost_per_meter: local_cell(fabric.cost_per_meter, 4),
            cost_per_meter_usd: foreign_cell(fabric.cost_per_meter_usd, 4),
            total_cost: local_cell(costs.total_cost_local, 2),
            total_cost_usd: foreign_cell(costs.total_cost_foreign, 2),
            purchase_date: fabric
                .purchase_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
            fx_date: fabric.fx_date.to_string(),
        }
    }
}

/// One entry of the design form's fabric selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FabricOptionDto {
    pub value: String,
    pub label: String,
}

impl From<&Fabric> for FabricOptionDto {
    fn from(fabric: &Fabric) -> Self {
        Self {
            value: fabric.id.clone(),
            label: format!("{} - {}", fabric.id, fabric.name),
        }
    }
}

// ============================================================================
// DESIGN DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRowDto {
    pub id: String,
    pub name: String,
    pub fabric_id: String,
    /// Fabric name, or "Unknown fabric" for a dangling reference
    pub fabric_name: String,
    pub sizes: String,
    pub pieces: u32,
    pub fabric_used_meters: String,
    pub fabric_cost: String,
    pub fabric_cost_usd: String,
    pub other_cost: String,
    pub other_cost_usd: String,
    pub total_cost: String,
    pub total_cost_usd: String,
    pub cost_per_piece_usd: String,
    pub fx_date: String,
}

impl DesignRowDto {
    pub fn from_design(design: &Design, fabric: FabricResolution<'_>) -> Self {
        let costs = design_costs(design, fabric);

        Self {
            id: design.id.clone(),
            name: design.name.clone(),
            fabric_id: design.fabric_id.clone(),
            fabric_name: fabric
                .fabric()
                .map(|f| f.name.clone())
                .unwrap_or_else(|| UNKNOWN_FABRIC.to_string()),
            sizes: design.size_summary(),
            pieces: costs.pieces,
            fabric_used_meters: format!("{:.2}", costs.fabric_used_meters),
            fabric_cost: local_cell(costs.fabric_cost_local, 2),
            fabric_cost_usd: foreign_cell(costs.fabric_cost_foreign, 2),
            other_cost: local_cell(costs.other_cost_local, 2),
            other_cost_usd: foreign_cell(costs.other_cost_foreign, 2),
            total_cost: local_cell(costs.total_cost_local, 2),
            total_cost_usd: foreign_cell(costs.total_cost_foreign, 2),
            cost_per_piece_usd: foreign_cell(costs.cost_per_piece_foreign, 2),
            fx_date: design.fx_date.to_string(),
        }
    }
}

// ============================================================================
// WRITE RESULTS & SESSION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsertResultDto {
    pub id: String,
    pub fx_date: String,
    pub rate_captured: bool,
    pub fx_usd_per_inr: Option<f64>,
}

impl From<UpsertOutcome> for UpsertResultDto {
    fn from(outcome: UpsertOutcome) -> Self {
        Self {
            id: outcome.id,
            fx_date: outcome.fx_date.to_string(),
            rate_captured: matches!(outcome.capture, RateCapture::Captured(_)),
            fx_usd_per_inr: outcome.capture.rate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDto {
    pub uid: String,
    pub email: String,
}

impl From<Session> for SessionDto {
    fn from(session: Session) -> Self {
        Self {
            uid: session.uid,
            email: session.email,
        }
    }
}

// ============================================================================
// CELL FORMATTING
// ============================================================================

fn local_cell(amount: f64, decimals: usize) -> String {
    format!("{:.*} {}", decimals, amount, LOCAL_CURRENCY)
}

fn foreign_cell(amount: Option<f64>, decimals: usize) -> String {
    match amount {
        Some(value) => format!("{:.*} {}", decimals, value, FOREIGN_CURRENCY),
        None => MISSING_CELL.to_string(),
    }
}
