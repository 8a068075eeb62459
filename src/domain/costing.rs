// src/domain/costing.rs
//
// Cost Model
//
// Pure computation of derived costs. Nothing here is stored: every value is
// recomputed from the base fields each time a snapshot is presented.
//
// RULES:
// - An unknown exchange rate yields `None`, never zero
// - A dangling fabric reference degrades fabric cost to zero
// - No rounding; presentation rounds

use serde::Serialize;

use crate::domain::design::Design;
use crate::domain::fabric::Fabric;

/// Result of looking a design's `fabric_id` up in the fabrics collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FabricResolution<'a> {
    Resolved(&'a Fabric),
    /// The referenced fabric no longer exists
    Unresolved,
}

impl<'a> FabricResolution<'a> {
    pub fn resolve(fabrics: &'a [Fabric], fabric_id: &str) -> Self {
        fabrics
            .iter()
            .find(|f| f.id == fabric_id)
            .map(FabricResolution::Resolved)
            .unwrap_or(FabricResolution::Unresolved)
    }

    pub fn fabric(&self) -> Option<&'a Fabric> {
        match self {
            FabricResolution::Resolved(fabric) => Some(fabric),
            FabricResolution::Unresolved => None,
        }
    }
}

/// Derived values for one fabric row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FabricCosts {
    pub total_cost_local: f64,
    pub total_cost_foreign: Option<f64>,
}

pub fn fabric_costs(fabric: &Fabric) -> FabricCosts {
    let total_cost_local = fabric.meters * fabric.cost_per_meter;

    FabricCosts {
        total_cost_local,
        total_cost_foreign: fabric.rate_capture().convert(total_cost_local),
    }
}

/// Derived values for one design row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignCosts {
    pub pieces: u32,
    pub fabric_used_meters: f64,
    pub cost_per_meter_local: f64,
    pub fabric_cost_local: f64,
    /// Rate the foreign amounts were derived with
    pub rate: Option<f64>,
    pub fabric_cost_foreign: Option<f64>,
    pub other_cost_local: f64,
    pub other_cost_foreign: Option<f64>,
    pub total_cost_local: f64,
    pub total_cost_foreign: Option<f64>,
    pub cost_per_piece_foreign: Option<f64>,
}

pub fn design_costs(design: &Design, fabric: FabricResolution<'_>) -> DesignCosts {
    let pieces = design.pieces;
    let fabric_used_meters = f64::from(pieces) * design.fabric_per_piece;

    let cost_per_meter_local = match fabric {
        FabricResolution::Resolved(f) => f.cost_per_meter,
        FabricResolution::Unresolved => 0.0,
    };
    let fabric_cost_local = fabric_used_meters * cost_per_meter_local;

    // The design's own capture wins; the fabric's is the fallback
    let rate = design
        .fx_usd_per_inr
        .or_else(|| fabric.fabric().and_then(|f| f.fx_usd_per_inr));

    let other_cost_local = design.other_cost;
    let other_cost_foreign = design
        .other_cost_usd
        .or_else(|| rate.map(|r| other_cost_local * r));

    let total_cost_local = fabric_cost_local + other_cost_local;
    let total_cost_foreign = rate.map(|r| total_cost_local * r);

    let cost_per_piece_foreign = match total_cost_foreign {
        Some(total) if pieces > 0 => Some(total / f64::from(pieces)),
        _ => None,
    };

    DesignCosts {
        pieces,
        fabric_used_meters,
        cost_per_meter_local,
        fabric_cost_local,
        rate,
        fabric_cost_foreign: rate.map(|r| fabric_cost_local * r),
        other_cost_local,
        other_cost_foreign,
        total_cost_local,
        total_cost_foreign,
        cost_per_piece_foreign,
    }
}
