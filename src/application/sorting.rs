// src/application/sorting.rs
//
// Table ordering for the fabric and design views
//
// Sorting happens on the numeric values, before cells are formatted.
// Absent values (no supplier, no foreign amount) always go last,
// whatever the direction. Ties keep store order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::{design_costs, fabric_costs, Design, Fabric};
use crate::services::CatalogSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FabricSortKey {
    Id,
    Name,
    Supplier,
    Meters,
    CostPerMeter,
    TotalCost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignSortKey {
    Id,
    Name,
    Fabric,
    Pieces,
    TotalCost,
    CostPerPiece,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder<K> {
    pub key: K,
    #[serde(default)]
    pub direction: SortDirection,
}

impl<K> SortOrder<K> {
    pub fn ascending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }
}

/// A value a column can be ordered by
#[derive(Debug, Clone, PartialEq, PartialOrd)]
enum SortValue {
    Text(String),
    Number(f64),
}

fn compare(a: &Option<SortValue>, b: &Option<SortValue>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = a.partial_cmp(b).unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}

fn fabric_value(fabric: &Fabric, key: FabricSortKey) -> Option<SortValue> {
    match key {
        FabricSortKey::Id => Some(SortValue::Text(fabric.id.clone())),
        FabricSortKey::Name => Some(SortValue::Text(fabric.name.to_lowercase())),
        FabricSortKey::Supplier => fabric
            .supplier
            .as_ref()
            .map(|s| SortValue::Text(s.to_lowercase())),
        FabricSortKey::Meters => Some(SortValue::Number(fabric.meters)),
        FabricSortKey::CostPerMeter => Some(SortValue::Number(fabric.cost_per_meter)),
        FabricSortKey::TotalCost => Some(SortValue::Number(fabric_costs(fabric).total_cost_local)),
    }
}

fn design_value(
    snapshot: &CatalogSnapshot,
    design: &Design,
    key: DesignSortKey,
) -> Option<SortValue> {
    match key {
        DesignSortKey::Id => Some(SortValue::Text(design.id.clone())),
        DesignSortKey::Name => Some(SortValue::Text(design.name.to_lowercase())),
        DesignSortKey::Fabric => Some(SortValue::Text(design.fabric_id.clone())),
        DesignSortKey::Pieces => Some(SortValue::Number(f64::from(design.pieces))),
        DesignSortKey::TotalCost => Some(SortValue::Number(
            design_costs(design, snapshot.resolve(design)).total_cost_local,
        )),
        DesignSortKey::CostPerPiece => design_costs(design, snapshot.resolve(design))
            .cost_per_piece_foreign
            .map(SortValue::Number),
    }
}

pub fn sort_fabrics(fabrics: &mut [Fabric], order: SortOrder<FabricSortKey>) {
    fabrics.sort_by(|a, b| {
        compare(
            &fabric_value(a, order.key),
            &fabric_value(b, order.key),
            order.direction,
        )
    });
}

/// Designs are sorted against `snapshot` so cost columns resolve their fabric
pub fn sort_designs(
    snapshot: &CatalogSnapshot,
    designs: &mut [Design],
    order: SortOrder<DesignSortKey>,
) {
    let mut keyed: Vec<(Option<SortValue>, Design)> = designs
        .iter()
        .map(|d| (design_value(snapshot, d, order.key), d.clone()))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare(a, b, order.direction));

    for (slot, (_, design)) in designs.iter_mut().zip(keyed) {
        *slot = design;
    }
}
