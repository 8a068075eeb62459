use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::exchange::RateCapture;

/// A fabric purchase as stored in the `fabrics` collection
///
/// Field names serialize in camelCase so the stored document keeps the
/// shape the tracker has always written (`costPerMeter`, `fxUsdPerInr`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fabric {
    /// User-assigned identifier, primary key of the collection
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub supplier: Option<String>,

    /// Quantity purchased, in meters
    pub meters: f64,

    /// Unit cost in local currency
    pub cost_per_meter: f64,

    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,

    /// Date the rate lookup was made for
    pub fx_date: NaiveDate,

    /// USD for 1 INR at `fx_date`, absent when the lookup failed
    #[serde(default)]
    pub fx_usd_per_inr: Option<f64>,

    /// `cost_per_meter * fx_usd_per_inr`
    #[serde(default)]
    pub cost_per_meter_usd: Option<f64>,
}

/// Fabric as submitted by the form, before enrichment
#[derive(Debug, Clone, PartialEq)]
pub struct FabricDraft {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub supplier: Option<String>,
    pub meters: f64,
    pub cost_per_meter: f64,
    pub purchase_date: Option<NaiveDate>,
}

impl FabricDraft {
    /// Build a draft, trimming text fields and dropping blank optionals
    pub fn new(
        id: &str,
        name: &str,
        color: Option<&str>,
        supplier: Option<&str>,
        meters: f64,
        cost_per_meter: f64,
        purchase_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: id.trim().to_string(),
            name: name.trim().to_string(),
            color: non_blank(color),
            supplier: non_blank(supplier),
            meters,
            cost_per_meter,
            purchase_date,
        }
    }

    /// Rate lookups use the purchase date when known, otherwise today
    pub fn enrichment_date(&self, today: NaiveDate) -> NaiveDate {
        self.purchase_date.unwrap_or(today)
    }

    /// Attach the enrichment fields and produce the record to persist
    pub fn into_fabric(self, fx_date: NaiveDate, capture: RateCapture) -> Fabric {
        let cost_per_meter_usd = capture.convert(self.cost_per_meter);

        Fabric {
            id: self.id,
            name: self.name,
            color: self.color,
            supplier: self.supplier,
            meters: self.meters,
            cost_per_meter: self.cost_per_meter,
            purchase_date: self.purchase_date,
            fx_date,
            fx_usd_per_inr: capture.rate(),
            cost_per_meter_usd,
        }
    }
}

impl Fabric {
    /// Rate captured at write time, if any
    pub fn rate_capture(&self) -> RateCapture {
        match self.fx_usd_per_inr {
            Some(rate) => RateCapture::Captured(rate),
            None => RateCapture::Unavailable,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
