use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::exchange::RateCapture;

/// Fixed size labels, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeLabel {
    XS,
    S,
    M,
    L,
    XL,
}

impl SizeLabel {
    pub const ALL: [SizeLabel; 5] = [
        SizeLabel::XS,
        SizeLabel::S,
        SizeLabel::M,
        SizeLabel::L,
        SizeLabel::XL,
    ];
}

impl std::fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeLabel::XS => write!(f, "XS"),
            SizeLabel::S => write!(f, "S"),
            SizeLabel::M => write!(f, "M"),
            SizeLabel::L => write!(f, "L"),
            SizeLabel::XL => write!(f, "XL"),
        }
    }
}

/// Quantity ordered per size; missing labels read as zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRun {
    #[serde(rename = "XS", default)]
    pub xs: u32,
    #[serde(rename = "S", default)]
    pub s: u32,
    #[serde(rename = "M", default)]
    pub m: u32,
    #[serde(rename = "L", default)]
    pub l: u32,
    #[serde(rename = "XL", default)]
    pub xl: u32,
}

impl SizeRun {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (SizeLabel, u32)>,
    {
        let mut run = SizeRun::default();
        for (label, quantity) in pairs {
            run.set(label, quantity);
        }
        run
    }

    pub fn get(&self, label: SizeLabel) -> u32 {
        match label {
            SizeLabel::XS => self.xs,
            SizeLabel::S => self.s,
            SizeLabel::M => self.m,
            SizeLabel::L => self.l,
            SizeLabel::XL => self.xl,
        }
    }

    pub fn set(&mut self, label: SizeLabel, quantity: u32) {
        match label {
            SizeLabel::XS => self.xs = quantity,
            SizeLabel::S => self.s = quantity,
            SizeLabel::M => self.m = quantity,
            SizeLabel::L => self.l = quantity,
            SizeLabel::XL => self.xl = quantity,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SizeLabel, u32)> + '_ {
        SizeLabel::ALL.iter().map(move |label| (*label, self.get(*label)))
    }

    /// Total pieces across all sizes
    pub fn pieces(&self) -> u32 {
        self.iter()
            .fold(0u32, |total, (_, quantity)| total.saturating_add(quantity))
    }
}

/// A garment design as stored in the `designs` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub id: String,

    pub name: String,

    /// Soft reference into the fabrics collection
    pub fabric_id: String,

    #[serde(default)]
    pub sizes: SizeRun,

    /// Sum of `sizes`, stored alongside them
    #[serde(default)]
    pub pieces: u32,

    /// Meters of fabric consumed per piece
    pub fabric_per_piece: f64,

    /// Overhead, trims and labour in local currency
    #[serde(default)]
    pub other_cost: f64,

    pub fx_date: NaiveDate,

    #[serde(default)]
    pub fx_usd_per_inr: Option<f64>,

    #[serde(default)]
    pub other_cost_usd: Option<f64>,
}

/// Design as submitted by the form, before enrichment
#[derive(Debug, Clone, PartialEq)]
pub struct DesignDraft {
    pub id: String,
    pub name: String,
    pub fabric_id: String,
    pub sizes: SizeRun,
    pub fabric_per_piece: Option<f64>,
    pub other_cost: f64,
}

impl DesignDraft {
    pub fn new(
        id: &str,
        name: &str,
        fabric_id: &str,
        sizes: SizeRun,
        fabric_per_piece: Option<f64>,
        other_cost: f64,
    ) -> Self {
        Self {
            id: id.trim().to_string(),
            name: name.trim().to_string(),
            fabric_id: fabric_id.trim().to_string(),
            sizes,
            fabric_per_piece,
            other_cost,
        }
    }

    pub fn pieces(&self) -> u32 {
        self.sizes.pieces()
    }

    /// Attach the enrichment fields and produce the record to persist.
    ///
    /// Callers validate first; a missing `fabric_per_piece` is stored as 0.
    pub fn into_design(self, fx_date: NaiveDate, capture: RateCapture) -> Design {
        let pieces = self.pieces();
        let other_cost_usd = capture.convert(self.other_cost);

        Design {
            id: self.id,
            name: self.name,
            fabric_id: self.fabric_id,
            sizes: self.sizes,
            pieces,
            fabric_per_piece: self.fabric_per_piece.unwrap_or(0.0),
            other_cost: self.other_cost,
            fx_date,
            fx_usd_per_inr: capture.rate(),
            other_cost_usd,
        }
    }
}

impl Design {
    pub fn rate_capture(&self) -> RateCapture {
        match self.fx_usd_per_inr {
            Some(rate) => RateCapture::Captured(rate),
            None => RateCapture::Unavailable,
        }
    }

    /// Sizes rendered as `"M:5 L:5"`, zero quantities omitted
    pub fn size_summary(&self) -> String {
        self.sizes
            .iter()
            .filter(|(_, quantity)| *quantity > 0)
            .map(|(label, quantity)| format!("{}:{}", label, quantity))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_pieces_is_sum_of_sizes() {
        let sizes = SizeRun::from_pairs([(SizeLabel::M, 5), (SizeLabel::L, 5)]);
        assert_eq!(sizes.pieces(), 10);

        let sizes = SizeRun::from_pairs([
            (SizeLabel::XS, 1),
            (SizeLabel::S, 2),
            (SizeLabel::M, 3),
            (SizeLabel::L, 4),
            (SizeLabel::XL, 5),
        ]);
        assert_eq!(sizes.pieces(), 15);
    }

    #[test]
    fn test_empty_run_has_no_pieces() {
        assert_eq!(SizeRun::default().pieces(), 0);
    }

    #[test]
    fn test_into_design_records_pieces_and_other_cost_usd() {
        let sizes = SizeRun::from_pairs([(SizeLabel::M, 5), (SizeLabel::L, 5)]);
        let draft = DesignDraft::new("D1", "Kurta", "F1", sizes, Some(1.5), 200.0);
        let design = draft.into_design(date(), RateCapture::Captured(0.012));

        assert_eq!(design.pieces, 10);
        assert_eq!(design.fx_usd_per_inr, Some(0.012));
        assert!((design.other_cost_usd.unwrap() - 2.4).abs() < 1e-9);
    }

    #[test]
    fn test_into_design_without_rate() {
        let sizes = SizeRun::from_pairs([(SizeLabel::S, 2)]);
        let draft = DesignDraft::new("D2", "Shirt", "F1", sizes, Some(1.0), 50.0);
        let design = draft.into_design(date(), RateCapture::Unavailable);

        assert_eq!(design.fx_usd_per_inr, None);
        assert_eq!(design.other_cost_usd, None);
        assert_eq!(design.fx_date, date());
    }

    #[test]
    fn test_size_summary() {
        let sizes = SizeRun::from_pairs([(SizeLabel::XS, 0), (SizeLabel::M, 5), (SizeLabel::XL, 2)]);
        let design = DesignDraft::new("D1", "Kurta", "F1", sizes, Some(1.0), 0.0)
            .into_design(date(), RateCapture::Unavailable);
        assert_eq!(design.size_summary(), "M:5 XL:2");
    }

    #[test]
    fn test_sizes_document_uses_labels() {
        let sizes = SizeRun::from_pairs([(SizeLabel::M, 5)]);
        let json = serde_json::to_value(sizes).unwrap();
        assert_eq!(json["M"], 5);
        assert_eq!(json["XS"], 0);

        let partial: SizeRun = serde_json::from_str(r#"{"L": 3}"#).unwrap();
        assert_eq!(partial.l, 3);
        assert_eq!(partial.pieces(), 3);
    }
}
