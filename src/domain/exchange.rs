// src/domain/exchange.rs
//
// Exchange rate capture
//
// A record either captured a USD-per-INR rate at write time or it did not.
// There is no third state: a captured rate always carries its converted
// amount, an unavailable rate carries none.

use serde::{Deserialize, Serialize};

/// Currency the base costs are entered in
pub const LOCAL_CURRENCY: &str = "INR";

/// Currency the captured rate converts into
pub const FOREIGN_CURRENCY: &str = "USD";

/// Outcome of the best-effort rate lookup performed on every write
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "rate", rename_all = "snake_case")]
pub enum RateCapture {
    /// Lookup succeeded; USD for 1 INR
    Captured(f64),

    /// Lookup failed; the record is stored in local currency only
    Unavailable,
}

impl RateCapture {
    pub fn rate(&self) -> Option<f64> {
        match self {
            RateCapture::Captured(rate) => Some(*rate),
            RateCapture::Unavailable => None,
        }
    }

    /// Convert a local amount, or `None` when no rate was captured
    pub fn convert(&self, amount_local: f64) -> Option<f64> {
        self.rate().map(|rate| amount_local * rate)
    }

    pub fn is_captured(&self) -> bool {
        matches!(self, RateCapture::Captured(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_rate_converts() {
        let capture = RateCapture::Captured(0.5);
        assert_eq!(capture.rate(), Some(0.5));
        assert_eq!(capture.convert(10.0), Some(5.0));
        assert!(capture.is_captured());
    }

    #[test]
    fn test_unavailable_rate_never_converts_to_zero() {
        let capture = RateCapture::Unavailable;
        assert_eq!(capture.rate(), None);
        assert_eq!(capture.convert(10.0), None);
        assert!(!capture.is_captured());
    }
}
