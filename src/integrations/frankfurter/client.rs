// src/integrations/frankfurter/client.rs
//
// Frankfurter exchange-rate API - Currency Enrichment Service
//
// ARCHITECTURE:
// - One GET per lookup: {base_url}/{YYYY-MM-DD}?from=INR&to=USD
// - Returns USD for 1 INR on that date
// - No retries, no caching: every call is independent
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never touches records; the catalog decides what a failure means

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{FOREIGN_CURRENCY, LOCAL_CURRENCY};
use crate::error::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.dev";

/// The rate could not be obtained
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("FX request failed: {0}")]
    Request(String),

    #[error("FX fetch failed: {0}")]
    Status(StatusCode),

    #[error("FX response could not be decoded: {0}")]
    Decode(String),

    #[error("FX rate {0} not found in response")]
    MissingRate(&'static str),
}

/// Source of local-to-foreign conversion rates
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// USD for 1 INR on `date`
    async fn rate_for_date(&self, date: NaiveDate) -> Result<f64, LookupError>;
}

/// Body of a Frankfurter rates response
#[derive(Debug, Deserialize)]
struct RatesResponse {
    #[serde(default)]
    rates: HashMap<String, f64>,
}

pub struct FrankfurterClient {
    base_url: String,
    http_client: Client,
}

impl FrankfurterClient {
    pub fn new(base_url: &str) -> AppResult<Self> {
        let http_client = Client::builder()
            .user_agent(concat!("garment-tracker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_http_client(base_url, http_client))
    }

    /// Use a preconfigured reqwest client
    pub fn with_http_client(base_url: &str, http_client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    /// Endpoint for one date
    pub fn rate_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/{}?from={}&to={}",
            self.base_url,
            date.format("%Y-%m-%d"),
            LOCAL_CURRENCY,
            FOREIGN_CURRENCY
        )
    }

    /// Pull the USD rate out of a decoded response.
    /// Zero, negative or non-finite rates count as missing.
    fn extract_rate(response: &RatesResponse) -> Result<f64, LookupError> {
        response
            .rates
            .get(FOREIGN_CURRENCY)
            .copied()
            .filter(|rate| rate.is_finite() && *rate > 0.0)
            .ok_or(LookupError::MissingRate(FOREIGN_CURRENCY))
    }
}

#[async_trait]
impl RateProvider for FrankfurterClient {
    async fn rate_for_date(&self, date: NaiveDate) -> Result<f64, LookupError> {
        let url = self.rate_url(date);
        log::debug!("Fetching exchange rate: {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| LookupError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        let body: RatesResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))?;

        Self::extract_rate(&body)
    }
}
