pub mod client;

pub use client::{FrankfurterClient, LookupError, RateProvider, DEFAULT_BASE_URL};
