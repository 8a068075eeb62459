// src/integrations/mod.rs
//
// External Integrations Module
//
// - frankfurter: exchange-rate lookups
// - identity: sign-in / sign-out

pub mod frankfurter;
pub mod identity;

pub use frankfurter::{FrankfurterClient, LookupError, RateProvider};
pub use identity::{IdentityProvider, LocalIdentityProvider, Session};
