// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($name:ident) => {
        impl DomainEvent for $name {
            fn event_id(&self) -> Uuid {
                self.event_id
            }
            fn occurred_at(&self) -> DateTime<Utc> {
                self.occurred_at
            }
            fn event_type(&self) -> &'static str {
                stringify!($name)
            }
        }
    };
}

// ============================================================================
// CATALOG EVENTS
// ============================================================================

/// A fabric record was written (created or replaced)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FabricSaved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub fabric_id: String,
    /// False when the rate lookup failed and only local costs were stored
    pub rate_captured: bool,
}

impl FabricSaved {
    pub fn new(fabric_id: String, rate_captured: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            fabric_id,
            rate_captured,
        }
    }
}

impl_domain_event!(FabricSaved);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FabricDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub fabric_id: String,
}

impl FabricDeleted {
    pub fn new(fabric_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            fabric_id,
        }
    }
}

impl_domain_event!(FabricDeleted);

/// A design record was written (created or replaced)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignSaved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub design_id: String,
    pub fabric_id: String,
    pub rate_captured: bool,
}

impl DesignSaved {
    pub fn new(design_id: String, fabric_id: String, rate_captured: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            design_id,
            fabric_id,
            rate_captured,
        }
    }
}

impl_domain_event!(DesignSaved);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub design_id: String,
}

impl DesignDeleted {
    pub fn new(design_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            design_id,
        }
    }
}

impl_domain_event!(DesignDeleted);

/// The in-memory snapshot was replaced by a fresh load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogReloaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub fabric_count: usize,
    pub design_count: usize,
}

impl CatalogReloaded {
    pub fn new(fabric_count: usize, design_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            fabric_count,
            design_count,
        }
    }
}

impl_domain_event!(CatalogReloaded);

// ============================================================================
// SESSION EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub uid: String,
    pub email: String,
}

impl SessionStarted {
    pub fn new(uid: String, email: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            uid,
            email,
        }
    }
}

impl_domain_event!(SessionStarted);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEnded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl SessionEnded {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for SessionEnded {
    fn default() -> Self {
        Self::new()
    }
}

impl_domain_event!(SessionEnded);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names() {
        assert_eq!(FabricSaved::new("F1".into(), true).event_type(), "FabricSaved");
        assert_eq!(CatalogReloaded::new(1, 2).event_type(), "CatalogReloaded");
        assert_eq!(SessionEnded::new().event_type(), "SessionEnded");
    }

    #[test]
    fn test_event_ids_are_unique() {
        let a = DesignDeleted::new("D1".into());
        let b = DesignDeleted::new("D1".into());
        assert_ne!(a.event_id(), b.event_id());
    }
}
