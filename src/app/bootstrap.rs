// src/app/bootstrap.rs
//
// Application wiring
//
// Builds the whole object graph a UI shell needs:
//   pool → document store → repositories → services → AppState
//
// CRITICAL RULES:
// - Schema is initialised before any repository is handed out
// - Every collaborator is injected as `Arc<dyn Trait>`
// - Nothing here signs anyone in

use std::sync::Arc;

use crate::application::AppState;
use crate::config::AppConfig;
use crate::db::{
    create_connection_pool, get_database_stats, initialize_database, verify_database_integrity,
    ConnectionPool,
};
use crate::error::AppResult;
use crate::events::create_event_bus;
use crate::infrastructure::{Clock, SystemClock};
use crate::integrations::{FrankfurterClient, IdentityProvider, LocalIdentityProvider, RateProvider};
use crate::repositories::{
    DesignRepository, DocumentDesignRepository, DocumentFabricRepository, DocumentStore,
    FabricRepository, SqliteDocumentStore,
};
use crate::services::{CatalogService, SessionService};

/// Wire the application from configuration
pub fn build_app_state(config: &AppConfig) -> AppResult<AppState> {
    log::info!("Opening database at {}", config.database_path.display());
    let pool = create_connection_pool(&config.database_path)?;

    let rates: Arc<dyn RateProvider> = Arc::new(FrankfurterClient::new(&config.fx_base_url)?);
    let identity: Arc<dyn IdentityProvider> = Arc::new(LocalIdentityProvider::new(
        &config.account_uid,
        &config.account_email,
    )?);

    assemble(pool, rates, identity, Arc::new(SystemClock))
}

/// Wire the application around explicit collaborators
pub fn assemble(
    pool: ConnectionPool,
    rates: Arc<dyn RateProvider>,
    identity: Arc<dyn IdentityProvider>,
    clock: Arc<dyn Clock>,
) -> AppResult<AppState> {
    // 1. INFRASTRUCTURE
    {
        let conn = pool.get()?;
        initialize_database(&conn)?;
        verify_database_integrity(&conn)?;

        let stats = get_database_stats(&conn)?;
        log::info!(
            "Database ready: {} fabrics, {} designs, {} bytes",
            stats.fabric_count,
            stats.design_count,
            stats.size_bytes
        );
    }
    let pool = Arc::new(pool);
    let event_bus = Arc::new(create_event_bus());

    // 2. REPOSITORIES
    let store: Arc<dyn DocumentStore> = Arc::new(SqliteDocumentStore::new(pool));
    let fabric_repo: Arc<dyn FabricRepository> =
        Arc::new(DocumentFabricRepository::new(store.clone()));
    let design_repo: Arc<dyn DesignRepository> = Arc::new(DocumentDesignRepository::new(store));

    // 3. SERVICES
    let catalog = Arc::new(CatalogService::new(
        fabric_repo,
        design_repo,
        rates,
        clock,
        event_bus.clone(),
    ));
    let session = Arc::new(SessionService::new(identity, event_bus.clone()));

    // 4. APPLICATION STATE
    Ok(AppState::new(event_bus, catalog, session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::status;

    #[test]
    fn test_build_from_config_starts_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            database_path: dir.path().join("nested").join("tracker.db"),
            ..AppConfig::default()
        };

        let state = build_app_state(&config).unwrap();

        assert!(config.database_path.exists());
        assert!(state.session.current().is_none());
        assert_eq!(state.status_text(), status::SIGNED_OUT);
        assert!(state.catalog.list_fabrics().is_empty());
    }

    #[test]
    fn test_bad_account_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            database_path: dir.path().join("tracker.db"),
            account_email: "  ".to_string(),
            ..AppConfig::default()
        };

        assert!(build_app_state(&config).is_err());
    }
}
