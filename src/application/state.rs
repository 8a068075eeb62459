// src/application/state.rs

use std::sync::{Arc, RwLock};

use crate::application::status;
use crate::error::{AppError, AppResult};
use crate::events::{CatalogReloaded, EventBus};
use crate::integrations::Session;
use crate::services::{CatalogService, SessionService};

/// Application state shared by every command.
/// All fields are Arc-wrapped for thread-safe sharing across commands.
/// Services are built in `app::bootstrap` and passed here.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub catalog: Arc<CatalogService>,
    pub session: Arc<SessionService>,
    status: Arc<RwLock<String>>,
}

impl AppState {
    /// Ties the catalog to the session: signing in loads both collections,
    /// signing out drops the snapshot.
    pub fn new(
        event_bus: Arc<EventBus>,
        catalog: Arc<CatalogService>,
        session: Arc<SessionService>,
    ) -> Self {
        let status = Arc::new(RwLock::new(status::SIGNED_OUT.to_string()));

        // Any successful reload means the tables show stored data again
        let reload_status = status.clone();
        event_bus.subscribe::<CatalogReloaded, _>(move |event| {
            log::debug!(
                "Catalog now holds {} fabrics and {} designs",
                event.fabric_count,
                event.design_count
            );
            *reload_status.write().unwrap_or_else(|e| e.into_inner()) =
                status::LOADED.to_string();
        });

        let listener_catalog = catalog.clone();
        let listener_status = status.clone();
        session.on_session_change(move |current| {
            let set_status = |text: String| {
                *listener_status.write().unwrap_or_else(|e| e.into_inner()) = text;
            };

            match current {
                None => {
                    listener_catalog.clear();
                    set_status(status::SIGNED_OUT.to_string());
                }
                Some(session) => {
                    set_status(status::loading(&session.email));
                    if let Err(e) = listener_catalog.load_all() {
                        log::error!("Failed to load catalog for {}: {}", session.email, e);
                        set_status(status::LOAD_FAILED.to_string());
                    }
                }
            }
        });

        Self {
            event_bus,
            catalog,
            session,
            status,
        }
    }

    pub fn status_text(&self) -> String {
        self.status
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Data commands run only for a signed-in user
    pub fn require_session(&self) -> AppResult<Session> {
        self.session.current().ok_or(AppError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, initialize_database};
    use crate::infrastructure::FixedClock;
    use crate::integrations::frankfurter::client::MockRateProvider;
    use crate::integrations::identity::provider::MockIdentityProvider;
    use crate::repositories::fabric_repository::MockFabricRepository;
    use crate::repositories::{
        DocumentDesignRepository, DocumentFabricRepository, FabricRepository, SqliteDocumentStore,
    };
    use chrono::NaiveDate;

    fn state_with(fabric_repo: Option<Arc<dyn FabricRepository>>) -> AppState {
        let pool = create_memory_pool().unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();
        let store = Arc::new(SqliteDocumentStore::new(Arc::new(pool)));
        let fabric_repo = fabric_repo.unwrap_or_else(|| -> Arc<dyn FabricRepository> {
            Arc::new(DocumentFabricRepository::new(store.clone()))
        });

        let mut identity = MockIdentityProvider::new();
        identity.expect_sign_in().returning(|| {
            Ok(Session {
                uid: "u-1".to_string(),
                email: "owner@example.com".to_string(),
            })
        });

        let bus = Arc::new(EventBus::new());
        let catalog = Arc::new(CatalogService::new(
            fabric_repo,
            Arc::new(DocumentDesignRepository::new(store)),
            Arc::new(MockRateProvider::new()),
            Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())),
            bus.clone(),
        ));
        let session = Arc::new(SessionService::new(Arc::new(identity), bus.clone()));

        AppState::new(bus, catalog, session)
    }

    #[tokio::test]
    async fn test_sign_in_loads_catalog_and_reports_loaded() {
        let state = state_with(None);
        assert_eq!(state.status_text(), status::SIGNED_OUT);
        assert_eq!(state.event_bus.subscriber_count::<CatalogReloaded>(), 1);

        state.session.sign_in().await.unwrap();

        assert_eq!(state.status_text(), status::LOADED);
        assert!(state.require_session().is_ok());
    }

    #[tokio::test]
    async fn test_failed_load_then_reload_restores_status() {
        let mut fabric_repo = MockFabricRepository::new();
        fabric_repo
            .expect_list_all()
            .times(1)
            .returning(|| Err(AppError::Pool("unavailable".to_string())));
        fabric_repo.expect_list_all().returning(|| Ok(Vec::new()));
        fabric_repo.expect_delete().returning(|_| Ok(()));

        let state = state_with(Some(Arc::new(fabric_repo)));
        state.session.sign_in().await.unwrap();
        assert_eq!(state.status_text(), status::LOAD_FAILED);

        state.catalog.delete_fabric("F9").unwrap();
        assert_eq!(state.status_text(), status::LOADED);
    }

    #[test]
    fn test_commands_need_a_session() {
        let state = state_with(None);
        assert!(matches!(state.require_session(), Err(AppError::Unauthenticated)));
    }
}
