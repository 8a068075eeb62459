// src/services/session_service.rs
//
// Session Gate - tracks who is signed in
//
// RULES:
// - Exactly one of signed-in / signed-out at any time
// - Listeners see the current state immediately on registration
// - Every transition is delivered to every listener, in order

use std::sync::{Arc, RwLock};

use crate::error::AppResult;
use crate::events::{EventBus, SessionEnded, SessionStarted};
use crate::integrations::{IdentityProvider, Session};

type SessionListener = Arc<dyn Fn(Option<&Session>) + Send + Sync>;

pub struct SessionService {
    provider: Arc<dyn IdentityProvider>,
    event_bus: Arc<EventBus>,
    current: RwLock<Option<Session>>,
    listeners: RwLock<Vec<SessionListener>>,
}

impl SessionService {
    pub fn new(provider: Arc<dyn IdentityProvider>, event_bus: Arc<EventBus>) -> Self {
        Self {
            provider,
            event_bus,
            current: RwLock::new(None),
            listeners: RwLock::new(Vec::new()),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current().is_some()
    }

    /// Register a listener. It is called right away with the current state.
    pub fn on_session_change<F>(&self, listener: F)
    where
        F: Fn(Option<&Session>) + Send + Sync + 'static,
    {
        let listener: SessionListener = Arc::new(listener);
        let current = self.current();
        listener(current.as_ref());

        self.listeners
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(listener);
    }

    pub async fn sign_in(&self) -> AppResult<Session> {
        let session = self.provider.sign_in().await.inspect_err(|e| {
            log::warn!("Sign-in failed: {}", e);
        })?;

        log::info!("Signed in as {}", session.email);
        self.transition(Some(session.clone()));
        self.event_bus
            .emit(SessionStarted::new(session.uid.clone(), session.email.clone()));

        Ok(session)
    }

    /// Signing out while already signed out is a no-op
    pub async fn sign_out(&self) -> AppResult<()> {
        if !self.is_signed_in() {
            return Ok(());
        }

        self.provider.sign_out().await.inspect_err(|e| {
            log::warn!("Sign-out failed: {}", e);
        })?;

        log::info!("Signed out");
        self.transition(None);
        self.event_bus.emit(SessionEnded::new());

        Ok(())
    }

    fn transition(&self, next: Option<Session>) {
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = next.clone();

        // Snapshot the list so a listener may register another one
        let listeners: Vec<SessionListener> = self
            .listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();

        for listener in listeners {
            listener(next.as_ref());
        }
    }
}
