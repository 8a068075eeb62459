// src/integrations/identity/provider.rs
//
// Identity provider seam
//
// The tracker never stores credentials. It asks a provider to sign the
// user in or out and only keeps the resulting session in memory.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// An authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub uid: String,
    pub email: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self) -> AppResult<Session>;
    async fn sign_out(&self) -> AppResult<()>;
}

/// Single-account provider for running the tracker locally
pub struct LocalIdentityProvider {
    account: Session,
}

impl LocalIdentityProvider {
    pub fn new(uid: &str, email: &str) -> AppResult<Self> {
        if uid.trim().is_empty() || email.trim().is_empty() {
            return Err(AppError::Identity(
                "Local account needs both a uid and an email".to_string(),
            ));
        }

        Ok(Self {
            account: Session {
                uid: uid.trim().to_string(),
                email: email.trim().to_string(),
            },
        })
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn sign_in(&self) -> AppResult<Session> {
        Ok(self.account.clone())
    }

    async fn sign_out(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_provider_signs_in_configured_account() {
        let provider = LocalIdentityProvider::new("u-1", "owner@example.com").unwrap();
        let session = provider.sign_in().await.unwrap();
        assert_eq!(session.email, "owner@example.com");
        assert!(provider.sign_out().await.is_ok());
    }

    #[test]
    fn test_local_provider_requires_account() {
        assert!(matches!(
            LocalIdentityProvider::new("", "owner@example.com"),
            Err(AppError::Identity(_))
        ));
    }
}
