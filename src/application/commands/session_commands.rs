// src/application/commands/session_commands.rs

use crate::application::error_handling::{ErrorResponse, ToErrorResponse};
use crate::application::{dto::SessionDto, state::AppState};

pub async fn sign_in(state: &AppState) -> Result<SessionDto, ErrorResponse> {
    let session = state.session.sign_in().await.to_error_response()?;
    Ok(SessionDto::from(session))
}

pub async fn sign_out(state: &AppState) -> Result<(), ErrorResponse> {
    state
        .session
        .sign_out()
        .await
        .map_err(ErrorResponse::for_sign_out)
}

pub async fn current_session(state: &AppState) -> Option<SessionDto> {
    state.session.current().map(SessionDto::from)
}

/// The line shown above the tracker
pub async fn status_text(state: &AppState) -> String {
    state.status_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::assemble;
    use crate::application::error_handling::{ErrorType, LOGOUT_FAILED_ALERT};
    use crate::db::create_memory_pool;
    use crate::error::AppError;
    use crate::infrastructure::FixedClock;
    use crate::integrations::frankfurter::client::MockRateProvider;
    use crate::integrations::identity::provider::MockIdentityProvider;
    use crate::integrations::Session;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn state_with(identity: MockIdentityProvider) -> AppState {
        assemble(
            create_memory_pool().unwrap(),
            Arc::new(MockRateProvider::new()),
            Arc::new(identity),
            Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())),
        )
        .unwrap()
    }

    fn owner() -> Session {
        Session {
            uid: "u-1".to_string(),
            email: "owner@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_failed_sign_out_reports_logout_failure() {
        let mut identity = MockIdentityProvider::new();
        identity.expect_sign_in().returning(|| Ok(owner()));
        identity
            .expect_sign_out()
            .returning(|| Err(AppError::Identity("network".to_string())));
        let state = state_with(identity);

        sign_in(&state).await.unwrap();
        let err = sign_out(&state).await.unwrap_err();

        assert_eq!(err.error_type, ErrorType::ExternalService);
        assert_eq!(err.message, LOGOUT_FAILED_ALERT);
        assert!(current_session(&state).await.is_some());
    }

    #[tokio::test]
    async fn test_failed_sign_in_reports_login_failure() {
        let mut identity = MockIdentityProvider::new();
        identity
            .expect_sign_in()
            .returning(|| Err(AppError::Identity("popup closed".to_string())));
        let state = state_with(identity);

        let err = sign_in(&state).await.unwrap_err();

        assert_eq!(err.message, "Login failed: popup closed");
        assert!(current_session(&state).await.is_none());
    }
}
