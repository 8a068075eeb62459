// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for UI
// - Never exposes internal implementation details
// - Logs errors for debugging

use serde::{Deserialize, Serialize};

use crate::application::status::SIGNED_OUT;
use crate::domain::DomainError;
use crate::error::AppError;

pub const FABRIC_FORM_ALERT: &str = "Please fill Fabric ID, Name, Meters, and Cost/m.";

pub const DESIGN_FORM_ALERT: &str =
    "Please fill Design ID, Name, Fabric, at least one size quantity, and Fabric per Piece.";

pub const LOGOUT_FAILED_ALERT: &str = "Logout failed.";

pub const FABRIC_IN_USE_ALERT: &str =
    "This fabric is used in one or more designs. Delete those designs first, then delete the fabric.";

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Missing or non-numeric form input (400)
    Validation,

    /// Fabric still referenced by designs (409)
    Referential,

    /// Domain invariant violation (422)
    DomainError,

    /// No signed-in user (401)
    Unauthenticated,

    /// Store read/write failure (500)
    Database,

    /// Identity provider failure (502)
    ExternalService,

    /// Unreadable configuration (500)
    Configuration,

    /// File system error (500)
    FileSystem,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Domain(DomainError::Validation(message)) => Self::validation(message),

            AppError::Domain(DomainError::Referential { design_ids, .. }) => Self {
                success: false,
                error_type: ErrorType::Referential,
                message: FABRIC_IN_USE_ALERT.to_string(),
                details: Some(design_ids.join(", ")),
            },

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: "Domain validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::Unauthenticated => Self {
                success: false,
                error_type: ErrorType::Unauthenticated,
                message: SIGNED_OUT.to_string(),
                details: None,
            },

            error @ (AppError::Database(_) | AppError::Pool(_) | AppError::Serialization(_)) => {
                log::error!("Store operation failed: {:?}", error);

                Self {
                    success: false,
                    error_type: ErrorType::Database,
                    message: "Operation failed".to_string(),
                    details: Some("Check logs for details".to_string()),
                }
            }

            AppError::Identity(message) => {
                log::warn!("Identity provider error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::ExternalService,
                    message: format!("Login failed: {}", message),
                    details: None,
                }
            }

            AppError::Config(message) => {
                log::error!("Configuration error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Configuration,
                    message: "Configuration could not be read".to_string(),
                    details: Some(message),
                }
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);

                Self {
                    success: false,
                    error_type: ErrorType::FileSystem,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message,
                    details: None,
                }
            }
        }
    }

    /// Like `from_app_error`, but a validation failure shows the form's alert
    /// and keeps the field-level reason as details
    pub fn for_form(error: AppError, alert: &str) -> Self {
        match error {
            AppError::Domain(DomainError::Validation(reason)) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: alert.to_string(),
                details: Some(reason),
            },
            other => Self::from_app_error(other),
        }
    }

    /// Identity failures while signing out get their own alert;
    /// everything else maps as usual
    pub fn for_sign_out(error: AppError) -> Self {
        match error {
            AppError::Identity(reason) => {
                log::warn!("Sign-out failed: {}", reason);

                Self {
                    success: false,
                    error_type: ErrorType::ExternalService,
                    message: LOGOUT_FAILED_ALERT.to_string(),
                    details: Some(reason),
                }
            }
            other => Self::from_app_error(other),
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, ErrorResponse>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, ErrorResponse> {
        self.map_err(ErrorResponse::from_app_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_uses_form_alert() {
        let error = ErrorResponse::for_form(
            DomainError::Validation("Meters must be a number".to_string()).into(),
            FABRIC_FORM_ALERT,
        );
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.message, FABRIC_FORM_ALERT);
        assert_eq!(error.details.as_deref(), Some("Meters must be a number"));
    }

    #[test]
    fn test_referential_error() {
        let error = ErrorResponse::from_app_error(
            DomainError::Referential {
                fabric_id: "F1".to_string(),
                design_ids: vec!["D1".to_string(), "D2".to_string()],
            }
            .into(),
        );
        assert_eq!(error.error_type, ErrorType::Referential);
        assert_eq!(error.message, FABRIC_IN_USE_ALERT);
        assert_eq!(error.details.as_deref(), Some("D1, D2"));
    }

    #[test]
    fn test_identity_errors_name_the_failed_action() {
        let login = ErrorResponse::from_app_error(AppError::Identity("popup closed".to_string()));
        assert_eq!(login.message, "Login failed: popup closed");

        let logout = ErrorResponse::for_sign_out(AppError::Identity("network".to_string()));
        assert_eq!(logout.error_type, ErrorType::ExternalService);
        assert_eq!(logout.message, LOGOUT_FAILED_ALERT);
        assert_eq!(logout.details.as_deref(), Some("network"));
    }

    #[test]
    fn test_persistence_errors_hide_internals() {
        let error = ErrorResponse::from_app_error(AppError::Pool("timed out".to_string()));
        assert_eq!(error.error_type, ErrorType::Database);
        assert_eq!(error.message, "Operation failed");
    }

    #[test]
    fn test_unauthenticated_error() {
        let error = ErrorResponse::from_app_error(AppError::Unauthenticated);
        assert_eq!(error.error_type, ErrorType::Unauthenticated);
        assert_eq!(error.message, SIGNED_OUT);
    }

    #[test]
    fn test_serialization() {
        let error = ErrorResponse::from_app_error(AppError::Unauthenticated);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"unauthenticated\""));
        assert!(json.contains("\"success\":false"));
    }
}
