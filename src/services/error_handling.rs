use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Custom error types with descriptive messages
#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("Contact not found: {id}")]
    ContactNotFound { id: Uuid },

    #[error("Validation failed for {field}: {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Remote operation failed: {operation}")]
    RemoteError {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("No signed-in identity")]
    NotSignedIn,
}

impl RolodexError {
    pub fn remote(operation: impl Into<String>, source: anyhow::Error) -> Self {
        Self::RemoteError {
            operation: operation.into(),
            source,
        }
    }
}

/// Structured logging helpers
pub struct LogHelper;

impl LogHelper {
    pub fn log_contact_operation(operation: &str, contact_id: Option<Uuid>, success: bool) {
        let contact_id = contact_id.map(|id| id.to_string()).unwrap_or_default();
        if success {
            info!(
                contact_id = %contact_id,
                operation = %operation,
                "Contact operation completed successfully"
            );
        } else {
            error!(
                contact_id = %contact_id,
                operation = %operation,
                "Contact operation failed"
            );
        }
    }

    pub fn log_error_with_context(context: &str, error: &RolodexError) {
        let chain: Vec<String> = std::iter::successors(
            Some(error as &(dyn std::error::Error + 'static)),
            |e| e.source(),
        )
        .map(|e| e.to_string())
        .collect();
        error!(
            context = %context,
            error = %error,
            error_chain = ?chain,
            "Error occurred"
        );
    }

    pub fn log_skipped(operation: &str, reason: &str) {
        debug!(operation = %operation, reason = %reason, "Operation skipped");
    }

    pub fn log_ignored_failure(operation: &str, error: &anyhow::Error) {
        warn!(operation = %operation, error = %error, "Failure ignored");
    }
}
