use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Already exists: {0}")]
    Conflict(String),

    /// Policy or shape failure. The message is shown to the caller as-is.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("{entity} {value} was modified concurrently, reload and retry")]
    StaleWrite { entity: &'static str, value: String },

    #[error("Storage error during {operation}: {message}")]
    Storage {
        operation: &'static str,
        message: String,
    },

    /// Hashing or signing failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }

    /// Wraps a persistence failure with the name of the operation that hit it.
    pub fn storage(operation: &'static str) -> impl FnOnce(sea_orm::DbErr) -> Self {
        move |e| Self::Storage {
            operation,
            message: e.to_string(),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_verbatim() {
        let err = DomainError::Validation("Password must be at least 6 characters".into());
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }

    #[test]
    fn storage_error_names_operation_only() {
        let err = DomainError::storage("update cell")(sea_orm::DbErr::Custom("disk full".into()));
        let text = err.to_string();
        assert!(text.contains("update cell"));
        assert!(matches!(err, DomainError::Storage { operation: "update cell", .. }));
    }
}
