use async_graphql::*;

use crate::errors::CoreError;

/// Structured error builder for consistent error handling
pub struct StructuredError;

impl StructuredError {
    /// Create a "not found" error carrying the entity and id
    pub fn not_found(entity: &str, id: i32, message: impl Into<String>) -> Error {
        Error::new(message.into()).extend_with(|_, e| {
            e.set("code", "NOT_FOUND");
            e.set("entity", entity);
            e.set("id", id);
        })
    }

    /// Create a "database error"
    pub fn database(cause: impl std::fmt::Display) -> Error {
        Error::new(format!("Database error: {}", cause)).extend_with(|_, e| {
            e.set("code", "DATABASE_ERROR");
        })
    }

    /// Create a "service error"
    pub fn service(service: &str, cause: impl std::fmt::Display) -> Error {
        Error::new(format!("Service '{}' error: {}", service, cause)).extend_with(|_, e| {
            e.set("code", "SERVICE_ERROR");
            e.set("service", service);
        })
    }

    /// Create an "internal error"
    pub fn internal(message: impl Into<String>) -> Error {
        Error::new(message.into()).extend_with(|_, e| {
            e.set("code", "INTERNAL_ERROR");
        })
    }
}

pub fn core_error_to_graphql_error(err: CoreError) -> Error {
    let message = err.to_string();
    match err {
        CoreError::NotFound { entity, id } => StructuredError::not_found(&entity, id, message),
        CoreError::Unavailable { service, message } => {
            StructuredError::service(&service, message)
        }
        CoreError::Database(cause) => StructuredError::database(cause),
        CoreError::Internal(cause) => StructuredError::internal(cause.to_string()),
    }
}
