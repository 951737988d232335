//! Error types shared by the record stores, collaborators and the GraphQL layer.
//!
//! Services return [`CoreResult`]; the GraphQL layer maps each [`CoreErrorKind`]
//! onto a structured error code (see `graphql::errors`).

use sea_orm::DbErr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CoreErrorKind {
    NotFound,
    Unavailable,
    Database,
    Internal,
}

#[derive(Error, Debug)]
pub enum CoreError {
    /// No record with the given primary key
    #[error("No {entity} found for id {id}")]
    NotFound { entity: String, id: i32 },

    /// An external collaborator (launcher, takeover controller) failed
    #[error("{service} unavailable: {message}")]
    Unavailable { service: String, message: String },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl CoreError {
    pub fn not_found(entity: impl Into<String>, id: i32) -> Self {
        CoreError::NotFound {
            entity: entity.into(),
            id,
        }
    }

    pub fn unavailable(service: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        CoreError::Unavailable {
            service: service.into(),
            message: cause.to_string(),
        }
    }

    pub fn kind(&self) -> CoreErrorKind {
        match self {
            CoreError::NotFound { .. } => CoreErrorKind::NotFound,
            CoreError::Unavailable { .. } => CoreErrorKind::Unavailable,
            CoreError::Database(_) => CoreErrorKind::Database,
            CoreError::Internal(_) => CoreErrorKind::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == CoreErrorKind::NotFound
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Outcome of a find-then-destroy sequence.
///
/// Keeps "nothing to delete" apart from a store failure so callers can
/// report them differently.
#[derive(Debug)]
pub enum DeleteOutcome<T> {
    Deleted(T),
    NotFound,
    Failed(CoreError),
}

impl<T> DeleteOutcome<T> {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted(_))
    }

    pub fn map<U, F>(self, f: F) -> DeleteOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            DeleteOutcome::Deleted(model) => DeleteOutcome::Deleted(f(model)),
            DeleteOutcome::NotFound => DeleteOutcome::NotFound,
            DeleteOutcome::Failed(err) => DeleteOutcome::Failed(err),
        }
    }

    pub fn into_model(self) -> Option<T> {
        match self {
            DeleteOutcome::Deleted(model) => Some(model),
            _ => None,
        }
    }
}
