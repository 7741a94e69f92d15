// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    #[error("{entity} not found with id '{id}'")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    #[error("{entity} already exists with {field} = '{value}'")]
    AlreadyExists {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// L'état courant interdit l'opération (profil gelé, bloqué par la modération...)
    #[error("Precondition failed: {reason}")]
    PreconditionFailed {
        reason: String,
    },

    /// Sérialisation / deadlock Postgres, seul cas rejoué par `with_retry`
    #[error("Concurrency conflict: {reason}")]
    ConcurrencyConflict {
        reason: String,
    },

    #[error("Operation failed after maximum retries: {0}")]
    TooManyConflicts(String),

    /// Échec d'un collaborateur externe (object store, notification)
    #[error("{service} failure: {reason}")]
    Collaborator {
        service: &'static str,
        reason: String,
    },

    /// Erreur du moteur de stockage
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn is_concurrency_conflict(&self) -> bool {
        matches!(self, Self::ConcurrencyConflict { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    pub fn is_precondition_failed(&self) -> bool {
        matches!(self, Self::PreconditionFailed { .. })
    }

    pub fn precondition(reason: impl Into<String>) -> Self {
        Self::PreconditionFailed { reason: reason.into() }
    }

    pub fn collaborator(service: &'static str, reason: impl ToString) -> Self {
        Self::Collaborator { service, reason: reason.to_string() }
    }
}
