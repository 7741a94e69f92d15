// crates/shared-kernel/src/errors/result.rs

use crate::errors::{AppError, DomainError};

/// Result du domaine : repositories, use cases, sagas.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Result exposé à la couche transport.
pub type AppResult<T> = std::result::Result<T, AppError>;
