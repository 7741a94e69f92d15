// crates/shared-kernel/src/errors/error_code.rs
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationFailed,
    NotFound,
    AlreadyExists,
    PreconditionFailed,
    ConcurrencyConflict,
    CollaboratorFailure,
    InternalError,
}

impl ErrorCode {
    /// Statut HTTP conseillé pour la couche transport
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ValidationFailed => 400,
            Self::NotFound => 404,
            Self::AlreadyExists | Self::ConcurrencyConflict => 409,
            Self::PreconditionFailed => 412,
            Self::CollaboratorFailure => 502,
            Self::InternalError => 500,
        }
    }
}
