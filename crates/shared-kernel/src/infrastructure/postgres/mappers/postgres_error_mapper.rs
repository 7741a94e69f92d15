// crates/shared-kernel/src/infrastructure/postgres/mappers/postgres_error_mapper.rs

use crate::domain::entities::EntityMetadata;
use crate::errors::DomainError;
use sqlx::postgres::PgDatabaseError;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const SERIALIZATION_FAILURE: &str = "40001";
const DEADLOCK_DETECTED: &str = "40P01";

pub trait SqlxErrorExt<T> {
    fn map_domain<E: EntityMetadata>(self) -> Result<T, DomainError>;
    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError>;
}

impl<T> SqlxErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn map_domain<E: EntityMetadata>(self) -> Result<T, DomainError> {
        self.map_err(|e| match e {
            sqlx::Error::RowNotFound => DomainError::NotFound {
                entity: E::entity_name(),
                id: "unknown".into(),
            },
            sqlx::Error::Database(db_err) => {
                let constraint = db_err
                    .try_downcast_ref::<PgDatabaseError>()
                    .and_then(|pg| pg.constraint());

                match db_err.code().as_deref() {
                    Some(UNIQUE_VIOLATION) => DomainError::AlreadyExists {
                        entity: E::entity_name(),
                        field: constraint
                            .map(E::map_constraint_to_field)
                            .unwrap_or("unique_constraint"),
                        value: "already taken".into(),
                    },
                    // Ligne parente absente (profil inexistant)
                    Some(FOREIGN_KEY_VIOLATION) => DomainError::NotFound {
                        entity: "Profile",
                        id: constraint.unwrap_or("unknown").to_string(),
                    },
                    Some(SERIALIZATION_FAILURE) | Some(DEADLOCK_DETECTED) => {
                        DomainError::ConcurrencyConflict {
                            reason: format!("Concurrency conflict on {}", E::entity_name()),
                        }
                    }
                    _ => DomainError::Infrastructure(format!(
                        "{}: {}",
                        E::entity_name(),
                        db_err.message()
                    )),
                }
            }
            other => DomainError::Infrastructure(format!("{}: {}", E::entity_name(), other)),
        })
    }

    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Infrastructure(format!("{context}: {e}")))
    }
}
