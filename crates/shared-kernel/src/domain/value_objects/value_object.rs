// crates/shared-kernel/src/domain/value_objects/value_object.rs
use crate::errors::Result;

/// Invariants vérifiés à la construction (`try_new`).
/// Les constructeurs `from_raw` / `new_unchecked` les sautent pour l'hydratation depuis la base.
pub trait ValueObject: PartialEq + Clone {
    fn validate(&self) -> Result<()>;
}
