// crates/shared-kernel/src/domain/transaction/transaction.rs

use crate::errors::Result;
use std::any::Any;
use std::future::Future;
use std::pin::Pin;

/// Transaction de stockage opaque pour le domaine.
/// Les repositories la downcastent vers leur implémentation concrète via `as_any_mut`.
/// Une transaction abandonnée sans `commit` est annulée par le moteur.
pub trait Transaction: Send + Sync + Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn commit(self: Box<Self>) -> Pin<Box<dyn Future<Output = Result<()>> + Send>>;

    fn rollback(self: Box<Self>) -> Pin<Box<dyn Future<Output = Result<()>> + Send>>;
}
