//! Transactional boundary.

use anyhow::Result;
use async_trait::async_trait;
use futures::future::BoxFuture;

/// Work executed inside one atomic scope.
pub type TransactionWork = Box<dyn FnOnce() -> BoxFuture<'static, Result<()>> + Send>;

/// Owner of the atomic scope. A failure anywhere inside `work` rejects the
/// whole transaction; there is no partial completion observable outside it.
#[async_trait]
pub trait TransactionProvider: Send + Sync {
    async fn transaction(&self, work: TransactionWork) -> Result<()>;
}
