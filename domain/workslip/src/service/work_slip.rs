use async_trait::async_trait;

use crate::{exception::WorkSlipResult, model::entity::WorkSlip};

/// CRUD over persisted work slips.
#[async_trait]
pub trait WorkSlipService: Send + Sync {
    /// Every slip, newest first.
    async fn list(&self) -> WorkSlipResult<Vec<WorkSlip>>;

    async fn get(&self, id: &str) -> WorkSlipResult<Option<WorkSlip>>;

    /// Fails with a conflict when the SO number is already taken.
    async fn create(&self, slip: WorkSlip) -> WorkSlipResult<WorkSlip>;

    /// Full replacement of the slip stored under `id`. The persistence time
    /// of the stored slip is kept.
    async fn replace(&self, id: &str, slip: WorkSlip) -> WorkSlipResult<WorkSlip>;

    /// Succeeds whether or not the slip exists.
    async fn delete(&self, id: &str) -> WorkSlipResult<()>;
}
