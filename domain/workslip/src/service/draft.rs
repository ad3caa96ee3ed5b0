use async_trait::async_trait;

use crate::{
    exception::WorkSlipResult,
    model::entity::{DraftRecord, WorkSlip},
};

#[async_trait]
pub trait DraftService: Send + Sync {
    /// Newest first.
    async fn list(&self) -> WorkSlipResult<Vec<DraftRecord>>;

    async fn get(&self, id: &str) -> WorkSlipResult<Option<DraftRecord>>;

    /// Saves `slip` as a new draft without any required-field checks,
    /// generating an SO number when it has none.
    async fn save(&self, slip: WorkSlip) -> WorkSlipResult<DraftRecord>;

    async fn delete(&self, id: &str) -> WorkSlipResult<()>;

    /// Submits the draft to the record service and removes it locally once
    /// the record service accepted it.
    async fn promote(&self, id: &str) -> WorkSlipResult<WorkSlip>;
}
