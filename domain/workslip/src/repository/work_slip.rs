use async_trait::async_trait;

use super::DBRepository;
use crate::model::entity::WorkSlip;

/// Persisted slips. `get_all` lists newest first by persistence time.
#[async_trait]
pub trait WorkSlipRepo: DBRepository<WorkSlip> + Send + Sync {
    /// Every slip holding `so_number`. Databases of earlier deployments may
    /// hold more than one.
    async fn get_all_by_so_number(&self, so_number: &str) -> anyhow::Result<Vec<WorkSlip>>;
}
