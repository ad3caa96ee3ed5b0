use async_trait::async_trait;

use crate::{
    exception::WorkSlipResult,
    model::vo::{SlipFilter, SlipSummary},
};

#[async_trait]
pub trait ReportService: Send + Sync {
    async fn summary(&self, filter: &SlipFilter) -> WorkSlipResult<SlipSummary>;
}
