use std::sync::Arc;

use async_trait::async_trait;
use domain_workslip::{
    exception::WorkSlipResult,
    model::vo::{SlipFilter, SlipSummary},
    service::{ReportService, WorkSlipService},
};

/// Aggregates over the persisted slips. Drafts never take part.
#[derive(typed_builder::TypedBuilder)]
pub struct ReportServiceImpl {
    work_slip_service: Arc<dyn WorkSlipService>,
}

#[async_trait]
impl ReportService for ReportServiceImpl {
    async fn summary(&self, filter: &SlipFilter) -> WorkSlipResult<SlipSummary> {
        let slips = self.work_slip_service.list().await?;
        Ok(SlipSummary::of(filter.apply(&slips)))
    }
}
