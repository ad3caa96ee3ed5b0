use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Local, NaiveDate};
use domain_workslip::{
    exception::WorkSlipResult, model::vo::SoNumber, repository::SoCounterRepo,
    service::SoNumberService,
};

/// Hands out SO numbers from the installation's per-year counter.
#[derive(typed_builder::TypedBuilder)]
pub struct SoNumberServiceImpl {
    counter_repo: Arc<dyn SoCounterRepo>,
}

#[async_trait]
impl SoNumberService for SoNumberServiceImpl {
    async fn next(&self) -> WorkSlipResult<String> {
        self.next_for(Local::now().date_naive()).await
    }

    async fn next_for(&self, today: NaiveDate) -> WorkSlipResult<String> {
        let previous = self.counter_repo.load().await?;
        let next = SoNumber::next_after(previous.as_deref(), today.year()).to_string();
        self.counter_repo.store(&next).await?;
        tracing::debug!(previous = ?previous, next = %next, "SO number generated.");
        Ok(next)
    }
}
