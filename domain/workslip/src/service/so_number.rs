use async_trait::async_trait;
use chrono::NaiveDate;

use crate::exception::WorkSlipResult;

#[async_trait]
pub trait SoNumberService: Send + Sync {
    /// Next SO number for the current year.
    async fn next(&self) -> WorkSlipResult<String>;

    async fn next_for(&self, today: NaiveDate) -> WorkSlipResult<String>;
}
