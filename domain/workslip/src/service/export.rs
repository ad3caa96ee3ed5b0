use async_trait::async_trait;

use crate::{
    exception::WorkSlipResult,
    model::vo::{CsvDownload, SlipFilter},
};

#[async_trait]
pub trait ExportService: Send + Sync {
    /// One row per slip matching `filter`.
    async fn slips_csv(&self, filter: &SlipFilter) -> WorkSlipResult<CsvDownload>;

    /// Aggregate totals over every slip.
    async fn totals_csv(&self) -> WorkSlipResult<CsvDownload>;
}
