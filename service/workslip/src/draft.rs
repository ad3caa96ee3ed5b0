use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_workslip::{
    exception::{WorkSlipException, WorkSlipResult},
    model::{
        entity::{DraftRecord, WorkSlip},
        vo::TechnicalReport,
    },
    repository::{DraftRepo, MutableRepository, ReadOnlyRepository},
    service::{DraftService, SoNumberService, WorkSlipService},
};

#[derive(typed_builder::TypedBuilder)]
pub struct DraftServiceImpl {
    draft_repo: Arc<dyn DraftRepo>,
    so_number_service: Arc<dyn SoNumberService>,
    work_slip_service: Arc<dyn WorkSlipService>,
}

#[async_trait]
impl DraftService for DraftServiceImpl {
    async fn list(&self) -> WorkSlipResult<Vec<DraftRecord>> {
        Ok(self.draft_repo.get_all().await?)
    }

    async fn get(&self, id: &str) -> WorkSlipResult<Option<DraftRecord>> {
        Ok(self.draft_repo.get_by_id(id).await?)
    }

    async fn save(&self, mut slip: WorkSlip) -> WorkSlipResult<DraftRecord> {
        if slip.so_number.trim().is_empty() {
            slip.so_number = self.so_number_service.next().await?;
        } else {
            slip.so_number = slip.so_number.trim().to_owned();
        }
        let draft = DraftRecord::new(slip, Utc::now());
        self.draft_repo.insert(&draft).await?;
        self.draft_repo.save_changed().await?;
        tracing::info!(id = draft.id(), so_number = %draft.slip().so_number, "Draft saved.");
        Ok(draft)
    }

    async fn delete(&self, id: &str) -> WorkSlipResult<()> {
        self.draft_repo.delete_by_id(id).await?;
        self.draft_repo.save_changed().await?;
        Ok(())
    }

    async fn promote(&self, id: &str) -> WorkSlipResult<WorkSlip> {
        let draft = self
            .draft_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| WorkSlipException::NotFound { id: id.to_owned() })?;
        let missing = draft.slip().missing_required_fields();
        if !missing.is_empty() {
            return Err(WorkSlipException::IncompleteSubmission { missing });
        }

        let mut submission = draft.into_submission();
        submission.so_number = submission.so_number.trim().to_owned();
        submission.technical_reports = submission
            .technical_reports
            .iter()
            .map(TechnicalReport::trimmed)
            .collect();
        let created = self.work_slip_service.create(submission).await?;

        self.draft_repo.delete_by_id(id).await?;
        self.draft_repo.save_changed().await?;
        tracing::info!(draft = id, id = %created.id, "Draft submitted.");
        Ok(created)
    }
}
