use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_workslip::{
    exception::{WorkSlipException, WorkSlipResult},
    model::entity::WorkSlip,
    repository::{MutableRepository, ReadOnlyRepository, WorkSlipRepo},
    service::WorkSlipService,
};

/// Record service over the persistent store.
#[derive(typed_builder::TypedBuilder)]
pub struct WorkSlipServiceImpl {
    repo: Arc<dyn WorkSlipRepo>,
}

impl WorkSlipServiceImpl {
    fn ensure_so_number(slip: &WorkSlip) -> WorkSlipResult<()> {
        if slip.so_number.trim().is_empty() {
            return Err(WorkSlipException::InvalidRecord {
                reason: "soNumber is required".to_owned(),
            });
        }
        Ok(())
    }

    /// Fails when `so_number` is held by a slip other than `own_id`.
    async fn ensure_so_number_free(
        &self,
        so_number: &str,
        own_id: Option<&str>,
    ) -> WorkSlipResult<()> {
        let holders = self.repo.get_all_by_so_number(so_number).await?;
        if holders.iter().any(|el| Some(el.id.as_str()) != own_id) {
            return Err(WorkSlipException::SoNumberConflict {
                so_number: so_number.to_owned(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl WorkSlipService for WorkSlipServiceImpl {
    async fn list(&self) -> WorkSlipResult<Vec<WorkSlip>> {
        let mut slips = self.repo.get_all().await?;
        slips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(slips)
    }

    async fn get(&self, id: &str) -> WorkSlipResult<Option<WorkSlip>> {
        Ok(self.repo.get_by_id(id).await?)
    }

    async fn create(&self, mut slip: WorkSlip) -> WorkSlipResult<WorkSlip> {
        Self::ensure_so_number(&slip)?;
        self.ensure_so_number_free(&slip.so_number, None).await?;
        if slip.id.trim().is_empty() {
            slip.id = WorkSlip::new_id();
        } else if self.repo.get_by_id(&slip.id).await?.is_some() {
            return Err(WorkSlipException::InvalidRecord {
                reason: format!("id {} is already in use", slip.id),
            });
        }
        slip.stamp_created(Utc::now());
        self.repo.insert(&slip).await?;
        self.repo.save_changed().await?;
        tracing::info!(id = %slip.id, so_number = %slip.so_number, "Work slip created.");
        Ok(slip)
    }

    async fn replace(&self, id: &str, mut slip: WorkSlip) -> WorkSlipResult<WorkSlip> {
        let stored = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| WorkSlipException::NotFound { id: id.to_owned() })?;
        Self::ensure_so_number(&slip)?;
        if slip.so_number != stored.so_number {
            self.ensure_so_number_free(&slip.so_number, Some(id)).await?;
        }
        slip.id = stored.id;
        slip.created_at = stored.created_at;
        self.repo.update(&slip).await?;
        self.repo.save_changed().await?;
        tracing::debug!(id = %slip.id, "Work slip replaced.");
        Ok(slip)
    }

    async fn delete(&self, id: &str) -> WorkSlipResult<()> {
        self.repo.delete_by_id(id).await?;
        self.repo.save_changed().await?;
        Ok(())
    }
}
