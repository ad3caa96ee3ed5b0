use async_trait::async_trait;
use mockall::mock;

use crate::{
    exception::WorkSlipResult,
    model::entity::{DraftRecord, WorkSlip},
    repository::{
        DBRepository, DraftRepo, MutableRepository, ReadOnlyRepository, SoCounterRepo,
        WorkSlipRepo,
    },
    service::WorkSlipService,
};

mock! {
    pub WorkSlipRepo {}
    #[async_trait]
    impl WorkSlipRepo for WorkSlipRepo {
        async fn get_all_by_so_number(&self, so_number: &str) -> anyhow::Result<Vec<WorkSlip>>;
    }
    impl DBRepository<WorkSlip> for WorkSlipRepo {}
    #[async_trait]
    impl ReadOnlyRepository<WorkSlip> for WorkSlipRepo {
        async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<WorkSlip>>;
        async fn get_all(&self) -> anyhow::Result<Vec<WorkSlip>>;
    }
    #[async_trait]
    impl MutableRepository<WorkSlip> for WorkSlipRepo {
        async fn insert(&self, entity: &WorkSlip) -> anyhow::Result<String>;
        async fn update(&self, entity: &WorkSlip) -> anyhow::Result<()>;
        async fn delete_by_id(&self, id: &str) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}

mock! {
    pub DraftRepo {}
    impl DraftRepo for DraftRepo {}
    impl DBRepository<DraftRecord> for DraftRepo {}
    #[async_trait]
    impl ReadOnlyRepository<DraftRecord> for DraftRepo {
        async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<DraftRecord>>;
        async fn get_all(&self) -> anyhow::Result<Vec<DraftRecord>>;
    }
    #[async_trait]
    impl MutableRepository<DraftRecord> for DraftRepo {
        async fn insert(&self, entity: &DraftRecord) -> anyhow::Result<String>;
        async fn update(&self, entity: &DraftRecord) -> anyhow::Result<()>;
        async fn delete_by_id(&self, id: &str) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}

mock! {
    pub SoCounterRepo {}
    #[async_trait]
    impl SoCounterRepo for SoCounterRepo {
        async fn load(&self) -> anyhow::Result<Option<String>>;
        async fn store(&self, so_number: &str) -> anyhow::Result<()>;
    }
}

mock! {
    pub WorkSlipService {}
    #[async_trait]
    impl WorkSlipService for WorkSlipService {
        async fn list(&self) -> WorkSlipResult<Vec<WorkSlip>>;
        async fn get(&self, id: &str) -> WorkSlipResult<Option<WorkSlip>>;
        async fn create(&self, slip: WorkSlip) -> WorkSlipResult<WorkSlip>;
        async fn replace(&self, id: &str, slip: WorkSlip) -> WorkSlipResult<WorkSlip>;
        async fn delete(&self, id: &str) -> WorkSlipResult<()>;
    }
}
