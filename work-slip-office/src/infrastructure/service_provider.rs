use std::sync::Arc;

use domain_workslip::service::{AuthProvider, ExportService, ReportService, WorkSlipService};
use service_workslip::{
    ExportServiceImpl, ReportServiceImpl, StaticCredentialProvider, WorkSlipServiceImpl,
};

use super::{
    config::OfficeConfig,
    database::{Database, OrmRepo},
};

/// Singletons built at start-up. Repositories and the services over them are
/// built per request so every request commits its own statements.
#[derive(Clone)]
pub struct ServiceProvider {
    config: OfficeConfig,
    database: Arc<Database>,
    auth_provider: Arc<dyn AuthProvider>,
}

impl ServiceProvider {
    pub async fn build(config: OfficeConfig) -> anyhow::Result<Self> {
        let database = Arc::new(Database::connect(&config.db.url).await?);
        let auth_provider = Arc::new(StaticCredentialProvider::new(config.auth.clone()));
        Ok(Self {
            config,
            database,
            auth_provider,
        })
    }

    pub fn config(&self) -> &OfficeConfig {
        &self.config
    }

    pub fn database(&self) -> Arc<Database> {
        self.database.clone()
    }

    pub fn auth_provider(&self) -> Arc<dyn AuthProvider> {
        self.auth_provider.clone()
    }

    fn orm_repo(&self) -> Arc<OrmRepo> {
        Arc::new(OrmRepo::builder().db(self.database.clone()).build())
    }

    pub fn work_slip_service(&self) -> Arc<dyn WorkSlipService> {
        Arc::new(WorkSlipServiceImpl::builder().repo(self.orm_repo()).build())
    }

    pub fn report_service(&self) -> Arc<dyn ReportService> {
        Arc::new(
            ReportServiceImpl::builder()
                .work_slip_service(self.work_slip_service())
                .build(),
        )
    }

    pub fn export_service(&self) -> Arc<dyn ExportService> {
        Arc::new(
            ExportServiceImpl::builder()
                .work_slip_service(self.work_slip_service())
                .build(),
        )
    }
}
