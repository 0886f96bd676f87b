use std::sync::Arc;

use adapter::repository::catalog::CatalogRepositoryImpl;
use adapter::repository::forms::FormsGatewayImpl;
use adapter::repository::schedule::ScheduleRepositoryImpl;
use kernel::repository::catalog::CatalogRepository;
use kernel::repository::forms::FormsGateway;
use kernel::repository::schedule::ScheduleRepository;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    app_config: AppConfig,
    catalog_repository: Arc<dyn CatalogRepository>,
    schedule_repository: Arc<dyn ScheduleRepository>,
    forms_gateway: Arc<dyn FormsGateway>,
}

impl AppRegistry {
    pub fn new(app_config: AppConfig) -> Self {
        let catalog_repository = Arc::new(CatalogRepositoryImpl::seeded());
        let schedule_repository = Arc::new(ScheduleRepositoryImpl::new());
        let forms_gateway = Arc::new(FormsGatewayImpl::new(&app_config.forms));
        Self {
            app_config,
            catalog_repository,
            schedule_repository,
            forms_gateway,
        }
    }

    pub fn app_config(&self) -> &AppConfig {
        &self.app_config
    }

    pub fn catalog_repository(&self) -> Arc<dyn CatalogRepository> {
        self.catalog_repository.clone()
    }

    pub fn schedule_repository(&self) -> Arc<dyn ScheduleRepository> {
        self.schedule_repository.clone()
    }

    pub fn forms_gateway(&self) -> Arc<dyn FormsGateway> {
        self.forms_gateway.clone()
    }
}
