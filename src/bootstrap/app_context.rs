use std::sync::Arc;

use crate::application::ports::employee_repository::EmployeeRepository;
use crate::bootstrap::config::Config;

/// Shared handler state. The storage port is constructed at startup and
/// injected here so handlers never reach for globals and tests can substitute
/// an in-memory backend.
#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

pub struct AppServices {
    employee_repo: Arc<dyn EmployeeRepository>,
}

impl AppServices {
    pub fn new(employee_repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repo }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn employee_repo(&self) -> Arc<dyn EmployeeRepository> {
        self.services.employee_repo.clone()
    }
}
