//! Shared application state

use std::sync::Arc;

use garnet_common::AppConfig;
use garnet_service::ServiceContext;

/// State cloned into every handler; both fields are behind `Arc` so the
/// clone is cheap.
#[derive(Clone, Debug)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
