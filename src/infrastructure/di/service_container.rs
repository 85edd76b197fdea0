//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::TreeService;
use crate::config::Settings;
use crate::infrastructure::traits::{ParameterStore, SsmParameterStore};
use crate::infrastructure::InfraResult;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Parameter store abstraction
    pub store: Arc<dyn ParameterStore>,
}

impl ServiceContainer {
    /// Create a new service container backed by AWS SSM.
    ///
    /// Region and profile are taken from `settings`, never from global state.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        let store = SsmParameterStore::new(settings.region.as_deref(), settings.profile.as_deref())?;
        Ok(Self::with_deps(settings, Arc::new(store)))
    }

    /// Create a service container with a custom store (for testing).
    pub fn with_deps(settings: Settings, store: Arc<dyn ParameterStore>) -> Self {
        Self {
            settings: Arc::new(settings),
            store,
        }
    }

    pub fn tree_service(&self) -> TreeService {
        TreeService::new(Arc::clone(&self.store), self.settings.identity)
    }
}
