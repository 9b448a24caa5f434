use std::sync::Arc;

use store::RecordStore;

use crate::services::RegistrationOptions;

/// Shared by every handler; built once at process start.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecordStore>,
    registration: Arc<RegistrationOptions>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, registration: RegistrationOptions) -> Self {
        Self {
            store,
            registration: Arc::new(registration),
        }
    }

    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    pub fn registration(&self) -> &RegistrationOptions {
        &self.registration
    }
}
