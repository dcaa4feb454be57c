//! The host container owning the registration and the controller.

use crate::worker::{Registration, ServiceWorker};
use fetch_types::WorkerError;
use std::sync::{Arc, RwLock};

/// The container the host runtime sees: one registration, one controller.
///
/// There is a single worker over the whole request surface; no scopes and
/// no per-path routing. The controller is only ever a worker that finished
/// activation, which is what guarantees installation's work completed
/// before any fetch is intercepted.
#[derive(Default)]
pub struct WorkerHost {
    /// The single registration (if any)
    registration: RwLock<Option<Arc<Registration>>>,
    /// The worker currently controlling requests
    controller: RwLock<Option<Arc<ServiceWorker>>>,
}

impl WorkerHost {
    /// Create an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new worker version and start installing it.
    ///
    /// Reuses the existing registration when there is one, so a re-register
    /// is an update: the fresh worker installs while the previous active
    /// worker (if any) keeps controlling requests.
    pub fn register(&self) -> Arc<Registration> {
        let mut slot = self.registration.write().unwrap();
        let registration = slot
            .get_or_insert_with(|| Arc::new(Registration::new()))
            .clone();
        drop(slot);

        let worker = Arc::new(ServiceWorker::new());
        log::info!("registering worker {}", worker.id());
        registration.start_install(worker);
        registration
    }

    /// Get the registration.
    pub fn registration(&self) -> Option<Arc<Registration>> {
        self.registration.read().unwrap().clone()
    }

    /// Get the current controller.
    pub fn controller(&self) -> Option<Arc<ServiceWorker>> {
        self.controller.read().unwrap().clone()
    }

    /// Activate the waiting worker and promote it to controller.
    pub fn activate_controller(&self) -> Result<(), WorkerError> {
        let registration = self.registration().ok_or_else(|| WorkerError::InvalidState {
            expected: "registration present".to_string(),
            actual: "none".to_string(),
        })?;

        registration.start_activate()?;
        registration.complete_activate()?;

        let active = registration.active();
        if let Some(worker) = &active {
            log::info!("worker {} is now controlling requests", worker.id());
        }
        *self.controller.write().unwrap() = active;
        Ok(())
    }

    /// Drop the registration and controller; every worker becomes redundant.
    pub fn unregister(&self) -> bool {
        let registration = self.registration.write().unwrap().take();
        *self.controller.write().unwrap() = None;
        match registration {
            Some(reg) => {
                reg.unregister();
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for WorkerHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerHost")
            .field("registered", &self.registration().is_some())
            .field("controller", &self.controller())
            .finish()
    }
}
