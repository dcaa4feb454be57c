//! Worker instances and their registration.

use crate::state::WorkerState;
use fetch_types::WorkerError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// One worker instance.
pub struct ServiceWorker {
    /// Unique identifier
    id: u64,
    /// Current state
    state: RwLock<WorkerState>,
    /// State change listeners
    state_listeners: Mutex<Vec<Box<dyn Fn(WorkerState) + Send + Sync>>>,
}

impl ServiceWorker {
    /// Create a new worker instance in the Parsed state.
    pub fn new() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::SeqCst),
            state: RwLock::new(WorkerState::Parsed),
            state_listeners: Mutex::new(Vec::new()),
        }
    }

    /// Get the worker's unique ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the current state.
    pub fn state(&self) -> WorkerState {
        *self.state.read().unwrap()
    }

    /// Transition to a new state.
    pub(crate) fn set_state(&self, new_state: WorkerState) {
        let mut state = self.state.write().unwrap();
        let old_state = *state;
        if old_state != new_state {
            *state = new_state;
            drop(state);
            log::debug!("worker {}: {} -> {}", self.id, old_state, new_state);
            self.notify_state_change(new_state);
        }
    }

    /// Add a state change listener.
    pub fn on_state_change<F>(&self, callback: F)
    where
        F: Fn(WorkerState) + Send + Sync + 'static,
    {
        let mut listeners = self.state_listeners.lock().unwrap();
        listeners.push(Box::new(callback));
    }

    /// Notify all listeners of state change.
    fn notify_state_change(&self, new_state: WorkerState) {
        let listeners = self.state_listeners.lock().unwrap();
        for listener in listeners.iter() {
            listener(new_state);
        }
    }
}

impl Default for ServiceWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ServiceWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceWorker")
            .field("id", &self.id)
            .field("state", &self.state())
            .finish()
    }
}

/// The registration tracking a worker through its lifecycle.
///
/// Holds up to three workers at once: one installing, one installed and
/// waiting, one active. Install failure discards only the installing
/// worker; whatever was active stays active.
pub struct Registration {
    /// Unique registration ID
    id: u64,
    /// Installing worker (if any)
    installing: RwLock<Option<Arc<ServiceWorker>>>,
    /// Waiting worker (if any)
    waiting: RwLock<Option<Arc<ServiceWorker>>>,
    /// Active worker (if any)
    active: RwLock<Option<Arc<ServiceWorker>>>,
}

impl Registration {
    /// Create a new empty registration.
    pub fn new() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::SeqCst),
            installing: RwLock::new(None),
            waiting: RwLock::new(None),
            active: RwLock::new(None),
        }
    }

    /// Get the registration ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the installing worker.
    pub fn installing(&self) -> Option<Arc<ServiceWorker>> {
        self.installing.read().unwrap().clone()
    }

    /// Get the waiting worker.
    pub fn waiting(&self) -> Option<Arc<ServiceWorker>> {
        self.waiting.read().unwrap().clone()
    }

    /// Get the active worker.
    pub fn active(&self) -> Option<Arc<ServiceWorker>> {
        self.active.read().unwrap().clone()
    }

    /// Start the installation process.
    pub fn start_install(&self, worker: Arc<ServiceWorker>) {
        worker.set_state(WorkerState::Installing);
        *self.installing.write().unwrap() = Some(worker);
    }

    /// Complete installation successfully.
    pub fn complete_install(&self) -> Result<(), WorkerError> {
        let installing = self.installing.read().unwrap().clone();
        if let Some(worker) = installing {
            worker.set_state(WorkerState::Installed);

            // Move installing to waiting
            *self.installing.write().unwrap() = None;
            *self.waiting.write().unwrap() = Some(worker);
            Ok(())
        } else {
            Err(WorkerError::InvalidState {
                expected: "installing worker present".to_string(),
                actual: "none".to_string(),
            })
        }
    }

    /// Fail installation.
    ///
    /// The installing worker becomes redundant; the waiting and active
    /// slots are untouched.
    pub fn fail_install(&self) {
        let installing = self.installing.write().unwrap().take();
        if let Some(worker) = installing {
            log::warn!("worker {} failed to install", worker.id());
            worker.set_state(WorkerState::Redundant);
        }
    }

    /// Start activation.
    pub fn start_activate(&self) -> Result<(), WorkerError> {
        let waiting = self.waiting.read().unwrap().clone();
        if let Some(worker) = waiting {
            worker.set_state(WorkerState::Activating);
            Ok(())
        } else {
            Err(WorkerError::InvalidState {
                expected: "waiting worker present".to_string(),
                actual: "none".to_string(),
            })
        }
    }

    /// Complete activation successfully.
    pub fn complete_activate(&self) -> Result<(), WorkerError> {
        let waiting = self.waiting.read().unwrap().clone();
        if let Some(worker) = waiting {
            if worker.state() != WorkerState::Activating {
                return Err(WorkerError::InvalidState {
                    expected: "activating".to_string(),
                    actual: worker.state().to_string(),
                });
            }

            // Make the old active worker redundant
            if let Some(old_active) = self.active.read().unwrap().as_ref() {
                old_active.set_state(WorkerState::Redundant);
            }

            worker.set_state(WorkerState::Activated);

            // Move waiting to active
            *self.waiting.write().unwrap() = None;
            *self.active.write().unwrap() = Some(worker);
            Ok(())
        } else {
            Err(WorkerError::InvalidState {
                expected: "waiting worker present".to_string(),
                actual: "none".to_string(),
            })
        }
    }

    /// Fail activation.
    pub fn fail_activate(&self) {
        let waiting = self.waiting.write().unwrap().take();
        if let Some(worker) = waiting {
            worker.set_state(WorkerState::Redundant);
        }
    }

    /// Unregister: every held worker becomes redundant.
    pub fn unregister(&self) {
        if let Some(w) = self.installing.write().unwrap().take() {
            w.set_state(WorkerState::Redundant);
        }
        if let Some(w) = self.waiting.write().unwrap().take() {
            w.set_state(WorkerState::Redundant);
        }
        if let Some(w) = self.active.write().unwrap().take() {
            w.set_state(WorkerState::Redundant);
        }
    }
}

impl Default for Registration {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("id", &self.id)
            .field("installing", &self.installing())
            .field("waiting", &self.waiting())
            .field("active", &self.active())
            .finish()
    }
}
