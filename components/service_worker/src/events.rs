//! Events delivered to the worker's handlers.

use fetch_types::{FetchRequest, FetchResponse, WorkerError};
use std::sync::Mutex;

/// The installation lifecycle event.
///
/// The handler extends the event's completion with `wait_until`; the host
/// settles the event once the handler returns and treats any recorded
/// failure as the failure of the installation itself.
#[derive(Debug, Default)]
pub struct InstallEvent {
    /// Outcomes of the completion extensions
    extensions: Mutex<Vec<Result<(), WorkerError>>>,
}

impl InstallEvent {
    /// Create a new install event.
    pub fn new() -> Self {
        Self {
            extensions: Mutex::new(Vec::new()),
        }
    }

    /// Extend the event's completion with the outcome of setup work.
    ///
    /// The event does not settle until every recorded extension is
    /// accounted for; a single failure fails the installation as a whole.
    pub fn wait_until(&self, outcome: Result<(), WorkerError>) {
        self.extensions.lock().unwrap().push(outcome);
    }

    /// Settle the event: Ok only if every extension succeeded.
    ///
    /// The first recorded failure wins and propagates unchanged.
    pub fn settle(self) -> Result<(), WorkerError> {
        let outcomes = self.extensions.into_inner().unwrap();
        for outcome in outcomes {
            outcome?;
        }
        Ok(())
    }
}

/// A fetch-interception event.
///
/// The handler substitutes the default resolution by calling `respond_with`
/// exactly once.
pub struct FetchEvent {
    /// The request being intercepted
    pub request: FetchRequest,
    /// Whether respond_with was called
    responded: Mutex<bool>,
    /// The response (if respond_with was called)
    response: Mutex<Option<FetchResponse>>,
}

impl FetchEvent {
    /// Create a new fetch event for a request.
    pub fn new(request: FetchRequest) -> Self {
        Self {
            request,
            responded: Mutex::new(false),
            response: Mutex::new(None),
        }
    }

    /// Respond to the fetch event with the handler's resolution.
    ///
    /// Calling this a second time is an error.
    pub fn respond_with(&self, response: FetchResponse) -> Result<(), WorkerError> {
        let mut responded = self.responded.lock().unwrap();
        if *responded {
            return Err(WorkerError::InvalidState {
                expected: "respond_with not yet called".to_string(),
                actual: "already responded".to_string(),
            });
        }
        *responded = true;
        *self.response.lock().unwrap() = Some(response);
        Ok(())
    }

    /// Check if respond_with was called.
    pub fn was_responded(&self) -> bool {
        *self.responded.lock().unwrap()
    }

    /// Consume the settled event, yielding the handler's resolution.
    ///
    /// `None` if no resolution was substituted.
    pub fn into_response(self) -> Option<FetchResponse> {
        self.response.into_inner().unwrap()
    }
}

impl std::fmt::Debug for FetchEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchEvent")
            .field("request", &self.request)
            .field("responded", &self.was_responded())
            .finish()
    }
}
