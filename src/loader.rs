//! Background execution of dashboard queries.
//!
//! The TUI loop is synchronous, so requests are spawned onto a tokio
//! runtime as a [`JoinSet`] that the loop drains with [`Loader::poll`]
//! once per frame. Requests run concurrently and independently: a slow
//! or failing call never holds up the others.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::{Id, JoinError, JoinSet};
use tracing::{debug, warn};

use crate::api::{ApiError, DashboardApi};
use crate::controller::{LoadOutcome, LoadRequest, Ticket};

/// Execute a single request against the API.
pub async fn execute(api: &dyn DashboardApi, request: LoadRequest) -> LoadOutcome {
    match request {
        LoadRequest::Stats(ticket) => LoadOutcome::Stats(ticket, api.stats().await),
        LoadRequest::Channels(ticket) => LoadOutcome::Channels(ticket, api.channels().await),
        LoadRequest::Messages(ticket, query) => {
            LoadOutcome::Messages(ticket, api.messages(&query).await)
        }
    }
}

/// Spawns requests in the background and collects their outcomes.
#[derive(Debug)]
pub struct Loader {
    api: Arc<dyn DashboardApi>,
    runtime: Handle,
    tasks: JoinSet<LoadOutcome>,
    /// Ticket of every running task, so a task that dies still answers
    /// for its region.
    tickets: HashMap<Id, Ticket>,
}

impl Loader {
    /// Create a loader that spawns onto `runtime`.
    pub fn new(api: Arc<dyn DashboardApi>, runtime: Handle) -> Self {
        Self {
            api,
            runtime,
            tasks: JoinSet::new(),
            tickets: HashMap::new(),
        }
    }

    /// Returns a description of the API backend.
    pub fn description(&self) -> &str {
        self.api.description()
    }

    /// Number of requests dispatched whose outcome has not been received.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Start executing a request in the background.
    pub fn dispatch(&mut self, request: LoadRequest) {
        let api = self.api.clone();
        let ticket = request.ticket();
        debug!(region = %ticket.region, seq = ticket.seq, "dispatching request");

        let handle = self
            .tasks
            .spawn_on(async move { execute(api.as_ref(), request).await }, &self.runtime);
        self.tickets.insert(handle.id(), ticket);
    }

    /// Start executing every request in `requests`.
    pub fn dispatch_all(&mut self, requests: impl IntoIterator<Item = LoadRequest>) {
        for request in requests {
            self.dispatch(request);
        }
    }

    /// Drain outcomes that have already arrived, without blocking.
    pub fn poll(&mut self) -> Vec<LoadOutcome> {
        let mut outcomes = Vec::new();
        while let Some(joined) = self.tasks.try_join_next_with_id() {
            outcomes.extend(self.finish(joined));
        }
        outcomes
    }

    /// Wait for the next outcome.
    ///
    /// Returns `None` when nothing is in flight.
    pub async fn recv(&mut self) -> Option<LoadOutcome> {
        while let Some(joined) = self.tasks.join_next_with_id().await {
            if let Some(outcome) = self.finish(joined) {
                return Some(outcome);
            }
        }
        None
    }

    /// Turn a joined task into the outcome for its region.
    fn finish(&mut self, joined: Result<(Id, LoadOutcome), JoinError>) -> Option<LoadOutcome> {
        match joined {
            Ok((id, outcome)) => {
                self.tickets.remove(&id);
                Some(outcome)
            }
            Err(err) => {
                let ticket = self.tickets.remove(&err.id())?;
                warn!(region = %ticket.region, seq = ticket.seq, error = %err, "request task failed");
                Some(LoadOutcome::failed(ticket, ApiError::Aborted(err.to_string())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::controller::DashboardController;
    use crate::testing::FakeApi;
    use std::time::Duration;

    #[tokio::test]
    async fn test_initial_load_populates_every_region() {
        let api = Arc::new(FakeApi::default());
        let mut loader = Loader::new(api, Handle::current());
        let mut controller = DashboardController::default();

        loader.dispatch_all(controller.initial_load());
        assert_eq!(loader.in_flight(), 3);
        while let Some(outcome) = loader.recv().await {
            assert!(controller.apply(outcome));
        }

        assert!(controller.stats().ready().is_some());
        assert_eq!(controller.channel_names().len(), 2);
        assert_eq!(controller.messages().ready().unwrap().messages.len(), 20);
        assert_eq!(loader.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_the_others() {
        let api = Arc::new(FakeApi {
            channels: Err(ApiError::Connection("refused".to_string())),
            ..Default::default()
        });
        let mut loader = Loader::new(api, Handle::current());
        let mut controller = DashboardController::default();

        loader.dispatch_all(controller.initial_load());
        while let Some(outcome) = loader.recv().await {
            controller.apply(outcome);
        }

        assert!(controller.channels().error().unwrap().contains("refused"));
        assert!(controller.stats().ready().is_some());
        assert!(controller.messages().ready().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_superseded_response_is_dropped() {
        let api = Arc::new(FakeApi {
            messages_delay: Duration::from_millis(50),
            ..Default::default()
        });
        let mut loader = Loader::new(api.clone(), Handle::current());
        let mut controller = DashboardController::default();

        let requests = controller.initial_load();
        loader.dispatch_all(requests);
        controller.controls_mut().decision = "buy".to_string();
        loader.dispatch(controller.apply_filters());

        let mut applied = 0;
        let mut discarded = 0;
        while let Some(outcome) = loader.recv().await {
            if controller.apply(outcome) {
                applied += 1;
            } else {
                discarded += 1;
            }
        }

        assert_eq!(applied, 3);
        assert_eq!(discarded, 1);
        assert_eq!(api.queries.lock().unwrap().len(), 2);
        assert_eq!(controller.filters().summary(), "decision=buy");
    }

    #[tokio::test]
    async fn test_panicking_request_fails_its_region() {
        let api = Arc::new(FakeApi {
            panic_on_messages: true,
            ..Default::default()
        });
        let mut loader = Loader::new(api, Handle::current());
        let mut controller = DashboardController::default();

        loader.dispatch_all(controller.initial_load());
        let mut received = 0;
        while let Some(outcome) = loader.recv().await {
            received += 1;
            assert!(controller.apply(outcome));
        }

        assert_eq!(received, 3);
        assert_eq!(loader.in_flight(), 0);
        assert!(controller.messages().error().unwrap().contains("did not complete"));
        assert!(controller.stats().ready().is_some());
    }

    #[tokio::test]
    async fn test_poll_counts_panicked_task_as_finished() {
        let api = Arc::new(FakeApi {
            panic_on_messages: true,
            ..Default::default()
        });
        let mut loader = Loader::new(api, Handle::current());
        let mut controller = DashboardController::default();
        loader.dispatch(controller.apply_filters());

        let mut outcomes = Vec::new();
        for _ in 0..100 {
            tokio::task::yield_now().await;
            outcomes.extend(loader.poll());
            if loader.in_flight() == 0 {
                break;
            }
        }

        assert_eq!(loader.in_flight(), 0);
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(&outcomes[0], LoadOutcome::Messages(_, Err(ApiError::Aborted(_)))));
    }

    #[tokio::test]
    async fn test_poll_does_not_block() {
        let api = Arc::new(FakeApi {
            messages_delay: Duration::from_secs(60),
            ..Default::default()
        });
        let mut loader = Loader::new(api, Handle::current());
        let mut controller = DashboardController::default();
        loader.dispatch(controller.apply_filters());

        assert!(loader.poll().is_empty());
        assert_eq!(loader.in_flight(), 1);
    }
}
