use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::models::TodoItem;
use crate::sheets::{SheetsClient, SyncOutcome, SyncPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    Idle,
    Syncing,
    Synced,
    Failed,
}

struct IndicatorState {
    status: SyncStatus,
    generation: u64,
}

/// Sync status flag that falls back to `Idle` a while after each push.
///
/// Every push takes a generation number; results and resets from an older
/// generation are dropped so a slow push cannot overwrite a newer one.
#[derive(Clone)]
pub struct SyncIndicator {
    state: Arc<StdMutex<IndicatorState>>,
    clear_after: Duration,
}

impl SyncIndicator {
    pub fn new(clear_after: Duration) -> Self {
        Self {
            state: Arc::new(StdMutex::new(IndicatorState {
                status: SyncStatus::Idle,
                generation: 0,
            })),
            clear_after,
        }
    }

    pub fn status(&self) -> SyncStatus {
        self.lock().status
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, IndicatorState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn begin(&self) -> u64 {
        let mut state = self.lock();
        state.generation += 1;
        state.status = SyncStatus::Syncing;
        state.generation
    }

    fn finish(&self, generation: u64, outcome: SyncOutcome) {
        {
            let mut state = self.lock();
            if state.generation != generation {
                return;
            }
            state.status = match outcome {
                SyncOutcome::Sent => SyncStatus::Synced,
                SyncOutcome::TransportError => SyncStatus::Failed,
            };
        }

        let indicator = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(indicator.clear_after).await;
            let mut state = indicator.lock();
            if state.generation == generation {
                state.status = SyncStatus::Idle;
            }
        });
    }
}

/// One outbound push of a full to-do snapshot.
pub struct SyncJob {
    client: Arc<dyn SheetsClient>,
    indicator: SyncIndicator,
    endpoint: String,
    todos: Vec<TodoItem>,
}

impl SyncJob {
    pub fn new(
        client: Arc<dyn SheetsClient>,
        indicator: SyncIndicator,
        endpoint: String,
        todos: Vec<TodoItem>,
    ) -> Self {
        Self {
            client,
            indicator,
            endpoint,
            todos,
        }
    }

    pub async fn run(self) -> SyncOutcome {
        let generation = self.indicator.begin();
        let payload = SyncPayload::new(self.todos, Utc::now());
        let outcome = self.client.push_todos(&self.endpoint, &payload).await;
        self.indicator.finish(generation, outcome);

        match outcome {
            SyncOutcome::Sent => info!("Synced {} todos", payload.todos.len()),
            SyncOutcome::TransportError => warn!("Todo sync failed; will retry on next change"),
        }
        outcome
    }
}

/// Holds at most one pending delayed push.
///
/// Scheduling a new push aborts the pending timer. A push whose timer has
/// already fired runs on its own task and is not cancelled.
pub struct SyncDebouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl SyncDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn schedule(&mut self, job: SyncJob) {
        self.cancel();
        let delay = self.delay;
        debug!("Todo sync scheduled in {:?}", delay);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tokio::spawn(job.run());
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for SyncDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stale_result_does_not_override_newer_push() {
        let indicator = SyncIndicator::new(Duration::from_millis(50));

        let first = indicator.begin();
        let second = indicator.begin();
        indicator.finish(first, SyncOutcome::TransportError);
        assert_eq!(indicator.status(), SyncStatus::Syncing);

        indicator.finish(second, SyncOutcome::Sent);
        assert_eq!(indicator.status(), SyncStatus::Synced);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(indicator.status(), SyncStatus::Idle);
    }

    #[tokio::test]
    async fn cancel_drops_pending_timer() {
        let mut debouncer = SyncDebouncer::new(Duration::from_secs(60));
        let job = SyncJob::new(
            Arc::new(crate::sheets::NoopSheetsClient),
            SyncIndicator::new(Duration::from_secs(1)),
            "https://script.example/exec".to_string(),
            Vec::new(),
        );

        debouncer.schedule(job);
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert!(!debouncer.is_pending());
    }
}
