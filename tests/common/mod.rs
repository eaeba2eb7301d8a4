//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

use async_trait::async_trait;
use counter_mvi::service::{
    CounterService, FailingCounterService, ServiceError, SimulatedCounterService,
};
use counter_mvi::ui::controller::CounterController;
use counter_mvi::ui::counter::{CounterStore, CounterViewState};
use counter_mvi::ui::mvi::Subscription;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::Semaphore;

// -- Services -----------------------------------------------------------------

/// Succeeds with `value` and no simulated latency.
pub fn instant_ok(value: i64) -> Arc<dyn CounterService> {
    Arc::new(SimulatedCounterService::new(value).with_latency(Duration::ZERO))
}

/// Fails with `InvalidResponse` and no simulated latency.
pub fn instant_fail() -> Arc<dyn CounterService> {
    Arc::new(FailingCounterService::new().with_latency(Duration::ZERO))
}

/// Service whose fetches block until the test releases them.
pub struct GatedCounterService {
    value: i64,
    gate: Semaphore,
    fetches: AtomicUsize,
}

impl GatedCounterService {
    pub fn new(value: i64) -> Arc<Self> {
        Arc::new(Self {
            value,
            gate: Semaphore::new(0),
            fetches: AtomicUsize::new(0),
        })
    }

    /// Let one pending (or future) fetch complete.
    pub fn release(&self) {
        self.gate.add_permits(1);
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CounterService for GatedCounterService {
    async fn fetch_count(&self) -> Result<i64, ServiceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.gate
            .acquire()
            .await
            .expect("gate semaphore closed")
            .forget();
        Ok(self.value)
    }

    async fn update_count(&self, _new_value: i64) -> Result<(), ServiceError> {
        Ok(())
    }
}

// -- Screen helpers -----------------------------------------------------------

/// Build a fresh store and a controller wired to `service`.
pub fn screen(service: Arc<dyn CounterService>) -> (Arc<CounterStore>, CounterController) {
    screen_with(CounterViewState::default(), service)
}

pub fn screen_with(
    initial: CounterViewState,
    service: Arc<dyn CounterService>,
) -> (Arc<CounterStore>, CounterController) {
    let store = Arc::new(CounterStore::new(initial));
    let controller = CounterController::new(&store, service);
    (store, controller)
}

pub type Recorded = Arc<Mutex<Vec<CounterViewState>>>;

/// Record every snapshot the store publishes.
pub fn record(store: &CounterStore) -> (Subscription, Recorded) {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&recorded);
    let subscription = store.subscribe(move |state| sink.lock().push(state.clone()));
    (subscription, recorded)
}

/// `is_loading` values over time, starting from `initial`, with repeats collapsed.
pub fn loading_transitions(initial: bool, recorded: &Recorded) -> Vec<bool> {
    let mut transitions = vec![initial];
    for state in recorded.lock().iter() {
        if transitions.last() != Some(&state.is_loading) {
            transitions.push(state.is_loading);
        }
    }
    transitions
}

// -- Config helpers -----------------------------------------------------------

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
