mod common;

use common::{
    instant_fail, instant_ok, loading_transitions, record, screen, screen_with,
    GatedCounterService,
};
use counter_mvi::service::{FailingCounterService, ServiceError};
use counter_mvi::ui::counter::CounterViewState;
use std::sync::Arc;
use std::time::Duration;

async fn wait_for_fetches(service: &GatedCounterService, expected: usize) {
    for _ in 0..100 {
        if service.fetches() >= expected {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert_eq!(service.fetches(), expected);
}

#[tokio::test]
async fn on_appear_success_applies_fetched_value() {
    let (store, controller) = screen(instant_ok(100));

    controller.handle_on_appear().unwrap().await.unwrap();

    assert_eq!(store.count(), 100);
    assert!(!store.is_loading());
    assert!(store.error_message().is_none());
}

#[tokio::test]
async fn on_appear_failure_sets_error_and_keeps_count() {
    let (store, controller) = screen(instant_fail());

    controller.handle_on_appear().unwrap().await.unwrap();

    assert_eq!(store.count(), 0);
    assert!(!store.is_loading());
    assert_eq!(
        store.error_message().as_deref(),
        Some("Failed to fetch count: Invalid response from server.")
    );
}

#[tokio::test]
async fn on_appear_network_failure_reports_connection_lost() {
    let service = FailingCounterService::new()
        .with_error(ServiceError::Network)
        .with_latency(Duration::ZERO);
    let (store, controller) = screen(Arc::new(service));

    controller.handle_on_appear().unwrap().await.unwrap();

    assert_eq!(store.count(), 0);
    assert!(!store.is_loading());
    assert_eq!(
        store.error_message().as_deref(),
        Some("Failed to fetch count: Network connection lost.")
    );
}

#[test]
fn on_appear_outside_runtime_spawns_nothing() {
    let (store, controller) = screen(instant_ok(100));
    let (subscription, recorded) = record(&store);

    assert!(controller.handle_on_appear().is_none());

    assert!(!store.is_loading());
    assert!(recorded.lock().is_empty());
    drop(subscription);
}

#[test]
fn three_increments() {
    let (store, controller) = screen(instant_ok(0));
    controller.tap_increment();
    controller.tap_increment();
    controller.tap_increment();
    assert_eq!(store.count(), 3);
}

#[test]
fn decrement_then_reset_from_five() {
    let (store, controller) = screen_with(CounterViewState::with_count(5), instant_ok(0));
    controller.tap_decrement();
    assert_eq!(store.count(), 4);
    controller.tap_reset();
    assert_eq!(store.count(), 0);
}

#[test]
fn taps_after_store_dropped_are_noops() {
    let (store, controller) = screen_with(CounterViewState::with_count(3), instant_ok(0));
    let (subscription, recorded) = record(&store);
    drop(store);

    controller.tap_increment();
    controller.tap_decrement();
    controller.tap_reset();

    assert!(recorded.lock().is_empty());
    drop(subscription);
}

#[tokio::test]
async fn on_appear_after_store_dropped_is_noop() {
    let (store, controller) = screen(instant_ok(100));
    drop(store);
    assert!(controller.handle_on_appear().is_none());
}

#[tokio::test]
async fn loading_brackets_successful_fetch() {
    let (store, controller) = screen(instant_ok(100));
    let (_subscription, recorded) = record(&store);

    controller.handle_on_appear().unwrap().await.unwrap();

    assert_eq!(loading_transitions(false, &recorded), vec![false, true, false]);
    // Loading clears before the value lands
    let states = recorded.lock();
    assert_eq!(states.len(), 3);
    assert_eq!(states[1], CounterViewState::with_count(0));
    assert_eq!(states[2], CounterViewState::with_count(100));
}

#[tokio::test]
async fn loading_brackets_failed_fetch() {
    let (store, controller) = screen(instant_fail());
    let (_subscription, recorded) = record(&store);

    controller.handle_on_appear().unwrap().await.unwrap();

    assert_eq!(loading_transitions(false, &recorded), vec![false, true, false]);
    let states = recorded.lock();
    let last = states.last().unwrap();
    assert!(!last.is_loading);
    assert!(last.error_message.is_some());
}

#[tokio::test]
async fn loading_stays_set_while_fetch_in_flight() {
    let service = GatedCounterService::new(9);
    let (store, controller) = screen(service.clone());

    let handle = controller.handle_on_appear().unwrap();
    wait_for_fetches(&service, 1).await;
    assert!(store.is_loading());

    service.release();
    handle.await.unwrap();
    assert!(!store.is_loading());
    assert_eq!(store.count(), 9);
}

#[tokio::test]
async fn success_clears_previous_error() {
    let initial = CounterViewState {
        count: 1,
        is_loading: false,
        error_message: Some("Failed to fetch count: Network connection lost.".into()),
    };
    let (store, controller) = screen_with(initial, instant_ok(100));

    controller.handle_on_appear().unwrap().await.unwrap();

    assert!(store.error_message().is_none());
    assert_eq!(store.count(), 100);
}

#[tokio::test]
async fn store_dropped_mid_flight_discards_result() {
    let service = GatedCounterService::new(100);
    let (store, controller) = screen(service.clone());
    let (subscription, recorded) = record(&store);

    let handle = controller.handle_on_appear().unwrap();
    assert!(store.is_loading());
    drop(store);

    service.release();
    handle.await.unwrap();

    // Only the initial loading=true was ever published
    assert_eq!(recorded.lock().len(), 1);
    controller.tap_increment();
    assert_eq!(recorded.lock().len(), 1);
    drop(subscription);
}

#[tokio::test]
async fn overlapping_on_appear_calls_both_fetch() {
    let service = GatedCounterService::new(7);
    let (store, controller) = screen(service.clone());

    let first = controller.handle_on_appear().unwrap();
    let second = controller.handle_on_appear().unwrap();
    wait_for_fetches(&service, 2).await;

    service.release();
    service.release();
    first.await.unwrap();
    second.await.unwrap();

    assert_eq!(store.count(), 7);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn taps_during_fetch_are_overwritten_by_result() {
    let service = GatedCounterService::new(50);
    let (store, controller) = screen(service.clone());

    let handle = controller.handle_on_appear().unwrap();
    controller.tap_increment();
    controller.tap_increment();
    assert_eq!(store.count(), 2);
    assert!(store.is_loading());

    service.release();
    handle.await.unwrap();
    assert_eq!(store.count(), 50);
}
