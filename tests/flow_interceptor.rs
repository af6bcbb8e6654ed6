//! End-to-end flow scenarios through the interceptor and demo containers.

mod common;

use common::{intercepted_app, wait_for_events, wait_until_idle};
use fluxscope::flow::{Dispatch, FlowInterceptor, FlowStage, FlowTiming, TimelineStore};
use fluxscope::store::{Action, ACTION_DISPATCHED};
use fluxscope::FlowError;
use serde_json::{json, Value};

#[tokio::test]
async fn counter_increment_runs_the_full_flow() {
    let (mut store, timeline) = intercepted_app();

    store.dispatch(Action::new("counter/increment"));

    // The Action stage is recorded synchronously, before any timer fires.
    let first = timeline.events()[0].clone();
    assert_eq!(first.stage, FlowStage::Action);
    assert_eq!(first.action_id, "counter/increment");
    assert!(first.payload.is_none());
    assert!(timeline.is_animating());

    wait_for_events(&timeline, 5).await;
    wait_until_idle(&timeline).await;

    let stages: Vec<FlowStage> = timeline.events().iter().map(|e| e.stage).collect();
    assert_eq!(
        stages,
        vec![
            FlowStage::Action,
            FlowStage::Reducer,
            FlowStage::Store,
            FlowStage::Selector,
            FlowStage::Render
        ]
    );

    let events = timeline.events();
    assert!(events.iter().all(|e| e.action_id == "counter/increment"));
    for pair in events.windows(2) {
        assert!(pair[0].timestamp_ms <= pair[1].timestamp_ms);
    }

    let store_event = &timeline.events_by_stage(FlowStage::Store)[0];
    let before = store_event.state_before.as_ref().unwrap();
    let after = store_event.state_after.as_ref().unwrap();
    assert_eq!(before["counter"]["value"], json!(0));
    assert_eq!(before["counter"]["step"], json!(1));
    assert_eq!(after["counter"]["value"], json!(1));

    assert!(!timeline.is_animating());
    assert!(timeline.current_event().is_none());
    assert_eq!(store.inner().state().counter.value, 1);
}

#[tokio::test]
async fn add_todo_carries_payload_into_the_flow() {
    let (mut store, timeline) = intercepted_app();

    store.dispatch(Action::with_payload("todo/addTodo", json!("Buy milk")));

    let action_event = timeline.events()[0].clone();
    assert_eq!(action_event.payload, Some(json!("Buy milk")));

    wait_for_events(&timeline, 5).await;
    wait_until_idle(&timeline).await;

    let store_event = &timeline.events_by_stage(FlowStage::Store)[0];
    let after = store_event.state_after.as_ref().unwrap();
    assert_eq!(after["todo"]["todos"].as_array().unwrap().len(), 1);
    assert_eq!(after["todo"]["todos"][0]["text"], json!("Buy milk"));
    assert_eq!(store_event.state_before.as_ref().unwrap()["todo"]["todos"], json!([]));
}

#[test]
fn reserved_timeline_actions_are_never_intercepted() {
    let (mut store, timeline) = intercepted_app();

    let result = store.dispatch(Action::new(ACTION_DISPATCHED));

    assert_eq!(result.kind, ACTION_DISPATCHED);
    assert!(timeline.is_empty());
    assert!(!timeline.is_animating());
}

#[test]
fn no_change_dispatch_records_exactly_one_action_stage() {
    let (mut store, timeline) = intercepted_app();

    // counter/reset on a zeroed counter leaves the root state untouched.
    store.dispatch(Action::new("counter/reset"));

    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline.events()[0].stage, FlowStage::Action);
    assert_eq!(timeline.stats().action, 1);
    assert!(!timeline.is_animating());
}

#[tokio::test]
async fn overlapping_flows_stay_ordered_per_action() {
    let (mut store, timeline) = intercepted_app();

    store.dispatch(Action::new("counter/increment"));
    store.dispatch(Action::with_payload("todo/addTodo", json!("Walk the dog")));

    wait_for_events(&timeline, 10).await;
    wait_until_idle(&timeline).await;

    for action_id in ["counter/increment", "todo/addTodo"] {
        let flow: Vec<_> = timeline
            .events()
            .into_iter()
            .filter(|e| e.action_id == action_id)
            .collect();
        let stages: Vec<FlowStage> = flow.iter().map(|e| e.stage).collect();
        assert_eq!(
            stages,
            vec![
                FlowStage::Action,
                FlowStage::Reducer,
                FlowStage::Store,
                FlowStage::Selector,
                FlowStage::Render
            ],
            "flow for {action_id} out of order"
        );
        for pair in flow.windows(2) {
            assert!(pair[0].timestamp_ms <= pair[1].timestamp_ms);
        }
    }

    assert_eq!(store.inner().state().counter.value, 1);
    assert_eq!(store.inner().state().todo.todos.len(), 1);
}

#[tokio::test]
async fn dispatch_return_value_is_untouched_by_instrumentation() {
    let (mut store, _timeline) = intercepted_app();

    let action = Action::with_payload("counter/incrementByAmount", json!(5));
    let result = store.dispatch(action.clone());

    assert_eq!(result, action);
}

/// Dispatcher whose snapshots always fail.
struct Snapshotless;

impl Dispatch for Snapshotless {
    fn dispatch(&mut self, action: Action) -> Action {
        action
    }

    fn snapshot(&self) -> Result<Value, FlowError> {
        Err(FlowError::SnapshotUnavailable("container offline".into()))
    }
}

#[test]
fn snapshot_failure_degrades_to_action_only() {
    common::init_tracing();
    let timeline = TimelineStore::new();
    let mut store = FlowInterceptor::with_timing(Snapshotless, timeline.clone(), FlowTiming::fast());

    let result = store.dispatch(Action::with_payload("counter/increment", json!(null)));

    assert_eq!(result.kind, "counter/increment");
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline.events()[0].stage, FlowStage::Action);
    assert!(!timeline.is_animating());
}
