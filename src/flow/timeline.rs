//! Timeline store: append-only log of flow stage events.
//!
//! The store is the only shared mutable resource in the flow core. It is
//! written by the interceptor (and its stage sequencer) and read by the
//! selector layer. All mutations go through four entry points — record a
//! stage, record a store stage with snapshots, complete the flow, clear —
//! mirroring the four reducers of the original timeline slice.

use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::watch;

use crate::error::FlowError;
use crate::flow::event::{FlowEvent, FlowStage};

/// Per-stage event counts, computed by [`TimelineStore::stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageCounts {
    pub action: usize,
    pub reducer: usize,
    pub store: usize,
    pub selector: usize,
    pub render: usize,
}

impl StageCounts {
    pub fn count(&self, stage: FlowStage) -> usize {
        match stage {
            FlowStage::Action => self.action,
            FlowStage::Reducer => self.reducer,
            FlowStage::Store => self.store,
            FlowStage::Selector => self.selector,
            FlowStage::Render => self.render,
        }
    }

    pub fn total(&self) -> usize {
        self.action + self.reducer + self.store + self.selector + self.render
    }

    fn bump(&mut self, stage: FlowStage) {
        match stage {
            FlowStage::Action => self.action += 1,
            FlowStage::Reducer => self.reducer += 1,
            FlowStage::Store => self.store += 1,
            FlowStage::Selector => self.selector += 1,
            FlowStage::Render => self.render += 1,
        }
    }
}

/// Owned state of the timeline. Single instance per store, reset only by
/// [`TimelineStore::clear`].
#[derive(Debug)]
struct TimelineState {
    /// Insertion order is chronological order.
    events: Vec<FlowEvent>,
    current_event: Option<FlowEvent>,
    is_animating: bool,
    /// Reference data, built once at init and never mutated.
    stage_descriptions: HashMap<FlowStage, &'static str>,
    /// High-water mark used to keep recorded timestamps non-decreasing
    /// even if the wall clock steps backwards.
    last_timestamp_ms: u64,
}

impl TimelineState {
    fn new() -> Self {
        let stage_descriptions = FlowStage::ALL
            .iter()
            .map(|stage| (*stage, stage.description()))
            .collect();
        Self {
            events: Vec::new(),
            current_event: None,
            is_animating: false,
            stage_descriptions,
            last_timestamp_ms: 0,
        }
    }

    fn next_timestamp(&mut self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.last_timestamp_ms = now.max(self.last_timestamp_ms);
        self.last_timestamp_ms
    }

    fn push(&mut self, event: FlowEvent) {
        self.current_event = Some(event.clone());
        self.events.push(event);
    }
}

/// Cheaply clonable handle to the timeline.
///
/// Readers always observe a consistent snapshot: every query acquires the
/// read lock exactly once, so a partially applied mutation is never visible.
/// Change observers subscribe to a generation counter that is bumped after
/// every mutation.
#[derive(Clone)]
pub struct TimelineStore {
    inner: Arc<RwLock<TimelineState>>,
    changed: Arc<watch::Sender<u64>>,
}

impl TimelineStore {
    pub fn new() -> Self {
        let (changed, _) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(TimelineState::new())),
            changed: Arc::new(changed),
        }
    }

    /// Append a stage event with the current (clamped) timestamp and make it
    /// the current event. Recording an Action stage also raises the
    /// animation flag for the flow that is starting.
    pub fn record_stage(&self, stage: FlowStage, action_id: &str, payload: Option<Value>) {
        {
            let mut state = self.inner.write();
            let timestamp = state.next_timestamp();
            state.push(FlowEvent::new(stage, action_id, timestamp, payload));
            if stage == FlowStage::Action {
                state.is_animating = true;
            }
        }
        tracing::debug!(stage = %stage, action_id = %action_id, "stage recorded");
        self.bump_generation();
    }

    /// Record a stage supplied as a wire name, for callers outside the
    /// typed interceptor path. An unrecognized name records nothing and
    /// fails with [`FlowError::InvalidStageKind`].
    pub fn record_raw_stage(
        &self,
        stage: &str,
        action_id: &str,
        payload: Option<Value>,
    ) -> Result<(), FlowError> {
        let stage = FlowStage::parse(stage)?;
        self.record_stage(stage, action_id, payload);
        Ok(())
    }

    /// Append a Store-stage event carrying the before/after snapshots.
    ///
    /// The store does not compare the snapshots; deciding whether the state
    /// actually changed is the interceptor's job.
    pub fn record_store_stage(&self, action_id: &str, state_before: Value, state_after: Value) {
        {
            let mut state = self.inner.write();
            let timestamp = state.next_timestamp();
            state.push(FlowEvent::with_snapshots(
                action_id,
                timestamp,
                state_before,
                state_after,
            ));
        }
        tracing::debug!(action_id = %action_id, "store stage recorded with snapshots");
        self.bump_generation();
    }

    /// Terminal signal for a flow: animation stops, no current event.
    /// Idempotent.
    pub fn complete_flow(&self) {
        {
            let mut state = self.inner.write();
            state.is_animating = false;
            state.current_event = None;
        }
        self.bump_generation();
    }

    /// Reset to the initial empty state. Stage descriptions survive.
    /// Idempotent. Does not cancel in-flight stage cascades; any stage they
    /// record later is simply appended to the now-empty log.
    pub fn clear(&self) {
        let cleared = {
            let mut state = self.inner.write();
            let cleared = state.events.len();
            state.events.clear();
            state.current_event = None;
            state.is_animating = false;
            cleared
        };
        tracing::info!(cleared_events = cleared, "timeline cleared");
        self.bump_generation();
    }

    /// Full event log in chronological order.
    pub fn events(&self) -> Vec<FlowEvent> {
        self.inner.read().events.clone()
    }

    /// Last `n` events, chronological order. Never more than `n`.
    pub fn latest_events(&self, n: usize) -> Vec<FlowEvent> {
        let state = self.inner.read();
        let start = state.events.len().saturating_sub(n);
        state.events[start..].to_vec()
    }

    /// Events of one stage kind, preserving recording order.
    pub fn events_by_stage(&self, stage: FlowStage) -> Vec<FlowEvent> {
        self.inner
            .read()
            .events
            .iter()
            .filter(|e| e.stage == stage)
            .cloned()
            .collect()
    }

    /// Per-stage counts over the whole log.
    pub fn stats(&self) -> StageCounts {
        let state = self.inner.read();
        let mut counts = StageCounts::default();
        for event in &state.events {
            counts.bump(event.stage);
        }
        counts
    }

    pub fn current_event(&self) -> Option<FlowEvent> {
        self.inner.read().current_event.clone()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.read().is_animating
    }

    pub fn len(&self) -> usize {
        self.inner.read().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().events.is_empty()
    }

    /// Static explanation text for a stage.
    pub fn stage_description(&self, stage: FlowStage) -> &'static str {
        self.inner.read().stage_descriptions[&stage]
    }

    /// Observe timeline changes. The watched value is a generation counter
    /// bumped after every mutation; consumers re-query on each change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changed.subscribe()
    }

    /// Current mutation generation.
    pub fn generation(&self) -> u64 {
        *self.changed.borrow()
    }

    fn bump_generation(&self) {
        self.changed.send_modify(|generation| *generation += 1);
    }
}

impl Default for TimelineStore {
    fn default() -> Self {
        Self::new()
    }
}
