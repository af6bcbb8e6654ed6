//! Flow interceptor: the decorator around the dispatch entry point.
//!
//! Wraps a [`Dispatch`] implementor and turns every qualifying dispatch
//! into a bounded sequence of recorded stages: the Action stage is recorded
//! synchronously, the rest (Reducer, Store, Selector, Render, completion)
//! fire on the sequencer's timers only when the watched state actually
//! changed. Interception is transparent — the caller's result is never
//! blocked or altered, and instrumentation failures are logged, not raised.

use serde_json::Value;

use crate::error::FlowError;
use crate::flow::event::FlowStage;
use crate::flow::sequencer::{FlowTiming, StageSequencer};
use crate::flow::timeline::TimelineStore;
use crate::store::Action;

/// The seam between the flow core and the external state containers.
///
/// `dispatch` forwards an action and hands it back (the Redux `next(action)`
/// shape); `snapshot` captures the full state for before/after comparison
/// and may fail with [`FlowError::SnapshotUnavailable`].
pub trait Dispatch {
    fn dispatch(&mut self, action: Action) -> Action;

    fn snapshot(&self) -> Result<Value, FlowError>;
}

/// Decorator that instruments a dispatcher with flow tracking.
///
/// Follow-on stages are scheduled via `tokio::spawn`, so dispatches that
/// change state must happen inside a tokio runtime context. Dispatches that
/// do not change state never touch the runtime.
pub struct FlowInterceptor<D> {
    inner: D,
    timeline: TimelineStore,
    timing: FlowTiming,
}

impl<D: Dispatch> FlowInterceptor<D> {
    pub fn new(inner: D, timeline: TimelineStore) -> Self {
        Self::with_timing(inner, timeline, FlowTiming::default())
    }

    pub fn with_timing(inner: D, timeline: TimelineStore, timing: FlowTiming) -> Self {
        Self {
            inner,
            timeline,
            timing,
        }
    }

    pub fn timeline(&self) -> &TimelineStore {
        &self.timeline
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }

    pub fn into_inner(self) -> D {
        self.inner
    }

    fn capture_snapshot(&self, phase: &str, action_id: &str) -> Option<Value> {
        match self.inner.snapshot() {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                tracing::warn!(
                    action_id = %action_id,
                    phase = %phase,
                    error = %err,
                    "snapshot unavailable, flow degrades to the action stage"
                );
                None
            }
        }
    }
}

impl<D: Dispatch> Dispatch for FlowInterceptor<D> {
    fn dispatch(&mut self, action: Action) -> Action {
        // The timeline's own bookkeeping actions must never be intercepted,
        // or recording a stage would recursively record more stages.
        if action.is_reserved() {
            return self.inner.dispatch(action);
        }

        let action_id = action.kind.clone();
        let state_before = self.capture_snapshot("before", &action_id);

        let was_animating = self.timeline.is_animating();
        self.timeline
            .record_stage(FlowStage::Action, &action_id, action.payload.clone());

        let result = self.inner.dispatch(action);

        let state_after = self.capture_snapshot("after", &action_id);

        match (state_before, state_after) {
            (Some(before), Some(after)) if before != after => {
                let sequencer = StageSequencer::new(self.timeline.clone(), self.timing.clone());
                // Detached: clearing the timeline does not cancel the cascade.
                let _cascade = sequencer.spawn(action_id, before, after);
            }
            _ => {
                // No distinguishable change: the lone Action stage stands
                // alone. Settle the flag immediately unless an earlier flow
                // is still animating — its own cascade will complete it.
                if !was_animating {
                    self.timeline.complete_flow();
                }
                tracing::debug!(action_id = %action_id, "dispatch produced no state change");
            }
        }

        result
    }

    fn snapshot(&self) -> Result<Value, FlowError> {
        self.inner.snapshot()
    }
}
