//! Stage sequencer: the fixed-delay cascade behind a qualifying dispatch.
//!
//! Rather than nesting timer callbacks, the sequencer builds an explicit
//! ordered plan of (delay, step) pairs and walks it in a single spawned
//! task. Each step performs exactly one timeline mutation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::flow::event::FlowStage;
use crate::flow::timeline::TimelineStore;

/// Fixed pacing between follow-on stages.
///
/// The delays are purely presentational: they simulate reducer/selector/
/// render latency so a human can watch the flow, they are not a correctness
/// mechanism. Each delay is relative to the previous step firing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowTiming {
    pub reducer_delay: Duration,
    pub store_delay: Duration,
    pub selector_delay: Duration,
    pub render_delay: Duration,
    pub complete_delay: Duration,
}

impl FlowTiming {
    /// Same delay between every step.
    pub fn uniform(delay: Duration) -> Self {
        Self {
            reducer_delay: delay,
            store_delay: delay,
            selector_delay: delay,
            render_delay: delay,
            complete_delay: delay,
        }
    }

    /// Near-instant pacing for tests.
    pub fn fast() -> Self {
        Self::uniform(Duration::from_millis(1))
    }
}

impl Default for FlowTiming {
    fn default() -> Self {
        Self::uniform(Duration::from_millis(400))
    }
}

/// One scheduled step of the cascade.
#[derive(Debug, Clone, PartialEq)]
enum StageStep {
    Record(FlowStage),
    RecordStore {
        state_before: Value,
        state_after: Value,
    },
    Complete,
}

/// Runs the Reducer → Store → Selector → Render → complete cascade for one
/// dispatch. Fire-and-forget: the caller is never blocked.
pub struct StageSequencer {
    timeline: TimelineStore,
    timing: FlowTiming,
}

impl StageSequencer {
    pub fn new(timeline: TimelineStore, timing: FlowTiming) -> Self {
        Self { timeline, timing }
    }

    /// The ordered (delay, step) plan for one flow.
    fn plan(&self, state_before: Value, state_after: Value) -> Vec<(Duration, StageStep)> {
        vec![
            (self.timing.reducer_delay, StageStep::Record(FlowStage::Reducer)),
            (
                self.timing.store_delay,
                StageStep::RecordStore {
                    state_before,
                    state_after,
                },
            ),
            (self.timing.selector_delay, StageStep::Record(FlowStage::Selector)),
            (self.timing.render_delay, StageStep::Record(FlowStage::Render)),
            (self.timing.complete_delay, StageStep::Complete),
        ]
    }

    /// Spawn the cascade on the current tokio runtime.
    ///
    /// The handle is returned so a caller that wants cancel-on-clear can
    /// abort it; the interceptor detaches it (a cleared timeline simply
    /// receives any still-scheduled stages).
    pub fn spawn(self, action_id: String, state_before: Value, state_after: Value) -> JoinHandle<()> {
        let steps = self.plan(state_before, state_after);
        let timeline = self.timeline;
        tokio::spawn(async move {
            for (delay, step) in steps {
                tokio::time::sleep(delay).await;
                match step {
                    StageStep::Record(stage) => {
                        timeline.record_stage(stage, &action_id, None);
                    }
                    StageStep::RecordStore {
                        state_before,
                        state_after,
                    } => {
                        timeline.record_store_stage(&action_id, state_before, state_after);
                    }
                    StageStep::Complete => {
                        timeline.complete_flow();
                    }
                }
            }
            tracing::debug!(action_id = %action_id, "flow cascade finished");
        })
    }
}
