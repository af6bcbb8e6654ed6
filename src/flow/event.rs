//! Event model: the shape of a recorded flow stage.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::FlowError;

/// One named point in the fixed five-step flow.
///
/// The enumeration is closed: every recorded event carries exactly one of
/// these kinds, in the order `Action < Reducer < Store < Selector < Render`
/// within a single dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowStage {
    Action,
    Reducer,
    Store,
    Selector,
    Render,
}

impl FlowStage {
    /// All stages in flow order.
    pub const ALL: [FlowStage; 5] = [
        FlowStage::Action,
        FlowStage::Reducer,
        FlowStage::Store,
        FlowStage::Selector,
        FlowStage::Render,
    ];

    /// Wire name of the stage (`"action"`, `"reducer"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowStage::Action => "action",
            FlowStage::Reducer => "reducer",
            FlowStage::Store => "store",
            FlowStage::Selector => "selector",
            FlowStage::Render => "render",
        }
    }

    /// Parse a wire name into a stage.
    ///
    /// Anything outside the closed enumeration fails with
    /// [`FlowError::InvalidStageKind`].
    pub fn parse(s: &str) -> Result<Self, FlowError> {
        match s {
            "action" => Ok(FlowStage::Action),
            "reducer" => Ok(FlowStage::Reducer),
            "store" => Ok(FlowStage::Store),
            "selector" => Ok(FlowStage::Selector),
            "render" => Ok(FlowStage::Render),
            other => Err(FlowError::InvalidStageKind(other.to_string())),
        }
    }

    /// Human-readable explanation shown next to the stage in the timeline.
    pub fn description(&self) -> &'static str {
        match self {
            FlowStage::Action => {
                "An action was dispatched! This is a plain object describing what happened."
            }
            FlowStage::Reducer => {
                "The reducer received the action and is calculating the new state."
            }
            FlowStage::Store => "The store has been updated with the new state from the reducer.",
            FlowStage::Selector => "Selectors are extracting specific data from the updated store.",
            FlowStage::Render => "Components are re-rendering with the new state data.",
        }
    }
}

impl fmt::Display for FlowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowStage {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlowStage::parse(s)
    }
}

/// A single recorded stage event. Immutable once recorded.
///
/// Timestamps are assigned by the timeline store, never by callers, so
/// ordering within a dispatch is monotonically non-decreasing. Snapshots
/// are only ever attached to Store-stage events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEvent {
    /// Stable identifier for presentation-layer keying.
    pub id: Uuid,
    pub stage: FlowStage,
    /// Namespaced identifier of the originating action (e.g. `"counter/increment"`).
    pub action_id: String,
    /// Wall-clock milliseconds at time of recording.
    pub timestamp_ms: u64,
    /// Opaque payload carried by the originating action, for display only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_before: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_after: Option<Value>,
}

impl FlowEvent {
    pub(crate) fn new(
        stage: FlowStage,
        action_id: &str,
        timestamp_ms: u64,
        payload: Option<Value>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            stage,
            action_id: action_id.to_string(),
            timestamp_ms,
            payload,
            state_before: None,
            state_after: None,
        }
    }

    /// Store-stage event carrying the before/after snapshots.
    pub(crate) fn with_snapshots(
        action_id: &str,
        timestamp_ms: u64,
        state_before: Value,
        state_after: Value,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            stage: FlowStage::Store,
            action_id: action_id.to_string(),
            timestamp_ms,
            payload: None,
            state_before: Some(state_before),
            state_after: Some(state_after),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_all_wire_names() {
        for stage in FlowStage::ALL {
            assert_eq!(FlowStage::parse(stage.as_str()), Ok(stage));
        }
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        let err = FlowStage::parse("middleware").unwrap_err();
        assert_eq!(err, FlowError::InvalidStageKind("middleware".to_string()));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(FlowStage::parse("Action").is_err());
        assert!("render".parse::<FlowStage>().is_ok());
    }

    #[test]
    fn all_is_in_flow_order() {
        assert_eq!(FlowStage::ALL[0], FlowStage::Action);
        assert_eq!(FlowStage::ALL[4], FlowStage::Render);
    }

    #[test]
    fn descriptions_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for stage in FlowStage::ALL {
            assert!(seen.insert(stage.description()));
        }
    }

    #[test]
    fn snapshots_only_on_store_events() {
        let plain = FlowEvent::new(FlowStage::Render, "counter/increment", 1, None);
        assert!(plain.state_before.is_none());
        assert!(plain.state_after.is_none());

        let store = FlowEvent::with_snapshots(
            "counter/increment",
            2,
            serde_json::json!({"value": 0}),
            serde_json::json!({"value": 1}),
        );
        assert_eq!(store.stage, FlowStage::Store);
        assert!(store.state_before.is_some());
        assert!(store.state_after.is_some());
    }
}
