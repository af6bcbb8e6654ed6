//! Namespaced actions: the state-changing events that cross the dispatch seam.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Namespace reserved for the timeline's own bookkeeping. Actions in this
/// namespace are never intercepted.
pub const TIMELINE_NAMESPACE: &str = "timeline";

/// Reserved stage-recording identifiers. Exported so external containers
/// can recognize (and avoid colliding with) the timeline's bookkeeping.
pub const ACTION_DISPATCHED: &str = "timeline/actionDispatched";
pub const STATE_UPDATED: &str = "timeline/stateUpdated";
pub const FLOW_COMPLETED: &str = "timeline/flowCompleted";
pub const TIMELINE_CLEARED: &str = "timeline/cleared";

/// A state-changing event with a namespaced `"<domain>/<operation>"`
/// identifier and an optional opaque payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Action {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    pub fn with_payload(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload),
        }
    }

    /// The `"<domain>"` part of the identifier. An identifier without a
    /// slash is all namespace.
    pub fn namespace(&self) -> &str {
        self.kind.split('/').next().unwrap_or(&self.kind)
    }

    /// The `"<operation>"` part of the identifier, empty if absent.
    pub fn name(&self) -> &str {
        self.kind
            .split_once('/')
            .map(|(_, name)| name)
            .unwrap_or("")
    }

    /// Whether this action belongs to the timeline's reserved namespace.
    pub fn is_reserved(&self) -> bool {
        self.namespace() == TIMELINE_NAMESPACE
    }
}
