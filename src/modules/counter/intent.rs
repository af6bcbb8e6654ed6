//! Intents for the counter container.

use serde_json::Value;

use crate::store::{Action, Intent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    Increment,
    Decrement,
    Reset,
    SetStep(i64),
    IncrementByAmount(i64),
}

impl Intent for CounterIntent {}

impl CounterIntent {
    /// Parse a namespaced action into a typed intent.
    ///
    /// Actions outside the `counter/` namespace, unknown operations and
    /// malformed payloads all yield `None` (a no-op dispatch).
    pub fn from_action(action: &Action) -> Option<Self> {
        if action.namespace() != super::NAMESPACE {
            return None;
        }
        match action.name() {
            "increment" => Some(CounterIntent::Increment),
            "decrement" => Some(CounterIntent::Decrement),
            "reset" => Some(CounterIntent::Reset),
            "setStep" => integer_payload(action).map(CounterIntent::SetStep),
            "incrementByAmount" => integer_payload(action).map(CounterIntent::IncrementByAmount),
            other => {
                tracing::debug!(operation = %other, "unknown counter operation");
                None
            }
        }
    }
}

fn integer_payload(action: &Action) -> Option<i64> {
    let value = action.payload.as_ref().and_then(Value::as_i64);
    if value.is_none() {
        tracing::warn!(kind = %action.kind, "expected integer payload, dispatch is a no-op");
    }
    value
}
