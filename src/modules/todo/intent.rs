//! Intents for the todo container.

use serde::Deserialize;
use serde_json::Value;

use crate::store::{Action, Intent};

use super::state::TodoFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoIntent {
    AddTodo(String),
    ToggleTodo(u64),
    DeleteTodo(u64),
    EditTodo { id: u64, text: String },
    SetFilter(TodoFilter),
    ClearCompleted,
}

impl Intent for TodoIntent {}

/// Payload shape of `todo/editTodo`.
#[derive(Deserialize)]
struct EditPayload {
    id: u64,
    text: String,
}

impl TodoIntent {
    /// Parse a namespaced action into a typed intent.
    pub fn from_action(action: &Action) -> Option<Self> {
        if action.namespace() != super::NAMESPACE {
            return None;
        }
        match action.name() {
            "addTodo" => string_payload(action).map(TodoIntent::AddTodo),
            "toggleTodo" => id_payload(action).map(TodoIntent::ToggleTodo),
            "deleteTodo" => id_payload(action).map(TodoIntent::DeleteTodo),
            "editTodo" => {
                let decoded = action
                    .payload
                    .clone()
                    .and_then(|p| serde_json::from_value::<EditPayload>(p).ok());
                match decoded {
                    Some(EditPayload { id, text }) => Some(TodoIntent::EditTodo { id, text }),
                    None => {
                        tracing::warn!(kind = %action.kind, "expected {{id, text}} payload, dispatch is a no-op");
                        None
                    }
                }
            }
            "setFilter" => {
                let filter = action
                    .payload
                    .as_ref()
                    .and_then(Value::as_str)
                    .and_then(TodoFilter::parse);
                if filter.is_none() {
                    tracing::warn!(kind = %action.kind, "expected filter name payload, dispatch is a no-op");
                }
                filter.map(TodoIntent::SetFilter)
            }
            "clearCompleted" => Some(TodoIntent::ClearCompleted),
            other => {
                tracing::debug!(operation = %other, "unknown todo operation");
                None
            }
        }
    }
}

fn string_payload(action: &Action) -> Option<String> {
    let text = action
        .payload
        .as_ref()
        .and_then(Value::as_str)
        .map(str::to_string);
    if text.is_none() {
        tracing::warn!(kind = %action.kind, "expected string payload, dispatch is a no-op");
    }
    text
}

fn id_payload(action: &Action) -> Option<u64> {
    let id = action.payload.as_ref().and_then(Value::as_u64);
    if id.is_none() {
        tracing::warn!(kind = %action.kind, "expected todo id payload, dispatch is a no-op");
    }
    id
}
