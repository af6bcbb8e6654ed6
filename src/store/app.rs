//! Demo root store combining the state containers.

use serde::Serialize;
use serde_json::Value;

use crate::error::FlowError;
use crate::flow::Dispatch;
use crate::modules::auth::{AuthIntent, AuthReducer, AuthState};
use crate::modules::counter::{CounterIntent, CounterReducer, CounterState};
use crate::modules::todo::{TodoIntent, TodoReducer, TodoState};
use crate::store::action::Action;
use crate::store::mvi::Reducer;

/// Combined state of all demo containers. Serialized as a whole to form
/// the snapshots attached to Store-stage events.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RootState {
    pub counter: CounterState,
    pub todo: TodoState,
    pub auth: AuthState,
}

/// Root container routing actions to its slices by namespace.
///
/// Unknown namespaces and unknown operations are no-op dispatches, the
/// same way an unmatched action falls through every Redux reducer.
#[derive(Debug, Default)]
pub struct AppStore {
    state: RootState,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RootState {
        &self.state
    }
}

impl Dispatch for AppStore {
    fn dispatch(&mut self, action: Action) -> Action {
        match action.namespace() {
            crate::modules::counter::NAMESPACE => {
                if let Some(intent) = CounterIntent::from_action(&action) {
                    self.state.counter = CounterReducer::reduce(self.state.counter.clone(), intent);
                }
            }
            crate::modules::todo::NAMESPACE => {
                if let Some(intent) = TodoIntent::from_action(&action) {
                    self.state.todo = TodoReducer::reduce(self.state.todo.clone(), intent);
                }
            }
            crate::modules::auth::NAMESPACE => {
                if let Some(intent) = AuthIntent::from_action(&action) {
                    self.state.auth = AuthReducer::reduce(self.state.auth.clone(), intent);
                }
            }
            other => {
                tracing::debug!(namespace = %other, kind = %action.kind, "no slice for action");
            }
        }
        action
    }

    fn snapshot(&self) -> Result<Value, FlowError> {
        serde_json::to_value(&self.state)
            .map_err(|err| FlowError::SnapshotUnavailable(err.to_string()))
    }
}
