//! State for the counter container.

use serde::{Deserialize, Serialize};

use crate::store::State;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub value: i64,
    pub step: i64,
}

impl Default for CounterState {
    fn default() -> Self {
        Self { value: 0, step: 1 }
    }
}

impl State for CounterState {}
