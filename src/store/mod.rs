//! Action model, data-flow traits and the demo root store.

mod action;
mod app;
mod mvi;

pub use action::{
    Action, ACTION_DISPATCHED, FLOW_COMPLETED, STATE_UPDATED, TIMELINE_CLEARED,
    TIMELINE_NAMESPACE,
};
pub use app::{AppStore, RootState};
pub use mvi::{Intent, Reducer, State};
