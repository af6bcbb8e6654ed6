//! Unidirectional data-flow primitives for the demo state containers.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ (snapshot / views)
//! ```
//!
//! - **State**: immutable value describing one container's data
//! - **Intent**: a parsed, typed state-changing operation
//! - **Reducer**: pure function transforming state based on intents

/// Marker trait for container state objects.
///
/// States are immutable values: reducers clone-and-replace rather than
/// mutate in place, and `PartialEq` lets callers detect real changes.
pub trait State: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intent objects.
///
/// Intents are the typed form of a namespaced [`Action`](crate::store::Action)
/// after its payload has been decoded.
pub trait Intent: Send + 'static {}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It must be
/// a pure function: (State, Intent) -> State.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
