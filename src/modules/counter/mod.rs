//! Counter demo container.
//!
//! The smallest state container: a value and a step size. Its actions
//! exercise the no-payload and scalar-payload shapes of the flow core.

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;

/// Action namespace for this container.
pub const NAMESPACE: &str = "counter";
