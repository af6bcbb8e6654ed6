//! Todo list demo container.
//!
//! CRUD-style mutations over a list, plus a view filter. Exercises the
//! string- and object-payload shapes of the flow core.

mod intent;
mod reducer;
mod state;

pub use intent::TodoIntent;
pub use reducer::TodoReducer;
pub use state::{TodoFilter, TodoItem, TodoState, TodoStats};

/// Action namespace for this container.
pub const NAMESPACE: &str = "todo";
