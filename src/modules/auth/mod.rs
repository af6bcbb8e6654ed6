//! Auth demo container.
//!
//! Login/logout lifecycle with a loading flag, so flows can be triggered
//! from both user actions and (simulated) asynchronous results.

mod intent;
mod reducer;
mod state;

pub use intent::AuthIntent;
pub use reducer::AuthReducer;
pub use state::{AuthState, User, UserRole};

/// Action namespace for this container.
pub const NAMESPACE: &str = "auth";
