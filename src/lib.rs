//! fluxscope — a step-by-step visualizer core for unidirectional state flow.
//!
//! Intercepts every state-changing dispatch and synthesizes a paced
//! sequence of stage events (action → reducer → store → selector → render)
//! into an observable timeline that presentation layers subscribe to.
//!
//! ```no_run
//! use fluxscope::flow::{Dispatch, FlowInterceptor, TimelineStore};
//! use fluxscope::store::{Action, AppStore};
//!
//! # async fn demo() {
//! let timeline = TimelineStore::new();
//! let mut store = FlowInterceptor::new(AppStore::new(), timeline.clone());
//!
//! let mut changes = timeline.subscribe();
//! store.dispatch(Action::new("counter/increment"));
//!
//! // Presentation layer: re-query on every timeline change.
//! while changes.changed().await.is_ok() {
//!     let _ = timeline.latest_events(10);
//! }
//! # }
//! ```

pub mod error;
pub mod flow;
pub mod modules;
pub mod store;

pub use error::FlowError;
pub use flow::{
    Dispatch, FlowEvent, FlowInterceptor, FlowStage, FlowTiming, TimelineSelectors, TimelineStore,
};
pub use store::Action;
