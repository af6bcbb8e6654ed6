//! Flow tracking: event model, timeline store, interceptor and selectors.
//!
//! # Architecture
//!
//! ```text
//! dispatch ──→ FlowInterceptor ──→ inner Dispatch (state containers)
//!                   │
//!                   ├─ Action stage (synchronous)
//!                   └─ StageSequencer (timers): Reducer → Store → Selector
//!                      → Render → complete
//!                                │
//!                         TimelineStore ──→ TimelineSelectors ──→ views
//! ```
//!
//! Data flows one way: dispatch → intercept → record → observe. The
//! timeline store is the only shared mutable resource; everything
//! downstream of it is read-only.

mod event;
mod interceptor;
mod selectors;
mod sequencer;
mod timeline;

pub use event::{FlowEvent, FlowStage};
pub use interceptor::{Dispatch, FlowInterceptor};
pub use selectors::TimelineSelectors;
pub use sequencer::{FlowTiming, StageSequencer};
pub use timeline::{StageCounts, TimelineStore};
