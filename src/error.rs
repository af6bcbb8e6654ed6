//! Error types for the flow-tracking core.

use thiserror::Error;

/// Errors raised by the flow instrumentation.
///
/// Both variants are recovered locally by the interceptor: instrumentation
/// failure must never block or alter the underlying dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// A stage value outside the closed enumeration was supplied to a
    /// recording operation.
    #[error("unrecognized flow stage kind '{0}'")]
    InvalidStageKind(String),

    /// The state container could not produce a consistent snapshot.
    /// The flow degrades to recording only the Action stage.
    #[error("state snapshot unavailable: {0}")]
    SnapshotUnavailable(String),
}
