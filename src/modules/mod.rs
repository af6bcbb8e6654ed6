//! Demo state containers driven through the flow interceptor.
//!
//! Each container follows the same shape: a typed state, an intent enum
//! parsed from namespaced actions, and a pure reducer.

pub mod auth;
pub mod counter;
pub mod todo;
