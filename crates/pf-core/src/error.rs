//! Base error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `FlowError` via `From` impls or wrap it as one variant.  Both patterns
//! are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::NodeId;

/// The top-level error type for `pf-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `pf-*` crates.
pub type FlowResult<T> = Result<T, FlowError>;
