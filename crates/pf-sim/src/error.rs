//! Error types for pf-sim.

use pf_core::NodeId;
use pf_field::FieldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        name:   &'static str,
        reason: String,
    },

    #[error("duplicate node id {0} in node list")]
    DuplicateNodeId(NodeId),

    #[error(transparent)]
    Field(#[from] FieldError),
}

pub type SimResult<T> = Result<T, SimError>;
