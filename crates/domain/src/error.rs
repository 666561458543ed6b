//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HomeDashError`] via `#[from]`.

use crate::device::Attribute;

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum HomeDashError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("control rejected")]
    Control(#[from] ControlError),
}

/// A domain invariant was violated while building a value.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("a house needs at least one floor")]
    NoFloors,

    #[error("grid cell ({row}, {col}) points to room {index} but the floor has {rooms} rooms")]
    GridIndexOutOfRange {
        row: usize,
        col: usize,
        index: usize,
        rooms: usize,
    },

    #[error("room {index} is placed more than once in the grid")]
    DuplicateGridRoom { index: usize },
}

/// Lookup of an addressed object failed.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A control event could not be applied to a device.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ControlError {
    #[error("device {device} does not expose {attribute}")]
    Unsupported { device: String, attribute: Attribute },

    #[error("{attribute} needs a value")]
    MissingValue { attribute: Attribute },
}
