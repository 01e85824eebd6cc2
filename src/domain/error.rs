//! Domain Layer - Errors
//!
//! The error type every menu operation reports.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Common result type for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Menu-level errors
///
/// Every variant is recoverable: the operation that produced it left the
/// input list untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MenuError {
    /// A required field was empty
    #[error("Invalid input: {0}")]
    Validation(String),

    /// An item with this id already exists
    #[error("Menu id already exists: {0}")]
    DuplicateId(String),

    /// The targeted item does not exist
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// The targeted item is a protected system entry
    #[error("Menu item is not editable: {0}")]
    NotEditable(String),

    /// Moving `moved` under `target` would make it its own ancestor
    #[error("Cannot move menu '{moved}' into its own descendant '{target}'")]
    Cycle { moved: String, target: String },
}
