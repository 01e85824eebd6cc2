//! Commands Layer
//!
//! Handlers that bridge the editing UI to the engine and storage.

mod menu_cmd;

pub use menu_cmd::*;
