//! Repository Layer
//!
//! Settings storage abstractions and implementations.

mod traits;
mod json_file;
mod memory;

#[cfg(test)]
mod tests;

pub use traits::{RepositoryError, RepositoryResult, SettingsRepository};
pub use json_file::{JsonFileSettingsRepository, SETTINGS_KEY};
pub use memory::InMemorySettingsRepository;
