//! Pengadaan Dashboard Menu
//!
//! Layered architecture:
//! - domain: Menu entities, settings document and errors
//! - hierarchy: The menu hierarchy engine (pure functions)
//! - navigation: Role filtering and active-item lookups
//! - icon: Icon name resolution
//! - repository: Settings storage abstractions and implementations
//! - commands: Stateful handlers that apply and persist menu changes

pub mod commands;
pub mod domain;
pub mod hierarchy;
pub mod icon;
pub mod navigation;
pub mod repository;

pub use domain::{AppSettings, MenuError, MenuItem, MenuItemPatch, MenuNode, MenuResult, NewMenuItem};
