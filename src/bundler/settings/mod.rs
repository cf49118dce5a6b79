//! Configuration structures for bundling operations.
//!
//! This module provides the product [`Config`] loaded from JSON, its
//! [`Component`] entries, the derived identity fields, and the run-level
//! [`Settings`] assembled with [`SettingsBuilder`].

mod builder;
mod component;
mod config;
mod core;
pub mod identity;

// Re-export all public types
pub use builder::SettingsBuilder;
pub use component::{Component, InstallFile};
pub use config::Config;
pub use self::core::Settings;
