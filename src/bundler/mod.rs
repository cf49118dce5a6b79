//! Installer bundling pipeline.
//!
//! Turns a product [`Config`] into an Inno Setup script, and optionally into
//! a compiled and signed installer executable.

pub mod builder;
pub mod error;
pub mod platform;
pub mod settings;

pub use builder::Bundler;
pub use error::{Error, Result};
pub use platform::windows::{
    inno::{BundleReport, CompileOutcome},
    sign::SignOutcome,
};
pub use settings::{Component, Config, InstallFile, Settings, SettingsBuilder};
