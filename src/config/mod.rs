//! Bundle configuration handling
//!
//! This module contains:
//! - [`bundle`]: the declarative bundle config document and its validation
//! - [`locate`]: discovery of the config file by walking up the directory
//!   tree from a starting path

pub mod bundle;
pub mod locate;

// Re-export commonly used types
pub use bundle::{
    BundleConfig, EditConfig, FunctionBuild, FunctionDefinition, JobDefinition, validate_bundle,
};
pub use locate::{ConfigLocation, locate};
