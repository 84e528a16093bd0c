//! Wire shapes for the Bundle Hub API
//!
//! Every struct here mirrors the remote schema 1:1 and carries no behavior
//! beyond small accessors and request validation:
//! - [`bundle`]: bundle lifecycle requests and responses
//! - [`functions`]: deployed function descriptions
//! - [`jobs`]: scheduled jobs, executions and logs
//! - [`secrets`]: bundle secrets
//! - [`editor`]: edit session status
//! - [`paging`]: list paging metadata

pub mod bundle;
pub mod editor;
pub mod functions;
pub mod jobs;
pub mod paging;
pub mod secrets;

// Re-export commonly used types
pub use bundle::{
    BundleEditStartResponse, BundleListResponse, BundleResponse, BundleSyncResponse, Contributor,
    DeployResponse, PatchBundleRequest, RegisterBundleRequest,
};
pub use editor::{EditorState, EditorStatus};
pub use functions::{FunctionListResponse, FunctionResponse};
pub use jobs::{ExecutionResponse, ExecutionState, JobResponse, TriggerType};
pub use paging::PageMeta;
pub use secrets::{BundleSecretResponse, CreateSecretRequest, SecretListResponse};
