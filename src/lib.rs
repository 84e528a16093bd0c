//! Typed client for the Bundle Hub lifecycle API
//!
//! A bundle is a deployable unit tracked by a Bundle Hub server and
//! described by a declarative YAML config. This crate covers the client
//! side of the bundle lifecycle — register, list, sync, deploy, undeploy,
//! status, and interactive edit sessions — plus local discovery and
//! validation of the bundle config file.
//!
//! Authentication is a capability, not a concern of this crate: construct
//! an [`AuthTransport`] with a token obtained from your login flow and hand
//! it to the client.
//!
//! ```no_run
//! use bundlehub_client::{AuthTransport, BundleClient};
//!
//! # async fn example() -> bundlehub_client::Result<()> {
//! let transport = AuthTransport::new(None, Some("token"), None)?;
//! let client = BundleClient::new(transport, "https://hub.example.com", "tenant1", "realm2");
//! let bundles = client.list().await?;
//! for bundle in &bundles.data {
//!     println!("{} ({})", bundle.name, bundle.id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Calls are single-shot: no retries, no caching. Cancel an in-flight call
//! by dropping its future.

pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;

pub use client::BundleClient;
pub use config::{BundleConfig, ConfigLocation, locate};
pub use error::{ClientError, Result};
pub use transport::AuthTransport;
