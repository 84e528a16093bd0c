//! Bundle request and response shapes for the Bundle Hub API
//!
//! Fields mirror the remote schema 1:1; names follow the wire exactly
//! (`gitUrl`, `gitSHA`, `deployedSHA`, ...).

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::BundleConfig;
use crate::error::{ClientError, Result};
use crate::types::paging::PageMeta;

static GIT_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^((git|ssh|http(s)?)|(git@[\w.]+))(:(//)?)([\w.@:/~-]+)(\.git)(/)?$")
        .expect("git url pattern is valid")
});

/// Request body required to register a new bundle with the hub.
///
/// The tenant id is injected from client state before dispatch.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterBundleRequest {
    pub name: String,
    pub git_url: String,
    pub branch: String,
    pub tenant_id: String,
    pub realm_id: String,
}

impl RegisterBundleRequest {
    /// Ensure the request values are acceptable before they go on the wire.
    pub fn validate(&self) -> Result<()> {
        if self.tenant_id.is_empty() {
            return Err(invalid("tenantId cannot be blank"));
        }
        if self.name.len() < 3 || self.name.len() > 255 {
            return Err(invalid("name must be between 3 and 255 characters"));
        }
        if self.branch.is_empty() || self.branch.len() > 255 {
            return Err(invalid("branch must be between 1 and 255 characters"));
        }
        if self.git_url.is_empty() || self.git_url.len() > 255 {
            return Err(invalid("gitUrl must be between 1 and 255 characters"));
        }
        if !GIT_URL_REGEX.is_match(&self.git_url) {
            return Err(invalid("gitUrl must be a valid git url"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> ClientError {
    ClientError::InvalidRequest {
        message: message.to_string(),
    }
}

/// Payload of fields that are editable on the bundle model.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PatchBundleRequest {
    pub name: Option<String>,
    pub git_url: Option<String>,
    pub branch: Option<String>,
    #[serde(rename = "coverImageURL")]
    pub cover_image_url: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PatchBundleRequest {
    /// Whether any of the patchable fields have been set. Can be used to
    /// short-circuit empty requests.
    pub fn is_non_empty(&self) -> bool {
        self.name.is_some()
            || self.git_url.is_some()
            || self.branch.is_some()
            || self.cover_image_url.is_some()
            || self.tags.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.is_non_empty()
    }
}

/// All readable fields of the hub's bundle representation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BundleResponse {
    pub id: Uuid,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub synced_at: Option<DateTime<Utc>>,
    pub deployed_at: Option<DateTime<Utc>>,
    #[serde(rename = "deployedSHA")]
    pub deployed_sha: String,
    pub name: String,
    pub git_url: String,
    #[serde(rename = "gitSHA")]
    pub git_sha: String,
    pub branch: String,
    #[serde(rename = "config")]
    pub bundle_config: BundleConfig,
    pub public_key: String,
    #[serde(rename = "coverImageURL")]
    pub cover_image_url: String,
    pub tags: Vec<String>,
    pub tenant_id: String,
    pub realm_id: String,
    #[serde(rename = "activeDeployID")]
    pub active_deploy_id: Option<Uuid>,
    pub top_contributors: Vec<Contributor>,
    pub description: String,
}

/// Paging and data array for the bundle list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BundleListResponse {
    pub page: PageMeta,
    pub data: Vec<BundleResponse>,
}

/// Returned by a bundle deploy; describes the bundle and the functions
/// deployed with it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeployResponse {
    pub bundle: BundleResponse,
    pub functions: Vec<crate::types::functions::FunctionResponse>,
}

/// Immutable log of events recorded during bundle deploys.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DeployLog {
    pub id: Uuid,
    pub created_at: Option<DateTime<Utc>>,
    pub bundle_id: Uuid,
    pub deploy_id: Uuid,
    pub git_url: String,
    pub sha: String,
    pub message: String,
    pub status: String,
}

/// Paging and data array for the deploy log list response.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeployLogResponse {
    pub page: PageMeta,
    pub data: Vec<DeployLog>,
}

/// A person that has made commits to a bundle.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Contributor {
    pub name: String,
    pub email: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    pub rank: i32,
}

/// Paging and data array of contributors to a bundle.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContributorListResponse {
    pub page: PageMeta,
    pub data: Vec<Contributor>,
}

/// URL payload indicating where the started edit server is located.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BundleEditStartResponse {
    pub url: String,
}

/// Git metadata for the bundle after a sync with the remote repository.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BundleSyncResponse {
    pub sha: String,
    pub branch: String,
    #[serde(rename = "gitURL")]
    pub git_url: String,
    pub updated: bool,
}
