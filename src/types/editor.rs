//! Edit session status shapes for the Bundle Hub API
//!
//! Status information is assembled server-side from the cluster state and
//! the notebook server; labels and annotations are internal plumbing carried
//! outside the JSON payload.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::paging::PageMeta;

/// Label key carrying the bundle id of an editor session.
pub const LABEL_BUNDLE_ID: &str = "bundlehub.io/bundle-id";
/// Label key carrying the owning user id.
pub const LABEL_USER_ID: &str = "bundlehub.io/user-id";
/// Label key carrying the tenant id.
pub const LABEL_TENANT_ID: &str = "bundlehub.io/tenant-id";
/// Label key carrying the realm id.
pub const LABEL_REALM_ID: &str = "bundlehub.io/realm-id";
/// Annotation key carrying the notebook server auth token.
pub const ANNOTATION_TOKEN_KEY: &str = "bundlehub.io/editor-token";
/// Annotation key carrying the notebook server base URL.
pub const ANNOTATION_EDITOR_BASE_URL: &str = "bundlehub.io/editor-base-url";

/// Progress of a single stage in an editor status flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EditorStageStatus {
    #[default]
    Todo,
    Running,
    Done,
    Failed,
}

/// Overall state of an editor session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EditorState {
    Failed,
    Starting,
    #[serde(rename = "does not exist")]
    DoesNotExist,
    Running,
    Stopping,
    Stopped,
    Resuming,
    Destroying,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EditorState::Failed => "failed",
            EditorState::Starting => "starting",
            EditorState::DoesNotExist => "does not exist",
            EditorState::Running => "running",
            EditorState::Stopping => "stopping",
            EditorState::Stopped => "stopped",
            EditorState::Resuming => "resuming",
            EditorState::Destroying => "destroying",
            EditorState::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// One step in the flow required to complete the current editor status, for
/// example "pulling from git remote" while starting.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorStage {
    pub message: String,
    pub status: EditorStageStatus,
}

/// Current state of a user's editor session.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorStatus {
    pub name: String,
    #[serde(rename = "realmID")]
    pub realm_id: String,
    #[serde(rename = "bundleID")]
    pub bundle_id: String,
    pub created_at: Option<DateTime<Utc>>,
    /// Updates with the editor heartbeat, so it is fresh while a browser tab
    /// is attached.
    pub last_active_at: Option<DateTime<Utc>>,
    pub status: EditorState,
    pub status_message: String,
    pub stages: Vec<EditorStage>,
    #[serde(rename = "editorURL")]
    pub editor_url: String,
    /// Internal cluster labels, never part of the JSON payload.
    #[serde(skip)]
    pub labels: BTreeMap<String, String>,
    /// Internal cluster annotations, never part of the JSON payload.
    #[serde(skip)]
    pub annotations: BTreeMap<String, String>,
}

impl EditorStatus {
    /// Bundle id of the session as recorded in the labels or annotations.
    pub fn label_bundle_id(&self) -> &str {
        self.get_value(LABEL_BUNDLE_ID)
    }

    /// User id of the session owner.
    pub fn label_user_id(&self) -> &str {
        self.get_value(LABEL_USER_ID)
    }

    /// Tenant id of the session.
    pub fn label_tenant_id(&self) -> &str {
        self.get_value(LABEL_TENANT_ID)
    }

    /// Realm id of the session.
    pub fn label_realm_id(&self) -> &str {
        self.get_value(LABEL_REALM_ID)
    }

    /// Notebook server auth token; only ever found in the annotations.
    pub fn server_auth_token(&self) -> &str {
        self.annotations
            .get(ANNOTATION_TOKEN_KEY)
            .map_or("", String::as_str)
    }

    /// Notebook server base URL from the annotations.
    pub fn base_url(&self) -> &str {
        self.annotations
            .get(ANNOTATION_EDITOR_BASE_URL)
            .map_or("", String::as_str)
    }

    /// Look a key up in the labels first, then the annotations.
    fn get_value(&self, key: &str) -> &str {
        match self.labels.get(key) {
            Some(value) if !value.is_empty() => value,
            _ => self.annotations.get(key).map_or("", String::as_str),
        }
    }
}

/// Paging and data array for a user's editor sessions.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorListResponse {
    pub page: PageMeta,
    pub data: Vec<EditorStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_state_wire_values() {
        let parsed: EditorState = serde_json::from_str(r#""does not exist""#).unwrap();
        assert_eq!(parsed, EditorState::DoesNotExist);

        let parsed: EditorState = serde_json::from_str(r#""some new state""#).unwrap();
        assert_eq!(parsed, EditorState::Unknown);
    }

    #[test]
    fn test_label_lookup_prefers_labels() {
        let mut status = EditorStatus::default();
        status
            .labels
            .insert(LABEL_BUNDLE_ID.to_string(), "from-label".to_string());
        status
            .annotations
            .insert(LABEL_BUNDLE_ID.to_string(), "from-annotation".to_string());
        assert_eq!(status.label_bundle_id(), "from-label");
    }

    #[test]
    fn test_label_lookup_falls_back_to_annotations() {
        let mut status = EditorStatus::default();
        status
            .annotations
            .insert(LABEL_USER_ID.to_string(), "user-1".to_string());
        assert_eq!(status.label_user_id(), "user-1");
    }

    #[test]
    fn test_auth_token_only_from_annotations() {
        let mut status = EditorStatus::default();
        status
            .labels
            .insert(ANNOTATION_TOKEN_KEY.to_string(), "leaked".to_string());
        assert_eq!(status.server_auth_token(), "");

        status
            .annotations
            .insert(ANNOTATION_TOKEN_KEY.to_string(), "tok-123".to_string());
        assert_eq!(status.server_auth_token(), "tok-123");
    }

    #[test]
    fn test_labels_never_serialized() {
        let mut status = EditorStatus::default();
        status
            .labels
            .insert(LABEL_BUNDLE_ID.to_string(), "internal".to_string());
        let json = serde_json::to_string(&status).unwrap();
        assert!(!json.contains("internal"));
    }
}
