//! Secret shapes for the Bundle Hub API

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ClientError, Result};
use crate::types::paging::PageMeta;

const NAME_PATTERN: &str = r"^[a-zA-Z0-9]([-a-zA-Z0-9]*[a-zA-Z0-9])?$";

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(NAME_PATTERN).expect("secret name pattern is valid")
});

/// Payload required to create a new secret for a bundle.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateSecretRequest {
    pub bundle_id: Uuid,
    pub name: String,
    pub value: String,
}

impl CreateSecretRequest {
    /// Ensure the create request is valid before it goes on the wire.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() || !NAME_REGEX.is_match(&self.name) {
            return Err(ClientError::InvalidRequest {
                message: format!(
                    "the secret name must consist of alphanumeric characters or '-' (pattern {NAME_PATTERN})"
                ),
            });
        }
        if self.value.is_empty() {
            return Err(ClientError::InvalidRequest {
                message: "value cannot be blank".to_string(),
            });
        }
        if self.bundle_id.is_nil() {
            return Err(ClientError::InvalidRequest {
                message: "bundleId cannot be blank".to_string(),
            });
        }
        Ok(())
    }
}

/// Hub response describing a bundle secret. Values are write-only and never
/// returned.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BundleSecretResponse {
    pub id: Uuid,
    pub created_at: Option<DateTime<Utc>>,
    pub bundle_id: Uuid,
    pub name: String,
}

/// Paging and data array for the secrets associated with a bundle.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SecretListResponse {
    pub page: PageMeta,
    pub data: Vec<BundleSecretResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateSecretRequest {
        CreateSecretRequest {
            bundle_id: Uuid::new_v4(),
            name: "db-password".to_string(),
            value: "hunter2".to_string(),
        }
    }

    #[test]
    fn test_create_secret_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_create_secret_rejects_bad_name() {
        for name in ["", "-leading", "trailing-", "has space", "under_score"] {
            let mut req = valid_request();
            req.name = name.to_string();
            assert!(req.validate().is_err(), "expected {name:?} to be rejected");
        }
    }

    #[test]
    fn test_create_secret_rejects_blank_value() {
        let mut req = valid_request();
        req.value = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_secret_rejects_nil_bundle_id() {
        let mut req = valid_request();
        req.bundle_id = Uuid::nil();
        assert!(req.validate().is_err());
    }
}
