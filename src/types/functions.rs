//! Function shapes returned by the Bundle Hub deployment endpoints

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::paging::PageMeta;

/// Minimal description of a function in a hub cluster, appropriate for list
/// responses.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionResponse {
    pub id: Uuid,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub bundle_id: Uuid,
    pub name: String,
    pub image: String,
    pub command: String,
    pub environment: BTreeMap<String, String>,
    pub secrets: Vec<String>,
    pub schema: serde_json::Value,
    pub deployed: bool,
    pub deployment_status: String,
    pub url: String,
}

/// Paging and data array for the function list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FunctionListResponse {
    pub page: PageMeta,
    pub data: Vec<FunctionResponse>,
}
