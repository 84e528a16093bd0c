//! Scheduled job and execution shapes for the Bundle Hub API

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source of a job execution: a user, an api key, a cron schedule or a
/// webhook. `Unknown` is the fallback for values this client does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    User,
    ApiKey,
    Schedule,
    Webhook,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TriggerType::User => "user",
            TriggerType::ApiKey => "apikey",
            TriggerType::Schedule => "schedule",
            TriggerType::Webhook => "webhook",
            TriggerType::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Overall state of an execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionState {
    Running,
    Success,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ExecutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExecutionState::Running => "running",
            ExecutionState::Success => "success",
            ExecutionState::Failed => "failed",
            ExecutionState::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Definition of a bundle job with its most recent status and output URL.
///
/// `id` always matches `name`; it is provided for client ease of use.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct JobResponse {
    pub id: String,
    pub last_run_at: Option<DateTime<Utc>>,
    #[serde(rename = "bundleID")]
    pub bundle_id: Uuid,
    pub url: String,
    pub name: String,
    pub description: String,
    pub notebook_path: String,
    pub schedule: String,
    pub environment: BTreeMap<String, String>,
    pub secrets: Vec<String>,
    pub success: bool,
    pub internal: bool,
}

/// Data array for the job list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobListResponse {
    pub data: Vec<JobResponse>,
}

/// POST body for a manual job invocation; allows a one-time override of the
/// job's environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobRunRequest {
    pub environment: BTreeMap<String, String>,
}

/// Execution id of a manually triggered job run; can be used to query for
/// status and logs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobRunResponse {
    #[serde(rename = "executionID")]
    pub execution_id: String,
}

/// Arguments used and returned by a job execution.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobSpecification {
    pub schedule: String,
    pub image: String,
    pub command: Vec<String>,
    pub environment: BTreeMap<String, String>,
    pub secrets: Vec<String>,
}

/// Who or what is responsible for a specific job execution.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TriggeredBy {
    #[serde(rename = "type")]
    pub trigger_type: TriggerType,
    pub id: String,
    pub name: String,
}

/// Execution details of a job, including status and command details.
///
/// As with [`JobResponse`], `job_id` always matches `job_name`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecutionResponse {
    pub id: String,
    #[serde(rename = "jobID")]
    pub job_id: String,
    #[serde(rename = "bundleID")]
    pub bundle_id: String,
    pub job_name: String,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub success: bool,
    pub status: ExecutionState,
    pub specification: JobSpecification,
    pub triggered_by: TriggeredBy,
}

impl ExecutionResponse {
    /// Derive the execution state from the timestamp and success fields.
    pub fn derived_status(&self) -> ExecutionState {
        if self.started_at.is_none() {
            return ExecutionState::Unknown;
        }

        match self.completed_at {
            None => ExecutionState::Running,
            Some(_) if self.success => ExecutionState::Success,
            Some(_) => ExecutionState::Failed,
        }
    }
}

/// Subset of execution fields used to annotate log output.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecutionStatus {
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub success: bool,
}

/// Data array for the execution list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExecutionListResponse {
    pub data: Vec<ExecutionResponse>,
}

/// One line of output from a job run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LogMessage {
    pub timestamp: Option<DateTime<Utc>>,
    pub msg: String,
}

/// Status header and data array for execution logs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LogsResponse {
    pub status: ExecutionStatus,
    pub data: Vec<LogMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_type_wire_values() {
        assert_eq!(
            serde_json::to_string(&TriggerType::ApiKey).unwrap(),
            r#""apikey""#
        );
        let parsed: TriggerType = serde_json::from_str(r#""schedule""#).unwrap();
        assert_eq!(parsed, TriggerType::Schedule);
    }

    #[test]
    fn test_trigger_type_unknown_fallback() {
        let parsed: TriggerType = serde_json::from_str(r#""eventstream""#).unwrap();
        assert_eq!(parsed, TriggerType::Unknown);
    }

    #[test]
    fn test_derived_status_unknown_without_start() {
        let execution = ExecutionResponse::default();
        assert_eq!(execution.derived_status(), ExecutionState::Unknown);
    }

    #[test]
    fn test_derived_status_running_until_completed() {
        let execution = ExecutionResponse {
            started_at: Some(Utc::now()),
            ..Default::default()
        };
        assert_eq!(execution.derived_status(), ExecutionState::Running);
    }

    #[test]
    fn test_derived_status_success_and_failure() {
        let mut execution = ExecutionResponse {
            started_at: Some(Utc::now()),
            completed_at: Some(Utc::now()),
            success: true,
            ..Default::default()
        };
        assert_eq!(execution.derived_status(), ExecutionState::Success);

        execution.success = false;
        assert_eq!(execution.derived_status(), ExecutionState::Failed);
    }

    #[test]
    fn test_triggered_by_type_field_name() {
        let raw = r#"{"type":"user","id":"u1","name":"Sam"}"#;
        let triggered: TriggeredBy = serde_json::from_str(raw).unwrap();
        assert_eq!(triggered.trigger_type, TriggerType::User);
    }
}
