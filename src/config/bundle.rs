//! Bundle configuration document data structures
//!
//! The declarative config file describes how a bundle is edited and what
//! jobs and functions it provides. On disk it is YAML (`api_version`,
//! `notebook_path`); on the wire it travels as JSON inside bundle responses
//! (`apiVersion`, `notebookPath`). Serde aliases accept both spellings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// The bundle configuration document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BundleConfig {
    #[serde(rename = "apiVersion", alias = "api_version")]
    pub version: String,
    pub name: String,
    pub edit: EditConfig,
    pub jobs: BTreeMap<String, JobDefinition>,
    pub functions: BTreeMap<String, FunctionDefinition>,
}

/// Container used to launch the notebook environment for editing a bundle.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditConfig {
    pub image: String,
    pub environment: BTreeMap<String, String>,
    #[serde(rename = "secret", alias = "secrets")]
    pub secrets: Vec<String>,
}

/// Path and configuration needed to execute a notebook on a schedule or
/// manually.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobDefinition {
    #[serde(rename = "notebookPath", alias = "notebook_path")]
    pub notebook_path: String,
    pub environment: BTreeMap<String, String>,
    pub secrets: Vec<String>,
    pub schedule: String,
    pub description: String,
}

/// Image and command information needed to execute a function.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FunctionDefinition {
    pub image: String,
    pub command: String,
    pub environment: BTreeMap<String, String>,
    pub secrets: Vec<String>,
    pub build: FunctionBuild,
}

/// Build arguments for a function image. When empty, a template image is
/// built from [`FunctionDefinition::image`]; a dockerfile path (relative to
/// the project root) takes full control instead.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FunctionBuild {
    pub dockerfile: String,
    pub args: Vec<String>,
    pub labels: Vec<String>,
    pub skip: bool,
}

impl BundleConfig {
    /// Parse a bundle configuration from YAML and validate its shape.
    pub fn from_yaml(yaml: &[u8]) -> Result<Self> {
        let config: Self =
            serde_yaml::from_slice(yaml).map_err(|err| ClientError::ConfigInvalid {
                message: err.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the document shape: non-empty version and name, and the
    /// required fields of every job and function definition.
    pub fn validate(&self) -> Result<()> {
        if self.version.is_empty() {
            return Err(invalid("api_version cannot be blank"));
        }
        if self.name.is_empty() {
            return Err(invalid("name cannot be blank"));
        }

        for (name, job) in &self.jobs {
            if job.notebook_path.is_empty() {
                return Err(invalid(&format!(
                    "job '{name}' must specify a notebook_path"
                )));
            }
        }

        for (name, function) in &self.functions {
            if function.image.is_empty() {
                return Err(invalid(&format!("function '{name}' must specify an image")));
            }
        }

        Ok(())
    }
}

/// Validate raw config bytes without keeping the parsed document.
///
/// Pure function from bytes to pass/fail-with-reason; the discovery walk
/// stops on the first file that fails this check.
pub fn validate_bundle(yaml: &[u8]) -> Result<()> {
    BundleConfig::from_yaml(yaml).map(|_| ())
}

fn invalid(message: &str) -> ClientError {
    ClientError::ConfigInvalid {
        message: message.to_string(),
    }
}

/// Render an environment map as `KEY=value` pairs with upper-cased keys, the
/// format container runtimes expect.
fn env_array(environment: &BTreeMap<String, String>) -> Vec<String> {
    environment
        .iter()
        .map(|(key, value)| format!("{}={}", key.to_uppercase(), value))
        .collect()
}

impl EditConfig {
    /// Environment variables as a `KEY=value` string array.
    pub fn env_array(&self) -> Vec<String> {
        env_array(&self.environment)
    }
}

impl FunctionDefinition {
    /// Environment variables as a `KEY=value` string array.
    pub fn env_array(&self) -> Vec<String> {
        env_array(&self.environment)
    }
}
