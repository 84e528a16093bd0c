//! Error types and handling for the Bundle Hub client
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Every operation surfaces its failure to the immediate caller; nothing is
//! logged or retried here. Transport failures, authorization failures,
//! unexpected status codes and malformed response bodies are all distinct
//! variants so callers can tell a network problem from a server-reported one.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Bundle Hub client operations
#[derive(Error, Diagnostic, Debug)]
pub enum ClientError {
    // Request dispatch errors
    #[error("could not create http request: {reason}")]
    #[diagnostic(code(bundlehub::client::request_build_failed))]
    RequestBuildFailed { reason: String },

    #[error("could not send http request: {source}")]
    #[diagnostic(
        code(bundlehub::client::request_failed),
        help("Check that the Bundle Hub address is reachable and the call was not cancelled")
    )]
    RequestFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("unauthorized request")]
    #[diagnostic(
        code(bundlehub::client::unauthorized),
        help("Check that the configured token is valid for this tenant and realm")
    )]
    Unauthorized,

    #[error("unexpected status code {status}{}", detail_suffix(.detail))]
    #[diagnostic(code(bundlehub::client::unexpected_status))]
    UnexpectedStatus { status: u16, detail: Option<String> },

    #[error("failed to read response body: {source}")]
    #[diagnostic(code(bundlehub::client::malformed_response))]
    MalformedResponse {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize the request body: {source}")]
    #[diagnostic(code(bundlehub::client::encode_failed))]
    RequestEncodeFailed {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid request: {message}")]
    #[diagnostic(code(bundlehub::client::invalid_request))]
    InvalidRequest { message: String },

    // Config discovery errors
    #[error("config file not found")]
    #[diagnostic(
        code(bundlehub::config::not_found),
        help("Create a bundle config file in the project directory or any of its ancestors")
    )]
    ConfigNotFound,

    #[error("can not load the yaml in {path}: {reason}")]
    #[diagnostic(code(bundlehub::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("invalid bundle config: {message}")]
    #[diagnostic(code(bundlehub::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(bundlehub::fs::io_error))]
    IoError { message: String },
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(message) => format!(", message: {message}"),
        None => String::new(),
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::RequestFailed { source: err }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ClientError>;
