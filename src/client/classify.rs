//! Response classification shared by every Bundle Hub operation
//!
//! Each operation declares its own success-code set, but the mapping from a
//! completed response to an outcome is otherwise identical everywhere:
//!
//! 1. Status in the success set: hand the body back for decoding.
//! 2. Status 401 or 403: unauthorized, the body is not inspected.
//! 3. Status in the operation's already-done set: success with nothing to
//!    decode (stop-edit-session treats 400/404 as "already stopped").
//! 4. Anything else: unexpected status, with the body text as detail when it
//!    is non-empty and readable.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

/// Classify a completed response by status code.
///
/// Returns `Some(body)` when the status is in `success` and the body should
/// be decoded, `None` when the status is in `already_done`.
pub(crate) fn classify(
    status: StatusCode,
    body: Vec<u8>,
    success: &[StatusCode],
    already_done: &[StatusCode],
) -> Result<Option<Vec<u8>>> {
    if success.contains(&status) {
        return Ok(Some(body));
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ClientError::Unauthorized);
    }

    if already_done.contains(&status) {
        return Ok(None);
    }

    let detail = match String::from_utf8(body) {
        Ok(text) if !text.is_empty() => Some(text),
        _ => None,
    };

    Err(ClientError::UnexpectedStatus {
        status: status.as_u16(),
        detail,
    })
}

/// Decode a success body into the operation's response shape.
///
/// A decode failure on an otherwise-successful status is reported as a
/// malformed response, distinct from a server-reported error.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| ClientError::MalformedResponse { source })
}
