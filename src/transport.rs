//! Authenticated HTTP transport for the Bundle Hub API
//!
//! [`AuthTransport`] wraps a [`reqwest::Client`] with a bearer token and an
//! optional construction-time timeout. The token is injected as an
//! `Authorization` header on every outgoing request; no other request
//! mutation happens here. The token itself comes from an out-of-scope login
//! flow.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Method, Request, RequestBuilder, Response};

use crate::error::{ClientError, Result};

/// Prefix used in the `Authorization` header when none is given
const DEFAULT_AUTH_PREFIX: &str = "Bearer";

/// How long pooled connections may sit idle before being closed
const IDLE_CONN_TIMEOUT: Duration = Duration::from_millis(120);

/// An HTTP transport that attaches the configured authorization token to
/// every request it sends.
#[derive(Debug, Clone)]
pub struct AuthTransport {
    inner: reqwest::Client,
    authorization: Option<HeaderValue>,
}

impl AuthTransport {
    /// Create a transport with the given timeout and token.
    ///
    /// A `Some` timeout bounds both connection establishment and the whole
    /// request lifetime; `None` imposes no deadline, leaving cancellation to
    /// the caller (dropping an in-flight call future aborts it). An empty
    /// `auth_prefix` falls back to `Bearer`.
    pub fn new(
        timeout: Option<Duration>,
        token: Option<&str>,
        auth_prefix: Option<&str>,
    ) -> Result<Self> {
        let prefix = match auth_prefix {
            Some(p) if !p.is_empty() => p,
            _ => DEFAULT_AUTH_PREFIX,
        };

        let authorization = match token {
            Some(token) if !token.is_empty() => Some(
                HeaderValue::from_str(&format!("{prefix} {token}")).map_err(|_| {
                    ClientError::InvalidRequest {
                        message: "authorization token contains invalid header characters"
                            .to_string(),
                    }
                })?,
            ),
            _ => None,
        };

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder
                .timeout(timeout)
                .connect_timeout(timeout)
                .pool_idle_timeout(IDLE_CONN_TIMEOUT);
        }

        Ok(Self {
            inner: builder.build()?,
            authorization,
        })
    }

    /// Start building a request against the given URL.
    pub fn builder(&self, method: Method, url: &str) -> RequestBuilder {
        self.inner.request(method, url)
    }

    /// Send a fully-formed request, injecting the authorization header first
    /// when a token is configured.
    pub async fn send(&self, mut request: Request) -> reqwest::Result<Response> {
        if let Some(authorization) = &self.authorization {
            request
                .headers_mut()
                .insert(AUTHORIZATION, authorization.clone());
        }
        self.inner.execute(request).await
    }

    /// Whether a token is configured on this transport.
    pub fn has_token(&self) -> bool {
        self.authorization.is_some()
    }
}
