//! The Bundle Hub client
//!
//! [`BundleClient`] wraps all functionality needed to interact with the hub
//! as an end user. Every operation follows the same template: compose the
//! resource URL, build the request with an optional JSON body, send it over
//! the authenticated transport, drain the response body, and classify the
//! status code. The per-operation differences are captured in an
//! [`Endpoint`] descriptor (method, path segments, success-code sets) fed
//! through one shared execute routine.

mod classify;
mod url;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::error::{ClientError, Result};
use crate::transport::AuthTransport;
use crate::types::bundle::{
    BundleEditStartResponse, BundleListResponse, BundleResponse, BundleSyncResponse,
    DeployResponse, RegisterBundleRequest,
};

/// Success set for create-like calls.
const SUCCESS_CREATE: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED];
/// Success set for calls that only accept 200.
const SUCCESS_OK: &[StatusCode] = &[StatusCode::OK];
/// Success set for delete-like calls.
const SUCCESS_DELETE: &[StatusCode] = &[StatusCode::OK, StatusCode::NO_CONTENT];
/// Success set for stopping an edit session.
const SUCCESS_STOP_EDIT: &[StatusCode] =
    &[StatusCode::OK, StatusCode::CREATED, StatusCode::NO_CONTENT];
/// Stopping a session that does not exist or is already stopped is not an
/// error for the caller.
const ALREADY_STOPPED: &[StatusCode] = &[StatusCode::BAD_REQUEST, StatusCode::NOT_FOUND];

/// Per-call description of an operation: everything the shared execute
/// routine needs besides the body.
struct Endpoint<'a> {
    method: Method,
    segments: &'a [&'a str],
    success: &'a [StatusCode],
    already_done: &'a [StatusCode],
}

impl<'a> Endpoint<'a> {
    fn new(method: Method, segments: &'a [&'a str], success: &'a [StatusCode]) -> Self {
        Self {
            method,
            segments,
            success,
            already_done: &[],
        }
    }
}

/// Client for the bundle lifecycle endpoints of a Bundle Hub server.
///
/// Holds only configuration: the authenticated transport, the hub address,
/// and the tenant and realm the calls are scoped to. The realm can be
/// switched after construction with [`BundleClient::set_realm`]; the `&mut`
/// receiver means a realm change cannot race an in-flight call on the same
/// instance. Callers juggling several realms concurrently should use one
/// client per realm.
#[derive(Debug, Clone)]
pub struct BundleClient {
    transport: AuthTransport,
    hub_addr: String,
    tenant_id: String,
    realm_id: String,
}

impl BundleClient {
    /// Create a client scoped to the given hub address, tenant and realm.
    pub fn new(
        transport: AuthTransport,
        hub_addr: impl Into<String>,
        tenant_id: impl Into<String>,
        realm_id: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            hub_addr: hub_addr.into(),
            tenant_id: tenant_id.into(),
            realm_id: realm_id.into(),
        }
    }

    /// The tenant id this client injects into register requests.
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    /// Switch the realm used for subsequent calls.
    pub fn set_realm(&mut self, realm_id: impl Into<String>) {
        self.realm_id = realm_id.into();
    }

    /// Register a new bundle. The tenant id is injected from client state
    /// and the request is validated before dispatch.
    pub async fn register(&self, mut req: RegisterBundleRequest) -> Result<BundleResponse> {
        req.tenant_id = self.tenant_id.clone();
        req.validate()?;
        let body =
            serde_json::to_vec(&req).map_err(|source| ClientError::RequestEncodeFailed { source })?;

        let outcome = self
            .execute(
                Endpoint::new(Method::POST, &[], SUCCESS_CREATE),
                Some(body),
            )
            .await?;
        decode_body(outcome)
    }

    /// Remove a bundle registration.
    pub async fn unregister(&self, id: Uuid) -> Result<()> {
        let id = id.to_string();
        self.execute(
            Endpoint::new(Method::DELETE, &[id.as_str()], SUCCESS_DELETE),
            None,
        )
        .await
        .map(|_| ())
    }

    /// List the bundles registered in the current realm.
    pub async fn list(&self) -> Result<BundleListResponse> {
        let outcome = self
            .execute(Endpoint::new(Method::GET, &[], SUCCESS_CREATE), None)
            .await?;
        decode_body(outcome)
    }

    /// Sync a bundle with its remote git repository.
    pub async fn sync(&self, id: Uuid) -> Result<BundleSyncResponse> {
        let id = id.to_string();
        let outcome = self
            .execute(
                Endpoint::new(Method::POST, &[id.as_str(), "sync"], SUCCESS_OK),
                None,
            )
            .await?;
        decode_body(outcome)
    }

    /// Deploy a bundle, returning the bundle and the functions deployed.
    pub async fn deploy(&self, id: Uuid) -> Result<DeployResponse> {
        let id = id.to_string();
        let outcome = self
            .execute(
                Endpoint::new(Method::POST, &[id.as_str(), "deploy"], SUCCESS_CREATE),
                None,
            )
            .await?;
        decode_body(outcome)
    }

    /// Take a bundle's deployment down.
    pub async fn undeploy(&self, id: Uuid) -> Result<()> {
        let id = id.to_string();
        self.execute(
            Endpoint::new(Method::POST, &[id.as_str(), "undeploy"], SUCCESS_DELETE),
            None,
        )
        .await
        .map(|_| ())
    }

    /// Start an interactive edit session, returning the editor URL.
    pub async fn start_edit_session(&self, id: Uuid) -> Result<String> {
        let id = id.to_string();
        let outcome = self
            .execute(
                Endpoint::new(Method::GET, &[id.as_str(), "edit"], SUCCESS_CREATE),
                None,
            )
            .await?;
        let response: BundleEditStartResponse = decode_body(outcome)?;
        Ok(response.url)
    }

    /// Stop an edit session. Stopping a session that is already gone
    /// succeeds.
    pub async fn stop_edit_session(&self, id: Uuid) -> Result<()> {
        let id = id.to_string();
        self.execute(
            Endpoint {
                method: Method::DELETE,
                segments: &[id.as_str(), "edit"],
                success: SUCCESS_STOP_EDIT,
                already_done: ALREADY_STOPPED,
            },
            None,
        )
        .await
        .map(|_| ())
    }

    /// Fetch the full description of a bundle.
    pub async fn status(&self, id: Uuid) -> Result<BundleResponse> {
        let id = id.to_string();
        let outcome = self
            .execute(Endpoint::new(Method::GET, &[id.as_str()], SUCCESS_OK), None)
            .await?;
        decode_body(outcome)
    }

    /// Shared dispatch: compose the URL, build and send the request, drain
    /// the body, classify the status.
    ///
    /// Returns `Some(body)` for decodable success, `None` for an
    /// already-done status. The body is always read to completion so the
    /// connection can be released whatever the outcome.
    async fn execute(
        &self,
        endpoint: Endpoint<'_>,
        body: Option<Vec<u8>>,
    ) -> Result<Option<Vec<u8>>> {
        let url = url::resource_url(
            &self.hub_addr,
            &self.tenant_id,
            &self.realm_id,
            endpoint.segments,
        );
        debug!("{} {}", endpoint.method, url);

        let mut builder = self.transport.builder(endpoint.method, &url);
        if let Some(bytes) = body {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(bytes);
        }
        let request = builder
            .build()
            .map_err(|err| ClientError::RequestBuildFailed {
                reason: err.to_string(),
            })?;

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|source| ClientError::RequestFailed { source })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ClientError::RequestFailed { source })?
            .to_vec();

        classify::classify(status, body, endpoint.success, endpoint.already_done)
    }
}

/// Decode an execute outcome into the operation's response shape.
fn decode_body<T: DeserializeOwned>(outcome: Option<Vec<u8>>) -> Result<T> {
    // Already-done outcomes only occur on endpoints without a decode target,
    // so an empty body here decodes (and fails) like any malformed response.
    classify::decode(&outcome.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BundleClient {
        let transport = AuthTransport::new(None, None, None).expect("transport");
        BundleClient::new(transport, "http://h", "tenant1", "realm2")
    }

    #[test]
    fn test_tenant_id_getter() {
        assert_eq!(client().tenant_id(), "tenant1");
    }

    #[test]
    fn test_set_realm_changes_composed_url() {
        let mut client = client();
        client.set_realm("realm9");
        let url = url::resource_url(
            &client.hub_addr,
            &client.tenant_id,
            &client.realm_id,
            &["id123"],
        );
        assert_eq!(url, "http://h/tenant1/api/v1/realms/realm9/bundles/id123");
    }
}
