//! Common test utilities for Bundle Hub client integration tests

use axum::Router;
use bundlehub_client::{AuthTransport, BundleClient};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Tenant used by every scenario
pub const TENANT: &str = "tenant1";
/// Realm used by every scenario
pub const REALM: &str = "realm2";

/// An in-process Bundle Hub stub serving canned responses
pub struct MockHub {
    /// Base URL of the stub, e.g. `http://127.0.0.1:49213`
    pub base_url: String,
    server: JoinHandle<()>,
}

impl MockHub {
    /// Serve the given routes on an ephemeral local port
    pub async fn start(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock hub listener");
        let addr = listener
            .local_addr()
            .expect("Failed to read mock hub address");
        let server = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Mock hub server failed");
        });
        Self {
            base_url: format!("http://{addr}"),
            server,
        }
    }

    /// A client without a token, pointed at this stub
    pub fn client(&self) -> BundleClient {
        let transport = AuthTransport::new(None, None, None).expect("Failed to build transport");
        BundleClient::new(transport, &self.base_url, TENANT, REALM)
    }

    /// A client with a bearer token, pointed at this stub
    #[allow(dead_code)]
    pub fn client_with_token(&self, token: &str) -> BundleClient {
        let transport =
            AuthTransport::new(None, Some(token), None).expect("Failed to build transport");
        BundleClient::new(transport, &self.base_url, TENANT, REALM)
    }
}

impl Drop for MockHub {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Path of a bundle resource on the mock hub
#[allow(dead_code)]
pub fn bundles_path(suffix: &str) -> String {
    if suffix.is_empty() {
        format!("/{TENANT}/api/v1/realms/{REALM}/bundles")
    } else {
        format!("/{TENANT}/api/v1/realms/{REALM}/bundles/{suffix}")
    }
}
