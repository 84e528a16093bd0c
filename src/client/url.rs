//! Resource URL composition for the Bundle Hub API
//!
//! All bundle endpoints live under
//! `<base>/<tenant>/api/v1/realms/<realm>/bundles`, optionally followed by a
//! bundle id and a sub-action such as `sync` or `deploy`.

/// Compose the slash-joined URL for a bundle resource.
///
/// Segments are appended as given; ids are opaque tokens and are not
/// percent-encoded here. Empty segments are skipped so the result never
/// contains a doubled separator.
pub(crate) fn resource_url(base: &str, tenant: &str, realm: &str, segments: &[&str]) -> String {
    let mut parts: Vec<&str> = vec![base, tenant, "api", "v1", "realms", realm, "bundles"];
    parts.extend_from_slice(segments);

    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_url_collection() {
        assert_eq!(
            resource_url("http://h", "tenant1", "realm2", &[]),
            "http://h/tenant1/api/v1/realms/realm2/bundles"
        );
    }

    #[test]
    fn test_resource_url_with_id_and_action() {
        assert_eq!(
            resource_url("http://h", "tenant1", "realm2", &["id123", "sync"]),
            "http://h/tenant1/api/v1/realms/realm2/bundles/id123/sync"
        );
    }

    #[test]
    fn test_resource_url_skips_empty_segments() {
        assert_eq!(
            resource_url("http://h", "tenant1", "realm2", &["", "id123", ""]),
            "http://h/tenant1/api/v1/realms/realm2/bundles/id123"
        );
    }
}
