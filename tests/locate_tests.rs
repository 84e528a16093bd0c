//! Config discovery scenarios on real directory trees

use std::fs;

use bundlehub_client::{ClientError, locate};
use tempfile::TempDir;

const VALID_CONFIG: &str = r#"
api_version: v1
name: weather-report
edit:
  image: hub/notebook:latest
jobs:
  nightly:
    notebook_path: notebooks/refresh.ipynb
    schedule: "0 3 * * *"
"#;

#[test]
fn finds_config_three_directories_up() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("bundle.yaml"), VALID_CONFIG).expect("write config");

    let nested = temp.path().join("notebooks/forecast/helpers");
    fs::create_dir_all(&nested).expect("create nested dirs");

    let location = locate(nested.join("bundle.yaml")).expect("config should be found");
    assert_eq!(location.dir, temp.path());
    assert_eq!(location.file_name, "bundle.yaml");
    assert_eq!(location.bundle.name, "weather-report");
    assert_eq!(
        location.bundle.jobs["nightly"].notebook_path,
        "notebooks/refresh.ipynb"
    );
    // Maps are present even when the document omits them.
    assert!(location.bundle.functions.is_empty());
}

#[test]
fn missing_config_everywhere_reports_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let nested = temp.path().join("a/b");
    fs::create_dir_all(&nested).expect("create nested dirs");

    // A name nothing on the machine should have, all the way up to the root.
    let err = locate(nested.join("bundlehub-absent-8f3a91.yaml")).unwrap_err();
    assert!(matches!(err, ClientError::ConfigNotFound));
    assert_eq!(err.to_string(), "config file not found");
}

#[test]
fn malformed_config_stops_the_search_immediately() {
    let temp = TempDir::new().expect("temp dir");
    // A perfectly good config sits above the malformed one.
    fs::write(temp.path().join("bundle.yaml"), VALID_CONFIG).expect("write config");

    let nested = temp.path().join("child");
    fs::create_dir_all(&nested).expect("create nested dir");
    fs::write(nested.join("bundle.yaml"), "api_version: [unclosed").expect("write config");

    let err = locate(nested.join("bundle.yaml")).unwrap_err();
    assert!(matches!(err, ClientError::ConfigParseFailed { .. }));
}

#[test]
fn structurally_invalid_config_stops_the_search() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("bundle.yaml"), VALID_CONFIG).expect("write config");

    let nested = temp.path().join("child");
    fs::create_dir_all(&nested).expect("create nested dir");
    // Parses, but a bundle config without a name is rejected.
    fs::write(nested.join("bundle.yaml"), "api_version: v1\n").expect("write config");

    let err = locate(nested.join("bundle.yaml")).unwrap_err();
    assert!(matches!(err, ClientError::ConfigInvalid { .. }));
}

#[test]
fn nearest_config_wins_over_ancestors() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("bundle.yaml"), VALID_CONFIG).expect("write config");

    let nested = temp.path().join("child");
    fs::create_dir_all(&nested).expect("create nested dir");
    fs::write(
        nested.join("bundle.yaml"),
        "api_version: v2\nname: nearer-report\n",
    )
    .expect("write config");

    let location = locate(nested.join("bundle.yaml")).expect("config should be found");
    assert_eq!(location.dir, nested);
    assert_eq!(location.bundle.name, "nearer-report");
    assert_eq!(location.bundle.version, "v2");
}
