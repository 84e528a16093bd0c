//! Upward config discovery
//!
//! Starting from an arbitrary path, walk the directory ancestry towards the
//! filesystem root, looking for a file with the same name at every level.
//! A directory without the file means "keep looking"; a file that exists
//! but fails to parse or validate is a user error and stops the search
//! immediately, even if a valid config exists higher up.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::bundle::BundleConfig;
use crate::error::{ClientError, Result};

/// Where a bundle config was found, together with its parsed content.
/// Immutable once returned.
#[derive(Debug, Clone)]
pub struct ConfigLocation {
    /// Absolute directory the config file lives in.
    pub dir: PathBuf,
    /// File name that was searched for and found.
    pub file_name: String,
    /// The parsed and validated document.
    pub bundle: BundleConfig,
}

/// Locate and load a bundle config by walking up from `start`.
///
/// `start` names the config file to look for (for example
/// `./bundle.yaml`); its file name is probed in the starting directory and
/// then in every ancestor until the filesystem root.
///
/// # Errors
///
/// [`ClientError::ConfigNotFound`] when the root is reached without a hit;
/// [`ClientError::ConfigParseFailed`] or [`ClientError::ConfigInvalid`]
/// when a file is present but malformed, without searching further.
pub fn locate(start: impl AsRef<Path>) -> Result<ConfigLocation> {
    let abs = absolute(start.as_ref())?;

    let file_name = abs
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or(ClientError::ConfigNotFound)?;
    let mut dir = abs
        .parent()
        .map_or_else(|| abs.clone(), Path::to_path_buf);

    loop {
        let candidate = dir.join(&file_name);
        match fs::read(&candidate) {
            Ok(bytes) => {
                let bundle: BundleConfig = serde_yaml::from_slice(&bytes).map_err(|err| {
                    ClientError::ConfigParseFailed {
                        path: candidate.display().to_string(),
                        reason: err.to_string(),
                    }
                })?;
                bundle.validate()?;
                return Ok(ConfigLocation {
                    dir,
                    file_name,
                    bundle,
                });
            }
            Err(_) => {
                debug!("no config at {}, trying parent", candidate.display());
                match dir.parent() {
                    Some(parent) => dir = parent.to_path_buf(),
                    None => return Err(ClientError::ConfigNotFound),
                }
            }
        }
    }
}

/// Resolve a possibly-relative path against the current working directory.
fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
