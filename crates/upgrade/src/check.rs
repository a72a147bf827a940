//! Version comparison between the installed plugin and the latest release.

use semver::Version;
use serde::Serialize;

use crate::error::{CheckError, Result};
use crate::release::ReleaseSource;
use crate::version::VersionResolver;

/// Result of a completed upgrade check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub update_available: bool,
    pub current_version: String,
    pub latest_version: String,
    pub release_notes: String,
    pub release_url: String,
    pub published_at: String,
}

/// Resolve the current version, fetch the latest release and compare under
/// semver ordering. A leading `v` on the remote tag is stripped before
/// parsing; equal versions mean no update.
pub async fn check(resolver: &VersionResolver, source: &dyn ReleaseSource) -> Result<CheckOutcome> {
    let current = resolver.resolve();
    let release = source.latest().await.ok_or(CheckError::Unreachable)?;

    let tag = release.tag_name.trim_start_matches('v').to_string();
    let latest = parse_version(&tag)?;
    let installed = parse_version(&current)?;

    Ok(CheckOutcome {
        update_available: latest > installed,
        current_version: current,
        latest_version: tag,
        release_notes: release.body,
        release_url: release.html_url,
        published_at: release.published_at,
    })
}

fn parse_version(value: &str) -> Result<Version> {
    Version::parse(value).map_err(|source| CheckError::BadVersion {
        version: value.to_string(),
        source,
    })
}
