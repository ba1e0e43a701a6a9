//! Environment Probe
//!
//! First gate of the installation: the host must be a supported platform
//! and must be able to reach the internet. Nothing is written to disk
//! before both checks pass.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Reachable host used purely as a connectivity probe.
pub const PROBE_URL: &str = "https://www.google.com";

/// Timeout for the connectivity probe. Any failure within this window,
/// whatever the cause, counts as "no connectivity".
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// The platform families the installer knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    MacOs,
    Linux,
}

impl OsFamily {
    pub fn from_os(os: &str) -> Option<OsFamily> {
        match os {
            "windows" => Some(OsFamily::Windows),
            "macos" => Some(OsFamily::MacOs),
            "linux" => Some(OsFamily::Linux),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OsFamily::Windows => "Windows",
            OsFamily::MacOs => "macOS",
            OsFamily::Linux => "Linux",
        }
    }
}

/// What the probe learned about the host.
#[derive(Debug, Clone, Copy)]
pub struct HostReport {
    pub family: OsFamily,
    pub os: &'static str,
    pub arch: &'static str,
}

/// Identify the host platform, failing on anything unsupported.
pub fn detect_host() -> Result<HostReport> {
    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;

    let Some(family) = OsFamily::from_os(os) else {
        bail!("Unsupported operating system: {}", os);
    };

    Ok(HostReport { family, os, arch })
}

/// Probe internet reachability with a single short-timeout HTTPS request.
///
/// DNS failures, timeouts, TLS problems, and refused connections are all
/// classified the same way: no connectivity.
pub async fn check_connectivity() -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    match client.get(PROBE_URL).send().await {
        Ok(_) => Ok(()),
        Err(err) => {
            debug!(error = %err, "connectivity probe failed");
            bail!("No internet connection detected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_families() {
        assert_eq!(OsFamily::from_os("windows"), Some(OsFamily::Windows));
        assert_eq!(OsFamily::from_os("macos"), Some(OsFamily::MacOs));
        assert_eq!(OsFamily::from_os("linux"), Some(OsFamily::Linux));
    }

    #[test]
    fn test_unknown_platform_is_unsupported() {
        assert_eq!(OsFamily::from_os("freebsd"), None);
        assert_eq!(OsFamily::from_os(""), None);
    }

    #[test]
    fn test_detect_host_on_this_machine() {
        // The test suite only runs on supported platforms.
        let host = detect_host().unwrap();
        assert_eq!(host.os, std::env::consts::OS);
        assert!(!host.arch.is_empty());
    }
}
