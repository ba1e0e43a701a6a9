//! Node.js Runtime
//!
//! The trading bot runs on Node.js, so the installer verifies it before
//! touching the filesystem. Missing or outdated installations are fixed
//! through the OS package manager where that is safe, and through a
//! manual-install-and-confirm loop everywhere else. Every install path
//! ends in a re-check; the flow never continues on an unverified runtime.

use anyhow::{bail, Context, Result};

use crate::command;
use crate::prompts;
use crate::report::Reporter;
use crate::version::Version;

use super::probe::OsFamily;

/// Minimum Node.js version the bot supports.
pub const MIN_NODE_VERSION: Version = Version::new(18, 0);

/// Where to send users who have to install Node.js by hand.
pub const NODE_MANUAL_URL: &str = "https://nodejs.org/";

/// The two-command NodeSource install sequence for Debian-family Linux.
const NODESOURCE_SETUP: &str =
    "curl -fsSL https://deb.nodesource.com/setup_20.x | sudo -E bash -";
const APT_INSTALL_NODE: &str = "sudo apt-get install -y nodejs";

/// Outcome of probing `node --version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    /// Present and at least [`MIN_NODE_VERSION`].
    Installed(Version),
    /// Present but below the minimum.
    TooOld(Version),
    /// Not on PATH, or the version command failed.
    Missing,
}

fn classify_version_output(stdout: &str) -> NodeStatus {
    match Version::parse(stdout) {
        Some(version) if version.meets(MIN_NODE_VERSION) => NodeStatus::Installed(version),
        Some(version) => NodeStatus::TooOld(version),
        None => NodeStatus::Missing,
    }
}

/// Probe the installed Node.js version. Launch failures and non-zero
/// exits both count as "not installed".
pub async fn check_node() -> NodeStatus {
    match command::run("node", &["--version"]).await {
        Ok(output) if output.success => classify_version_output(&output.stdout),
        _ => NodeStatus::Missing,
    }
}

/// Make sure an adequate Node.js is installed, installing it if the user
/// agrees. Returns an error if the runtime cannot be brought up to the
/// minimum version.
pub async fn ensure_node(family: OsFamily, reporter: &Reporter) -> Result<()> {
    match check_node().await {
        NodeStatus::Installed(version) => {
            reporter.success(&format!("Node.js v{} detected", version));
            return Ok(());
        }
        NodeStatus::TooOld(version) => {
            reporter.warning(&format!(
                "Node.js v{} is below the required v{}",
                version, MIN_NODE_VERSION
            ));
        }
        NodeStatus::Missing => reporter.warning("Node.js not found"),
    }

    if !prompts::ask_yes_no("Install Node.js automatically?", true)? {
        reporter.info(&format!(
            "Please install Node.js {}+ manually from {}",
            MIN_NODE_VERSION.major, NODE_MANUAL_URL
        ));
        bail!("Node.js is required but was not installed");
    }

    match family {
        OsFamily::Windows => {
            reporter.info(&format!(
                "Please install Node.js manually from {}",
                NODE_MANUAL_URL
            ));
            reporter.info("Download the Windows Installer (.msi) and run it");
            confirm_manual_install(reporter).await
        }
        OsFamily::MacOs => {
            if which::which("brew").is_ok() {
                reporter.info("Installing Node.js via Homebrew...");
                let output = command::run("brew", &["install", "node"])
                    .await
                    .context("Failed to run brew install")?;
                if !output.success {
                    bail!("Failed to install Node.js: {}", output.stderr);
                }
                verify_after_install(reporter).await
            } else {
                reporter.info(&format!(
                    "Please install Node.js manually from {}",
                    NODE_MANUAL_URL
                ));
                confirm_manual_install(reporter).await
            }
        }
        OsFamily::Linux => {
            reporter.info("Installing Node.js via the NodeSource repository...");
            for script in [NODESOURCE_SETUP, APT_INSTALL_NODE] {
                let output = command::run_shell(script)
                    .await
                    .with_context(|| format!("Failed to run `{}`", script))?;
                if !output.success {
                    bail!("Failed to install Node.js: {}", output.stderr);
                }
            }
            verify_after_install(reporter).await
        }
    }
}

/// Manual-install loop: the user confirms completion and the version
/// check re-runs until it passes or the user gives up.
async fn confirm_manual_install(reporter: &Reporter) -> Result<()> {
    loop {
        if !prompts::ask_yes_no("Have you installed Node.js?", false)? {
            bail!("Node.js is required but was not installed");
        }

        match check_node().await {
            NodeStatus::Installed(version) => {
                reporter.success(&format!("Node.js v{} detected", version));
                return Ok(());
            }
            NodeStatus::TooOld(version) => reporter.warning(&format!(
                "Node.js v{} is still below the required v{}",
                version, MIN_NODE_VERSION
            )),
            NodeStatus::Missing => reporter.warning("Node.js still not detected"),
        }
    }
}

async fn verify_after_install(reporter: &Reporter) -> Result<()> {
    match check_node().await {
        NodeStatus::Installed(version) => {
            reporter.success(&format!("Node.js v{} detected", version));
            Ok(())
        }
        NodeStatus::TooOld(version) => bail!(
            "Installed Node.js v{} is still below the required v{}",
            version,
            MIN_NODE_VERSION
        ),
        NodeStatus::Missing => bail!("Node.js installation did not complete"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_version_is_installed() {
        assert_eq!(
            classify_version_output("v20.11.1"),
            NodeStatus::Installed(Version::new(20, 11))
        );
    }

    #[test]
    fn test_minimum_version_exactly_passes() {
        assert_eq!(
            classify_version_output("v18.0.0"),
            NodeStatus::Installed(Version::new(18, 0))
        );
    }

    #[test]
    fn test_old_version_is_too_old() {
        assert_eq!(
            classify_version_output("v16.3.2"),
            NodeStatus::TooOld(Version::new(16, 3))
        );
    }

    #[test]
    fn test_unparsable_output_is_missing() {
        assert_eq!(classify_version_output("command not found"), NodeStatus::Missing);
        assert_eq!(classify_version_output(""), NodeStatus::Missing);
    }
}
