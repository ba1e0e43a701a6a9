//! Workspace Provisioning
//!
//! Creates the installation directory under the user's home. An existing
//! directory is only removed after an explicit confirmation; declining
//! leaves it untouched and cancels the installation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::Abort;
use crate::report::Reporter;

/// Directory name of the workspace under the user's home.
pub const INSTALL_DIR_NAME: &str = "algoritmit-bot";

/// The fixed installation target: `~/algoritmit-bot`.
pub fn default_install_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(INSTALL_DIR_NAME)
}

/// Create the workspace directory, recreating it if the user confirms
/// removal of an existing one.
///
/// `confirm_removal` is only consulted when the directory already exists;
/// a declined removal surfaces as [`Abort::Cancelled`].
pub fn provision<F>(dir: &Path, reporter: &Reporter, mut confirm_removal: F) -> Result<()>
where
    F: FnMut() -> Result<bool>,
{
    reporter.info(&format!("Installation directory: {}", dir.display()));

    if dir.exists() {
        reporter.warning("Directory already exists");
        if !confirm_removal()? {
            return Err(Abort::Cancelled.into());
        }
        fs::remove_dir_all(dir)
            .with_context(|| format!("Failed to remove {}", dir.display()))?;
        reporter.success("Old directory removed");
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    reporter.success(&format!("Created directory: {}", dir.display()));

    Ok(())
}
