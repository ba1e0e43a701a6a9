//! Dependency Installation
//!
//! Runs `npm install` inside the workspace for the manifest-declared
//! dependencies, then installs the HoldStation SDK packages one by one.
//! The manifest install is required; each SDK package failing is only a
//! warning and never stops the remaining packages.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::command;
use crate::report::Reporter;

/// SDK packages installed on top of the manifest dependencies.
pub const EXTRA_PACKAGES: &[&str] = &[
    "@holdstation/worldchain-sdk@latest",
    "@holdstation/worldchain-ethers-v6@latest",
    "@worldcoin/minikit-js@latest",
];

fn npm_binary() -> &'static str {
    // npm ships as a .cmd shim on Windows; plain `npm` does not resolve
    // through CreateProcess.
    if cfg!(windows) {
        "npm.cmd"
    } else {
        "npm"
    }
}

/// Scoped working-directory change. Restores the previous directory when
/// dropped, on every exit path.
struct WorkdirGuard {
    original: PathBuf,
}

impl WorkdirGuard {
    fn enter(dir: &Path) -> Result<Self> {
        let original =
            env::current_dir().context("Failed to read the current working directory")?;
        env::set_current_dir(dir)
            .with_context(|| format!("Failed to enter {}", dir.display()))?;
        Ok(Self { original })
    }
}

impl Drop for WorkdirGuard {
    fn drop(&mut self) {
        if let Err(err) = env::set_current_dir(&self.original) {
            warn!(error = %err, "failed to restore the working directory");
        }
    }
}

/// Install the bot's npm dependencies inside `workspace`.
pub async fn install(workspace: &Path, reporter: &Reporter) -> Result<()> {
    let _workdir = WorkdirGuard::enter(workspace)?;

    reporter.info("Installing core packages...");
    let output = command::run(npm_binary(), &["install"])
        .await
        .context("Failed to run npm install")?;
    if !output.success {
        bail!("Failed to install core packages: {}", output.stderr);
    }
    reporter.success("Core packages installed");

    reporter.info("Installing HoldStation SDK...");
    for package in EXTRA_PACKAGES {
        match command::run(npm_binary(), &["install", package]).await {
            Ok(output) if output.success => {
                reporter.success(&format!("Installed {}", package));
            }
            Ok(output) => {
                warn!(package = %package, stderr = %output.stderr, "optional package failed");
                reporter.warning(&format!("Failed to install {}: {}", package, output.stderr));
            }
            Err(err) => {
                warn!(package = %package, error = %err, "optional package failed");
                reporter.warning(&format!("Failed to install {}: {}", package, err));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the working directory is process-global, so the
    // guard checks cannot run in parallel with each other.
    #[test]
    fn test_workdir_guard() {
        let before = env::current_dir().unwrap();
        let dir = tempfile::tempdir().unwrap();

        // Restores on drop.
        {
            let _guard = WorkdirGuard::enter(dir.path()).unwrap();
            assert_eq!(
                env::current_dir().unwrap().canonicalize().unwrap(),
                dir.path().canonicalize().unwrap()
            );
        }
        assert_eq!(env::current_dir().unwrap(), before);

        // A failed enter leaves the working directory alone.
        let missing = PathBuf::from("/definitely/not/a/real/directory");
        assert!(WorkdirGuard::enter(&missing).is_err());
        assert_eq!(env::current_dir().unwrap(), before);
    }
}
