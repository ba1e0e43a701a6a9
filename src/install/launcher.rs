//! Launcher Scripts
//!
//! Generates the convenience scripts that start the bot and re-run the
//! installer for updates. Batch files on Windows, executable shell
//! scripts elsewhere. Only the invocation lines matter to the bot; the
//! rest is banner text.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::report::Reporter;

use super::probe::OsFamily;

/// Entry point of the installed trading bot.
pub const ENTRY_POINT: &str = "worldchain-trading-bot.js";

const SAFETY_LINES: [&str; 3] = [
    "Start with Learning Mode for 24+ hours",
    "Use tiny amounts (0.01 WLD) for testing",
    "Never risk more than you can afford to lose",
];

/// Write the start/update scripts for the given platform family.
pub fn write_launchers(workspace: &Path, family: OsFamily, reporter: &Reporter) -> Result<()> {
    // Path of this installer, so the update script can re-run it.
    let installer = env::current_exe()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|_| String::from("algoritmit-installer"));

    match family {
        OsFamily::Windows => {
            write_script(&workspace.join("start.bat"), &start_bat())?;
            write_script(&workspace.join("update.bat"), &update_bat(&installer))?;
            reporter.success("Created Windows batch files (start.bat, update.bat)");
        }
        OsFamily::MacOs | OsFamily::Linux => {
            write_script(&workspace.join("start.sh"), &start_sh())?;
            write_script(&workspace.join("update.sh"), &update_sh(&installer))?;
            reporter.success("Created shell scripts (start.sh, update.sh)");
        }
    }

    Ok(())
}

/// Write a script and, where the platform requires it, mark it executable.
fn write_script(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("Failed to mark {} executable", path.display()))?;
    }

    Ok(())
}

fn start_sh() -> String {
    let mut script = String::from("#!/bin/bash\n");
    script.push_str("echo \"🤖 Starting ALGORITMIT Machine Learning Trading Bot...\"\n");
    script.push_str("echo \"📊 AI-Powered Trading for Worldchain\"\n");
    script.push_str("echo \"\"\n");
    script.push_str("echo \"⚠️  SAFETY REMINDER:\"\n");
    for line in SAFETY_LINES {
        script.push_str(&format!("echo \"   • {}\"\n", line));
    }
    script.push_str("echo \"\"\n");
    script.push_str(&format!("node {}\n", ENTRY_POINT));
    script
}

fn update_sh(installer: &str) -> String {
    format!(
        "#!/bin/bash\n\
         echo \"🔄 Updating ALGORITMIT...\"\n\
         \"{}\"\n\
         echo \"✅ Update complete!\"\n",
        installer
    )
}

fn start_bat() -> String {
    let mut script = String::from("@echo off\n");
    script.push_str("echo Starting ALGORITMIT Machine Learning Trading Bot...\n");
    script.push_str("echo AI-Powered Trading for Worldchain\n");
    script.push_str("echo.\n");
    script.push_str("echo SAFETY REMINDER:\n");
    for line in SAFETY_LINES {
        script.push_str(&format!("echo    - {}\n", line));
    }
    script.push_str("echo.\n");
    script.push_str(&format!("node {}\n", ENTRY_POINT));
    script.push_str("pause\n");
    script
}

fn update_bat(installer: &str) -> String {
    format!(
        "@echo off\n\
         echo Updating ALGORITMIT...\n\
         \"{}\"\n\
         echo Update complete!\n\
         pause\n",
        installer
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Palette, Reporter};

    #[test]
    fn test_unix_launchers_invoke_the_bot() {
        let workspace = tempfile::tempdir().unwrap();
        let reporter = Reporter::new(Palette::Plain);

        write_launchers(workspace.path(), OsFamily::Linux, &reporter).unwrap();

        let start = fs::read_to_string(workspace.path().join("start.sh")).unwrap();
        assert!(start.contains(&format!("node {}", ENTRY_POINT)));
        assert!(workspace.path().join("update.sh").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_launchers_are_executable() {
        use std::os::unix::fs::PermissionsExt;

        let workspace = tempfile::tempdir().unwrap();
        let reporter = Reporter::new(Palette::Plain);

        write_launchers(workspace.path(), OsFamily::Linux, &reporter).unwrap();

        for name in ["start.sh", "update.sh"] {
            let mode = fs::metadata(workspace.path().join(name))
                .unwrap()
                .permissions()
                .mode();
            assert_ne!(mode & 0o111, 0, "{} is not executable", name);
        }
    }

    #[test]
    fn test_windows_launchers_invoke_the_bot() {
        let workspace = tempfile::tempdir().unwrap();
        let reporter = Reporter::new(Palette::Plain);

        write_launchers(workspace.path(), OsFamily::Windows, &reporter).unwrap();

        let start = fs::read_to_string(workspace.path().join("start.bat")).unwrap();
        assert!(start.contains(&format!("node {}", ENTRY_POINT)));
        assert!(workspace.path().join("update.bat").exists());
    }
}
