//! Installation Flow
//!
//! The ordered installation steps and the orchestrator that runs them.
//! Steps run strictly in sequence; the first failure aborts the run.
//! Only the per-package SDK installs in [`deps`] downgrade failures to
//! warnings.

pub mod config;
pub mod deps;
pub mod fetch;
pub mod launcher;
pub mod probe;
pub mod runtime;
pub mod workspace;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::Abort;
use crate::prompts;
use crate::report::Reporter;

use self::probe::OsFamily;

const TOTAL_STEPS: usize = 8;

/// Run the full installation. Returns the workspace path on success.
pub async fn run(reporter: &Reporter) -> Result<PathBuf> {
    reporter.banner();
    reporter.plain("Welcome to the ALGORITMIT installer.");
    println!();
    reporter.warning("Important: this is a machine learning trading bot that handles real money.");
    reporter.warning("Please read each step carefully and understand what you are installing.");
    println!();

    if !prompts::ask_yes_no("Continue with installation?", true)? {
        return Err(Abort::Cancelled.into());
    }

    reporter.step(1, TOTAL_STEPS, "System Requirements Check");
    let host = probe::detect_host()?;
    reporter.info(&format!("Installer v{}", env!("CARGO_PKG_VERSION")));
    reporter.info(&format!("Operating System: {} ({})", host.family.name(), host.os));
    reporter.info(&format!("Architecture: {}", host.arch));
    probe::check_connectivity().await?;
    reporter.success("Internet connection verified");

    reporter.step(2, TOTAL_STEPS, "Node.js Installation");
    runtime::ensure_node(host.family, reporter).await?;

    reporter.step(3, TOTAL_STEPS, "Setup Installation Directory");
    let install_dir = workspace::default_install_dir();
    workspace::provision(&install_dir, reporter, || {
        prompts::ask_yes_no("Remove existing directory?", false)
    })?;

    reporter.step(4, TOTAL_STEPS, "Download ALGORITMIT Source Code");
    fetch::download_and_extract(&install_dir, reporter).await?;

    reporter.step(5, TOTAL_STEPS, "Install Dependencies");
    deps::install(&install_dir, reporter).await?;

    reporter.step(6, TOTAL_STEPS, "Setup Configuration");
    config::write_config(&install_dir, reporter)?;

    reporter.step(7, TOTAL_STEPS, "Create Helper Scripts");
    launcher::write_launchers(&install_dir, host.family, reporter)?;

    reporter.step(8, TOTAL_STEPS, "Installation Complete");
    print_summary(&install_dir, host.family, reporter);

    Ok(install_dir)
}

/// Final instructions and safety warnings.
fn print_summary(install_dir: &Path, family: OsFamily, reporter: &Reporter) {
    reporter.success("ALGORITMIT Machine Learning Trading Bot has been installed!");
    println!();
    reporter.info(&format!("Installation location: {}", install_dir.display()));
    println!();

    reporter.plain("NEXT STEPS:");
    println!();
    reporter.plain("1. Configure your wallet:");
    reporter.plain(&format!(
        "   Edit {} and add your private key to PRIVATE_KEY_1",
        install_dir.join(config::CONFIG_FILENAME).display()
    ));
    println!();
    reporter.plain("2. Start ALGORITMIT:");
    match family {
        OsFamily::Windows => {
            reporter.plain(&format!("   Double-click: {}", install_dir.join("start.bat").display()));
            reporter.plain(&format!(
                "   Or run: cd {} && node {}",
                install_dir.display(),
                launcher::ENTRY_POINT
            ));
        }
        OsFamily::MacOs | OsFamily::Linux => {
            reporter.plain(&format!("   Run: cd {} && ./start.sh", install_dir.display()));
            reporter.plain(&format!(
                "   Or: cd {} && node {}",
                install_dir.display(),
                launcher::ENTRY_POINT
            ));
        }
    }
    println!();
    reporter.plain("3. CRITICAL - Enable Learning Mode FIRST:");
    reporter.plain("   Enable the ALGORITMIT strategy, turn on Learning Mode,");
    reporter.plain("   and let it learn for 24+ hours before any live trading.");
    println!();

    reporter.error("CRITICAL SAFETY REMINDERS:");
    reporter.error("  - ALWAYS start with Learning Mode for 24+ hours");
    reporter.error("  - Use tiny amounts (0.01 WLD) for initial testing");
    reporter.error("  - Never risk more than you can afford to lose");
    reporter.error("  - Monitor all trades closely");
}
