//! ALGORITMIT Installer
//!
//! The entry point. Parses CLI args, wires up logging and the reporter,
//! and runs the installation while watching for Ctrl-C so an interrupt
//! aborts cleanly with its own exit status.

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use algoritmit_installer::error::Abort;
use algoritmit_installer::install;
use algoritmit_installer::report::{Palette, Reporter};

const EXIT_FAILURE: i32 = 1;
const EXIT_INTERRUPTED: i32 = 130;

/// Installer for the ALGORITMIT Worldchain trading bot.
#[derive(Parser, Debug)]
#[command(
    name = "algoritmit-installer",
    version,
    about = "Installer for the ALGORITMIT Worldchain trading bot",
    long_about = "Checks the host environment, installs Node.js if needed, downloads \
                  the ALGORITMIT trading bot, installs its dependencies, and writes \
                  the default configuration and launch scripts."
)]
struct Cli {}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let reporter = Reporter::new(Palette::detect());

    // The installer runs on its own task so Ctrl-C is still serviced
    // while a step (or a prompt) has the other task busy.
    let install_task = tokio::spawn(async move { install::run(&reporter).await });

    let code = tokio::select! {
        joined = install_task => match joined {
            Ok(Ok(_install_dir)) => 0,
            Ok(Err(err)) => match err.downcast_ref::<Abort>() {
                Some(Abort::Cancelled) => {
                    reporter.info("Installation cancelled by user.");
                    EXIT_FAILURE
                }
                Some(Abort::Interrupted) => {
                    println!();
                    reporter.warning("Installation interrupted.");
                    EXIT_INTERRUPTED
                }
                None => {
                    reporter.error(&format!("{:#}", err));
                    EXIT_FAILURE
                }
            },
            Err(err) => {
                reporter.error(&format!("Installer task failed: {}", err));
                EXIT_FAILURE
            }
        },
        _ = signal::ctrl_c() => {
            println!();
            reporter.warning("Installation interrupted.");
            EXIT_INTERRUPTED
        }
    };

    std::process::exit(code);
}
