//! Terminal Reporting
//!
//! Banner, step headers, and status lines for the installation flow.
//! Coloring is decided once at startup from the output stream and the
//! platform, and carried in the `Reporter` rather than toggled globally.

use std::io::IsTerminal;

use colored::{Color, Colorize};

const BANNER: &str = r#"
╔══════════════════════════════════════════════════════════════╗
║                                                              ║
║     A L G O R I T M I T                                      ║
║     Machine Learning Trading Bot for Worldchain              ║
║                                                              ║
╚══════════════════════════════════════════════════════════════╝"#;

/// How output should be styled for the current host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// ANSI colors.
    Ansi,
    /// No styling. Used for non-terminal streams and Windows consoles,
    /// which do not enable ANSI escapes by default.
    Plain,
}

impl Palette {
    pub fn for_host(stream_is_tty: bool, os: &str) -> Palette {
        if stream_is_tty && os != "windows" {
            Palette::Ansi
        } else {
            Palette::Plain
        }
    }

    pub fn detect() -> Palette {
        Self::for_host(std::io::stdout().is_terminal(), std::env::consts::OS)
    }
}

/// User-facing output for the installer. Everything the user reads goes
/// through here; diagnostics go to the `tracing` log instead.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    palette: Palette,
}

impl Reporter {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    fn line(&self, text: &str, color: Color) {
        match self.palette {
            Palette::Ansi => println!("{}", text.color(color)),
            Palette::Plain => println!("{}", text),
        }
    }

    pub fn banner(&self) {
        for row in BANNER.lines() {
            self.line(row, Color::Cyan);
        }
        println!();
    }

    pub fn success(&self, msg: &str) {
        self.line(&format!("✅ {}", msg), Color::Green);
    }

    pub fn warning(&self, msg: &str) {
        self.line(&format!("⚠️  {}", msg), Color::Yellow);
    }

    pub fn error(&self, msg: &str) {
        self.line(&format!("❌ {}", msg), Color::Red);
    }

    pub fn info(&self, msg: &str) {
        self.line(&format!("ℹ️  {}", msg), Color::Blue);
    }

    pub fn plain(&self, msg: &str) {
        self.line(msg, Color::White);
    }

    pub fn step(&self, number: usize, total: usize, title: &str) {
        let rule = "=".repeat(80);
        println!();
        self.line(&rule, Color::Magenta);
        self.line(&format!("STEP {}/{}: {}", number, total, title), Color::White);
        self.line(&rule, Color::Magenta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_tty_stream_is_plain() {
        assert_eq!(Palette::for_host(false, "linux"), Palette::Plain);
        assert_eq!(Palette::for_host(false, "macos"), Palette::Plain);
    }

    #[test]
    fn test_windows_console_is_plain() {
        assert_eq!(Palette::for_host(true, "windows"), Palette::Plain);
    }

    #[test]
    fn test_unix_tty_gets_ansi() {
        assert_eq!(Palette::for_host(true, "linux"), Palette::Ansi);
        assert_eq!(Palette::for_host(true, "macos"), Palette::Ansi);
    }
}
