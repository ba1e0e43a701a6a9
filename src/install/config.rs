//! Configuration
//!
//! Writes the bot's default `.env` into the workspace. The keys are read
//! by the trading bot itself and must stay exactly as they are; the
//! secrets are placeholders the user fills in afterwards.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::report::Reporter;

/// Configuration file name inside the workspace.
pub const CONFIG_FILENAME: &str = ".env";

/// The default configuration, placeholder secrets included.
pub const CONFIG_TEMPLATE: &str = "\
# ALGORITMIT Configuration
PRIVATE_KEY_1=your_private_key_here
WALLET_NAME_1=Main Trading Wallet

# RPC Configuration
WORLDCHAIN_RPC_URL=https://worldchain-mainnet.g.alchemy.com/public
ALCHEMY_API_KEY=your_alchemy_api_key_here

# Trading Configuration
WLD_TOKEN_ADDRESS=0x2cfc85d8e48f8eab294be644d9e25C3030863003
DEFAULT_SLIPPAGE=1.0
MAX_GAS_PRICE=50

# ALGORITMIT ML Settings
ML_CONFIDENCE_THRESHOLD=75
ML_MAX_POSITION_SIZE=0.1
ML_LEARNING_MODE=true
ML_AUTO_TRADING=false
";

/// Write the default configuration, replacing any existing file outright.
pub fn write_config(workspace: &Path, reporter: &Reporter) -> Result<()> {
    reporter.info("Setting up configuration...");

    let path = workspace.join(CONFIG_FILENAME);
    fs::write(&path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to create configuration at {}", path.display()))?;

    reporter.success("Configuration file created (.env)");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Palette, Reporter};

    const EXPECTED_KEYS: &[&str] = &[
        "PRIVATE_KEY_1",
        "WALLET_NAME_1",
        "WORLDCHAIN_RPC_URL",
        "ALCHEMY_API_KEY",
        "WLD_TOKEN_ADDRESS",
        "DEFAULT_SLIPPAGE",
        "MAX_GAS_PRICE",
        "ML_CONFIDENCE_THRESHOLD",
        "ML_MAX_POSITION_SIZE",
        "ML_LEARNING_MODE",
        "ML_AUTO_TRADING",
    ];

    #[test]
    fn test_all_documented_keys_are_written() {
        let workspace = tempfile::tempdir().unwrap();
        write_config(workspace.path(), &Reporter::new(Palette::Plain)).unwrap();

        let contents = fs::read_to_string(workspace.path().join(CONFIG_FILENAME)).unwrap();
        for key in EXPECTED_KEYS {
            assert!(
                contents.lines().any(|line| line.starts_with(&format!("{}=", key))),
                "missing key {}",
                key
            );
        }
    }

    #[test]
    fn test_existing_config_is_overwritten() {
        let workspace = tempfile::tempdir().unwrap();
        let path = workspace.path().join(CONFIG_FILENAME);
        fs::write(&path, "PRIVATE_KEY_1=old_secret\n").unwrap();

        write_config(workspace.path(), &Reporter::new(Palette::Plain)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("old_secret"));
        assert!(contents.contains("PRIVATE_KEY_1=your_private_key_here"));
    }
}
