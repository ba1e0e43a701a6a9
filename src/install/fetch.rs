//! Artifact Fetch
//!
//! Downloads the bot's source archive into the workspace, extracts it,
//! hoists the GitHub wrapper directory out of the way, and removes the
//! archive. Any failure here is total: the caller must not continue
//! with a half-extracted tree.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::report::Reporter;

/// Source archive for the trading bot.
pub const ARCHIVE_URL: &str = "https://github.com/romerodevv/psgho/archive/main.zip";

/// Transient archive file name inside the workspace.
const ARCHIVE_FILENAME: &str = "algoritmit.zip";

const DOWNLOAD_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Download and unpack the source tree into `workspace`.
pub async fn download_and_extract(workspace: &Path, reporter: &Reporter) -> Result<()> {
    reporter.info("Downloading ALGORITMIT from GitHub...");
    let archive_path = workspace.join(ARCHIVE_FILENAME);

    let client = reqwest::Client::builder()
        .connect_timeout(DOWNLOAD_CONNECT_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(ARCHIVE_URL)
        .send()
        .await
        .context("Failed to download the source archive")?
        .error_for_status()
        .context("Source archive download was rejected")?;

    let bytes = response
        .bytes()
        .await
        .context("Failed to read the source archive")?;

    fs::write(&archive_path, &bytes)
        .with_context(|| format!("Failed to write {}", archive_path.display()))?;
    reporter.success("Download completed");

    reporter.info("Extracting files...");
    extract_archive(&archive_path, workspace)?;
    hoist_single_root(workspace, ARCHIVE_FILENAME)?;

    fs::remove_file(&archive_path)
        .with_context(|| format!("Failed to remove {}", archive_path.display()))?;
    reporter.success("Files extracted successfully");

    Ok(())
}

/// Unpack every entry of a zip archive into `dest`.
fn extract_archive(archive: &Path, dest: &Path) -> Result<()> {
    let file = fs::File::open(archive)
        .with_context(|| format!("Failed to open {}", archive.display()))?;

    let mut zip = zip::ZipArchive::new(file).context("Failed to read the downloaded archive")?;
    zip.extract(dest)
        .context("Failed to extract the downloaded archive")?;

    Ok(())
}

/// GitHub archives wrap everything in a single `<repo>-<ref>/` directory.
/// When extraction leaves exactly one top-level directory (ignoring the
/// archive itself), move its children up and delete the emptied wrapper.
fn hoist_single_root(workspace: &Path, archive_name: &str) -> Result<()> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(workspace)
        .with_context(|| format!("Failed to list {}", workspace.display()))?
    {
        let entry = entry.context("Failed to read workspace entry")?;
        if entry.file_name() == archive_name {
            continue;
        }
        entries.push(entry.path());
    }

    let [root] = entries.as_slice() else {
        return Ok(());
    };
    if !root.is_dir() {
        return Ok(());
    }

    for child in
        fs::read_dir(root).with_context(|| format!("Failed to list {}", root.display()))?
    {
        let child = child.context("Failed to read extracted entry")?;
        let target = workspace.join(child.file_name());
        fs::rename(child.path(), &target)
            .with_context(|| format!("Failed to move {}", child.path().display()))?;
    }

    fs::remove_dir(root).with_context(|| format!("Failed to remove {}", root.display()))?;
    Ok(())
}
