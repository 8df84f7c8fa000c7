use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::models::Digest;

/// Write the digest as pretty JSON, replacing whatever was there before.
pub fn write_digest(digest: &Digest, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(digest).context("Failed to serialize digest")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote digest to {}", path.display());
    Ok(())
}
