//! `folio init`: write a commented starter config.

use crate::{config::CONFIG_FILE, config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Write `folio.toml` into `dir` (cwd when `None`), or print it when `dry`.
///
/// Never overwrites an existing file.
pub fn new_config(dir: Option<&Path>, dry: bool) -> Result<()> {
    let template = SiteConfig::starter_template();
    if dry {
        print!("{template}");
        return Ok(());
    }

    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Failed to get current working directory")?,
    };
    let path = write_config(&dir, &template)?;
    log!("init"; "created {}", path.display());
    Ok(())
}

fn write_config(dir: &Path, content: &str) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        bail!("'{}' already exists, refusing to overwrite", path.display());
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(path)
}
