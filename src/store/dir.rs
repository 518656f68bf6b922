use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the tick directory - checks for local .tick first, then falls back to global ~/.tick
pub fn get_tick_dir() -> Result<PathBuf> {
    // Check for local .tick directory
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let local_tick = find_local_tick(&current_dir);

    if let Some(local_dir) = local_tick {
        return Ok(local_dir);
    }

    // Fall back to global ~/.tick
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".tick"))
}

/// Find local .tick directory by walking up the directory tree
fn find_local_tick(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let tick_dir = current.join(".tick");
        if tick_dir.exists() && tick_dir.is_dir() {
            return Some(tick_dir);
        }

        // Move up to parent directory
        current = current.parent()?;
    }
}

/// Ensure the tick directory exists
pub fn ensure_tick_dir() -> Result<PathBuf> {
    let dir = get_tick_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .tick directory in the current directory
pub fn init_local_tick() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let tick_dir = current_dir.join(".tick");

    if tick_dir.exists() {
        anyhow::bail!("Tick directory already exists: {}", tick_dir.display());
    }

    fs::create_dir_all(&tick_dir)
        .with_context(|| format!("Failed to create directory: {}", tick_dir.display()))?;

    Ok(tick_dir)
}
