//! Atomic file replacement for the rendered artifact.
//!
//! Writes follow this pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! The target therefore holds either its previous content or the complete new
//! content. On crash a temporary file named `.{filename}.tmp` may remain.
//! Concurrent writers to the same target still race; the last rename wins.
//!
//! The parent directory must already exist.

use crate::error::{BootstrapError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating or replacing it.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, path, content)?;
    replace(&temp_path, path)
}

/// Atomically write a string to a file.
///
/// Convenience wrapper around `atomic_write` for string content.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| io_error(target, "invalid file path".to_string()))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Write content to the temporary file and sync it to disk.
fn write_and_sync(temp_path: &Path, target: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(temp_path).map_err(|e| {
        io_error(
            target,
            format!(
                "failed to create temporary file '{}': {}",
                temp_path.display(),
                e
            ),
        )
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        io_error(target, format!("failed to write temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(temp_path);
        io_error(target, format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

/// Rename the temporary file over the target.
///
/// `fs::rename` replaces an existing destination on both POSIX and Windows.
fn replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        io_error(target, format!("failed to replace file: {}", e))
    })?;

    // Persist the directory entry; opening a directory fails on Windows.
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

fn io_error(path: &Path, message: String) -> BootstrapError {
    BootstrapError::Io {
        path: path.to_path_buf(),
        message,
    }
}
