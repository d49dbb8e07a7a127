//! Output path derivation.
//!
//! The rendered artifact lives next to its source: the `-template` marker is
//! dropped from the source's file stem and the extension becomes `yaml`.
//!
//! ```text
//! /a/b/name-template.ext  ->  /a/b/name.yaml
//! /usr/local/bin/envoy-template  ->  /usr/local/bin/envoy.yaml
//! ```

use crate::error::{BootstrapError, Result};
use std::path::{Path, PathBuf};

/// Marker identifying the template source in a file name.
pub const TEMPLATE_MARKER: &str = "-template";

/// Extension of the rendered artifact.
pub const OUTPUT_EXTENSION: &str = "yaml";

/// Derive the rendered artifact path from a template source path.
///
/// Relative paths are resolved against the current working directory. The
/// directory is kept as-is; only the file name changes.
pub fn derive_output_path<P: AsRef<Path>>(source: P) -> Result<PathBuf> {
    let source = absolute(source.as_ref())?;

    let file_name = source.file_name().ok_or_else(|| {
        BootstrapError::OutputPath(format!("'{}' has no file name", source.display()))
    })?;
    let file_name = file_name.to_str().ok_or_else(|| {
        BootstrapError::OutputPath(format!(
            "file name of '{}' is not valid UTF-8",
            source.display()
        ))
    })?;

    let stem = match file_name.rfind('.') {
        Some(dot) if dot > 0 => &file_name[..dot],
        _ => file_name,
    };
    let stem = stem.strip_suffix(TEMPLATE_MARKER).unwrap_or(stem);
    if stem.is_empty() {
        return Err(BootstrapError::OutputPath(format!(
            "'{}' leaves an empty file name once the '{}' marker is removed",
            source.display(),
            TEMPLATE_MARKER
        )));
    }

    Ok(source.with_file_name(format!("{}.{}", stem, OUTPUT_EXTENSION)))
}

/// The default output path, derived from the running executable.
pub fn default_output_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| {
        BootstrapError::OutputPath(format!("failed to locate the running executable: {}", e))
    })?;
    derive_output_path(exe)
}

/// Make `path` absolute without touching the filesystem.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| {
        BootstrapError::OutputPath(format!(
            "failed to resolve '{}' to an absolute path: {}",
            path.display(),
            e
        ))
    })
}
