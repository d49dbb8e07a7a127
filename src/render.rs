//! The rendering pass: substitute the context into a template, write the
//! artifact, and echo it.

use crate::error::{BootstrapError, Result};
use crate::fs::atomic_write_file;
use crate::template::{MissingPolicy, placeholders, render_template};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A rendered configuration and where it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub path: PathBuf,
    pub content: String,
}

/// Render `template` with `context` and write the result to `output_path`.
///
/// Nothing is written when rendering fails. The file is replaced in full on
/// success.
pub fn render(
    template: &str,
    context: &HashMap<String, String>,
    output_path: &Path,
    policy: MissingPolicy,
) -> Result<RenderedArtifact> {
    debug!(variables = context.len(), ?policy, "rendering template");
    if policy == MissingPolicy::Empty {
        for name in placeholders(template)? {
            if !context.contains_key(&name) {
                warn!(placeholder = %name, "no value set, rendering as empty");
            }
        }
    }
    let content = render_template(template, context, policy)?;

    atomic_write_file(output_path, &content)?;
    info!(
        path = %output_path.display(),
        bytes = content.len(),
        "wrote bootstrap configuration"
    );

    Ok(RenderedArtifact {
        path: output_path.to_path_buf(),
        content,
    })
}

/// Print the artifact path and content for the operator.
pub fn echo<W: Write>(out: &mut W, artifact: &RenderedArtifact) -> Result<()> {
    let stdout_error = |e: std::io::Error| BootstrapError::Io {
        path: PathBuf::from("<stdout>"),
        message: e.to_string(),
    };

    writeln!(out, "content of {} : ", artifact.path.display()).map_err(stdout_error)?;
    out.write_all(artifact.content.as_bytes())
        .map_err(stdout_error)?;
    out.flush().map_err(stdout_error)
}
