//! Evidence service
//!
//! Resolves evidence file paths against the configured evidence root.
//! Requested paths come straight from URLs, so resolution refuses anything
//! that could escape the root: absolute paths, drive prefixes, and `..`
//! components.

use std::path::{Component, Path, PathBuf};
use tracing::instrument;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Evidence service
pub struct EvidenceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EvidenceService<'a> {
    /// Create a new EvidenceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve a relative evidence path to a file under the evidence root.
    ///
    /// Returns the absolute-ish joined path for streaming. Fails with a
    /// validation error for unsafe paths and not-found when the file does
    /// not exist or is a directory.
    #[instrument(skip(self))]
    pub async fn resolve_file(&self, raw: &str) -> ServiceResult<PathBuf> {
        let relative = sanitize(raw)?;
        let root = PathBuf::from(self.ctx.settings().evidence_dir());
        let full = root.join(relative);

        match tokio::fs::metadata(&full).await {
            Ok(meta) if meta.is_file() => Ok(full),
            Ok(_) => Err(ServiceError::not_found("Evidence file", raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ServiceError::not_found("Evidence file", raw))
            }
            Err(e) => Err(ServiceError::internal(format!(
                "Failed to stat evidence file: {e}"
            ))),
        }
    }
}

/// Validate that a requested path is a plain relative path.
fn sanitize(raw: &str) -> ServiceResult<&Path> {
    if raw.trim().is_empty() {
        return Err(ServiceError::validation("evidence path is required"));
    }

    let path = Path::new(raw);
    let safe = path
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if path.is_absolute() || !safe {
        return Err(ServiceError::validation(
            "evidence paths must be relative and must not contain '..'",
        ));
    }

    Ok(path)
}
