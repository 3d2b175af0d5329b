//! Settings service
//!
//! The only mutable setting is the evidence root directory. It lives in a
//! small JSON file next to the database so it survives restarts, with an
//! in-memory copy guarded by a `RwLock` for cheap reads on the hot path
//! (every evidence download resolves against it).

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use validator::Validate;

use crate::dto::{SettingsResponse, UpdateSettingsRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Persisted settings shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSettings {
    pub evidence_dir: String,
}

/// File-backed settings store
pub struct SettingsStore {
    path: PathBuf,
    inner: RwLock<StoredSettings>,
}

impl SettingsStore {
    /// Load settings from `path`, falling back to `default_evidence_dir`
    /// when the file is missing or unreadable.
    pub fn load(path: impl Into<PathBuf>, default_evidence_dir: &str) -> Self {
        let path = path.into();
        let settings = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<StoredSettings>(&raw) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Malformed settings file, using defaults");
                    StoredSettings {
                        evidence_dir: default_evidence_dir.to_string(),
                    }
                }
            },
            Err(_) => StoredSettings {
                evidence_dir: default_evidence_dir.to_string(),
            },
        };
        Self {
            path,
            inner: RwLock::new(settings),
        }
    }

    /// Current evidence root directory
    pub fn evidence_dir(&self) -> String {
        self.inner.read().evidence_dir.clone()
    }

    /// Replace the evidence root and persist to disk.
    ///
    /// The lock is held across the write so concurrent updates cannot
    /// interleave a stale snapshot into the file.
    pub fn set_evidence_dir(&self, evidence_dir: &str) -> ServiceResult<()> {
        let mut guard = self.inner.write();
        guard.evidence_dir = evidence_dir.to_string();
        let raw = serde_json::to_string_pretty(&*guard)
            .map_err(|e| ServiceError::internal(format!("Failed to encode settings: {e}")))?;
        fs::write(&self.path, raw)
            .map_err(|e| ServiceError::internal(format!("Failed to write settings file: {e}")))?;
        Ok(())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Settings service
pub struct SettingsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SettingsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Read current settings
    pub fn get_settings(&self) -> SettingsResponse {
        SettingsResponse {
            evidence_dir: self.ctx.settings().evidence_dir(),
        }
    }

    /// Update and persist settings
    ///
    /// The new evidence root must already exist as a directory; evidence
    /// downloads resolve against it immediately after the update.
    pub fn update_settings(&self, request: UpdateSettingsRequest) -> ServiceResult<SettingsResponse> {
        request.validate()?;
        if !Path::new(&request.evidence_dir).is_dir() {
            return Err(ServiceError::validation(format!(
                "Evidence directory does not exist: {}",
                request.evidence_dir
            )));
        }
        self.ctx.settings().set_evidence_dir(&request.evidence_dir)?;
        info!(evidence_dir = %request.evidence_dir, "Settings updated");
        Ok(SettingsResponse {
            evidence_dir: request.evidence_dir,
        })
    }
}
