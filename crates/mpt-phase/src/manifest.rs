//! Run manifest serialization helpers.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use mpt_core::errors::{ErrorInfo, MptError};
use mpt_core::RunProvenance;
use serde::{Deserialize, Serialize};

use crate::config::SweepConfig;
use crate::hash::stable_hash_string;

/// Structured manifest describing a completed sweep run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    /// Configuration used for the run.
    pub config: SweepConfig,
    /// Provenance stamp: configuration hash, master seed, creation time.
    pub provenance: RunProvenance,
    /// Artefact files produced by the run (relative to the run directory).
    pub artefacts: Vec<PathBuf>,
}

impl RunManifest {
    /// Builds a manifest for the given configuration, stamping the canonical
    /// configuration hash and the current time.
    pub fn new(config: SweepConfig, artefacts: Vec<PathBuf>) -> Result<Self, MptError> {
        let config_hash = stable_hash_string(&config)?;
        let mut tool_versions = BTreeMap::new();
        tool_versions.insert(
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        );
        let provenance = RunProvenance {
            config_hash,
            seed: config.seed_policy.master_seed,
            created_at: Utc::now().to_rfc3339(),
            tool_versions,
        };
        Ok(Self {
            config,
            provenance,
            artefacts,
        })
    }

    /// Writes the manifest to a JSON file.
    pub fn write(&self, path: &Path) -> Result<(), MptError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                MptError::Io(
                    ErrorInfo::new("manifest-mkdir", err.to_string())
                        .with_context("path", parent.display().to_string()),
                )
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            MptError::Serde(
                ErrorInfo::new("manifest-serialize", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        fs::write(path, json).map_err(|err| {
            MptError::Io(
                ErrorInfo::new("manifest-write", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Loads a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, MptError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            MptError::Io(
                ErrorInfo::new("manifest-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            MptError::Serde(
                ErrorInfo::new("manifest-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}
