//! Run sidecars: `<stem>.provenance.json` next to each artifact the CLI writes.
//!
//! A sidecar records which command produced the artifact, from which point
//! files, with which parameters and library version.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct Sidecar {
    pub border_version: &'static str,
    pub command: &'static str,
    pub params: Value,
    pub inputs: Vec<PathBuf>,
    pub outputs: Vec<PathBuf>,
}

impl Sidecar {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            border_version: border::VERSION,
            command,
            params,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn input(mut self, path: &Path) -> Self {
        self.inputs.push(path.to_path_buf());
        self
    }

    /// Record `artifact` as the output and write the sidecar next to it.
    pub fn write_next_to(mut self, artifact: &Path) -> Result<PathBuf> {
        self.outputs.push(artifact.to_path_buf());
        let path = artifact.with_extension("provenance.json");
        std::fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing sidecar {}", path.display()))?;
        Ok(path)
    }
}
