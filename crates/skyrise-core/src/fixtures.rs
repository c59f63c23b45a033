//! Client fixture ingestion.
//!
//! Fixtures are `.json` files, each holding an array of client records.
//! Files load in sorted path order so the resulting collection order is
//! deterministic; every record is validated before it is accepted.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::ClientRecord;

pub fn load_clients(data_dir: &Path) -> Result<Vec<ClientRecord>> {
    let files = list_json_files(data_dir);
    if files.is_empty() {
        tracing::warn!(dir = %data_dir.display(), "no .json fixture files found");
        return Ok(vec![]);
    }
    let mut all_clients = Vec::new();
    for file_path in &files {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;
        let records: Vec<ClientRecord> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", file_path.display()))?;
        for record in &records {
            record
                .validate()
                .with_context(|| format!("Invalid record in {}", file_path.display()))?;
        }
        tracing::debug!(file = %file_path.display(), count = records.len(), "loaded fixture file");
        all_clients.extend(records);
    }
    tracing::info!(files = files.len(), clients = all_clients.len(), "fixtures loaded");
    Ok(all_clients)
}

fn list_json_files(root: &Path) -> Vec<PathBuf> {
    let mut json_files = Vec::new();
    for entry in walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            json_files.push(path.to_path_buf());
        }
    }
    json_files.sort();
    json_files
}
