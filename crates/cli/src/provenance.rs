//! Provenance records: which build and which parameters produced a step log.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Provenance block (used by `report` and as the sidecar body).
pub fn block(params: Value, outputs: &[String]) -> Value {
    json!({
        "code_rev": code_rev(),
        "version": hull2d::VERSION,
        "params": params,
        "outputs": outputs,
    })
}

/// Write `<stem>.provenance.json` next to `artifact` and return its path.
pub fn write_sidecar(artifact: &Path, params: Value) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let doc = block(params, &[artifact.display().to_string()]);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "steps".into(), |s| s.to_string_lossy());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` if set, else `git rev-parse HEAD`, else `"unknown"`.
fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
