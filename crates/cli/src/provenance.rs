//! Provenance sidecars for run artifacts.
//!
//! Every trajectory CSV gets a `<stem>.provenance.json` next to it with
//! the code revision, the experiment tag, and the run parameters, so a
//! result file can always be traced back to the commit and flags that
//! produced it.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Write the sidecar for `artifact` and return its path.
pub fn write_sidecar(artifact: &Path, params: Value, tag: Option<&str>) -> Result<PathBuf> {
    let sidecar = sidecar_path(artifact);
    let doc = serde_json::json!({
        "code_rev": current_git_rev(),
        "tag": tag,
        "params": params,
        "outputs": [artifact.to_string_lossy()],
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Code revision for sidecars: `GIT_COMMIT` env override first (set by CI),
/// then `git rev-parse`, else `"unknown"`.
pub fn current_git_rev() -> String {
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    let from_git = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string());
    from_git.unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_swaps_extension() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/out/run.csv")),
            Path::new("/tmp/out/run.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_params_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("run.csv");
        fs::write(&artifact, "step,time\n").unwrap();

        let sidecar =
            write_sidecar(&artifact, json!({"scenario": "circle", "agents": 12}), Some("demo"))
                .unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(parsed["params"]["scenario"], "circle");
        assert_eq!(parsed["tag"], "demo");
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
    }
}
