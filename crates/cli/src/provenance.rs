use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to every written table or figure.
pub struct Payload {
    pub params: Value,
    pub rows: usize,
    /// Seed that replays the artifact, when it came from a simulation.
    pub seed: Option<u64>,
    /// Whether every run behind the artifact reached convergence.
    pub converged: Option<bool>,
}

impl Payload {
    pub fn new(params: Value, rows: usize) -> Self {
        Self {
            params,
            rows,
            seed: None,
            converged: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_converged(mut self, converged: bool) -> Self {
        self.converged = Some(converged);
        self
    }
}

/// Write `<artifact file name>.provenance.json` next to `artifact`.
///
/// The full file name is kept so `run.csv` and `run.parquet` get separate sidecars.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = sidecar_path(artifact);
    ensure_parent(&sidecar)?;

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": code_rev(),
        "version": treeflip::VERSION,
        "callsite": format!("{}:{}", callsite.file(), callsite.line()),
        "seed": payload.seed,
        "converged": payload.converged,
        "params": payload.params,
        "rows": payload.rows,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    tracing::debug!(path = %sidecar.display(), "provenance");
    Ok(sidecar)
}

/// Standalone block printed by `treeflip report`.
pub fn report_doc() -> Value {
    json!({
        "code_rev": code_rev(),
        "version": treeflip::VERSION,
        "params": {},
        "outputs": []
    })
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }
    Ok(())
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_name()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "artifact".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash from `GIT_COMMIT` (build time, then run time), else `git rev-parse`.
pub fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|rev| rev.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
