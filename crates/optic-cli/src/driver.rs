//! Unit discovery, loading, and parallel checking.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use walkdir::WalkDir;

use optic_binder::SourceUnit;
use optic_checker::diagnostics::Diagnostic;
use optic_common::LineMap;

/// File suffix of serialized source units.
pub const UNIT_SUFFIX: &str = ".unit.json";

/// Diagnostics and position info for one checked unit.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub file_name: String,
    /// Present when the exporter included line starts.
    pub line_map: Option<LineMap>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Discover unit files under the given paths.
///
/// Explicit file paths are taken as-is; directories are walked recursively
/// for `*.unit.json` entries in name order, so runs are deterministic.
pub fn discover_units(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry =
                    entry.with_context(|| format!("failed to walk {}", path.display()))?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let is_unit = entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.ends_with(UNIT_SUFFIX));
                if is_unit {
                    found.push(entry.into_path());
                }
            }
        } else {
            found.push(path.clone());
        }
    }
    Ok(found)
}

/// Load one serialized unit.
pub fn load_unit(path: &Path) -> Result<SourceUnit> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to decode source unit {}", path.display()))
}

/// Check every discovered unit, one fresh checker instance per file.
///
/// Units check in parallel; instances share nothing, and report order
/// follows discovery order.
pub fn run(paths: &[PathBuf]) -> Result<Vec<FileReport>> {
    let unit_paths = discover_units(paths)?;
    tracing::debug!(files = unit_paths.len(), "checking units");
    unit_paths
        .par_iter()
        .map(|path| -> Result<FileReport> {
            let unit = load_unit(path)?;
            let diagnostics = optic_checker::check_unit(&unit);
            tracing::debug!(
                file = %unit.file_name,
                count = diagnostics.len(),
                "checked unit"
            );
            let line_map = if unit.line_starts.is_empty() {
                None
            } else {
                Some(LineMap::from_line_starts(unit.line_starts.clone()))
            };
            Ok(FileReport {
                path: path.clone(),
                file_name: unit.file_name,
                line_map,
                diagnostics,
            })
        })
        .collect()
}
