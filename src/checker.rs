//! Validation pipeline that checks entrypoint references against the filesystem.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::config::CheckConfig;
use crate::models::{CheckReport, MissingReference};
use crate::refs::{canonicalize_lenient, normalize_reference, resolve_reference};
use crate::scanner::scan_references;

/// Filesystem locations for one validation run.
#[derive(Debug, Clone)]
pub struct CheckContext {
    /// Absolute project root the other paths hang off.
    pub project_root: PathBuf,
    /// Directory against which root-relative references resolve.
    pub public_root: PathBuf,
    /// HTML document whose references are checked.
    pub entrypoint: PathBuf,
}

impl CheckContext {
    /// Build a context from a project root and its configuration.
    pub fn from_config(project_root: &Path, config: &CheckConfig) -> Result<Self> {
        let project_root = absolutize(project_root)?;
        Ok(Self {
            public_root: config.public_root(&project_root),
            entrypoint: config.entrypoint_path(&project_root),
            project_root,
        })
    }

    /// Build a context for an explicitly chosen entrypoint document.
    ///
    /// The public root still comes from the configuration; only the scanned
    /// document changes. A relative entrypoint is taken relative to the
    /// project root.
    pub fn with_entrypoint(
        project_root: &Path,
        config: &CheckConfig,
        entrypoint: &Path,
    ) -> Result<Self> {
        let project_root = absolutize(project_root)?;
        let entrypoint = if entrypoint.is_absolute() {
            entrypoint.to_path_buf()
        } else {
            project_root.join(entrypoint)
        };
        Ok(Self {
            public_root: config.public_root(&project_root),
            entrypoint,
            project_root,
        })
    }

    /// Directory containing the entrypoint document.
    pub fn entry_dir(&self) -> &Path {
        self.entrypoint.parent().unwrap_or(Path::new("/"))
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(canonicalize_lenient(path));
    }
    let cwd = env::current_dir().context("failed to determine current directory")?;
    Ok(canonicalize_lenient(&cwd.join(path)))
}

/// Run the full validation pipeline for the provided context.
///
/// Fails fast when the entrypoint itself is missing or unreadable, since
/// nothing can be validated without it. Individual missing assets never abort
/// the run; they are collected into the report in document order.
pub fn run_check(context: &CheckContext) -> Result<CheckReport> {
    if !context.entrypoint.exists() {
        bail!("entrypoint not found: {}", context.entrypoint.display());
    }

    let html = fs::read_to_string(&context.entrypoint)
        .with_context(|| format!("failed to read {}", context.entrypoint.display()))?;

    let references = scan_references(&html);
    let entry_dir = context.entry_dir();

    let mut checked = 0usize;
    let mut missing = Vec::new();
    for reference in &references {
        let Some(normalized) = normalize_reference(&reference.raw) else {
            continue;
        };
        checked += 1;
        let target = resolve_reference(&context.public_root, entry_dir, &normalized);
        if !target.exists() {
            missing.push(MissingReference {
                line: reference.line,
                raw: reference.raw.clone(),
                resolved: target,
            });
        }
    }

    Ok(CheckReport {
        entrypoint: context.entrypoint.clone(),
        references_scanned: references.len(),
        references_checked: checked,
        missing,
    })
}
