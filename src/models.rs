//! Data records produced while checking an HTML entrypoint.

use std::path::PathBuf;

use serde::Serialize;

/// A raw `src`/`href` attribute value captured by the tag scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Attribute value exactly as written in the document.
    pub raw: String,
    /// 1-based line number of the tag carrying the attribute.
    pub line: u64,
}

/// A local reference whose resolved target does not exist on disk.
#[derive(Debug, Clone, Serialize)]
pub struct MissingReference {
    /// 1-based line number of the tag carrying the reference.
    pub line: u64,
    /// Attribute value exactly as written in the document.
    pub raw: String,
    /// Absolute path the reference resolved to.
    pub resolved: PathBuf,
}

/// Outcome of one validation run over a single entrypoint.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Entrypoint document that was scanned.
    pub entrypoint: PathBuf,
    /// Number of `src`/`href` references found in the document.
    pub references_scanned: usize,
    /// Number of references that named local path candidates worth checking.
    pub references_checked: usize,
    /// References whose resolved targets are missing, in document order.
    pub missing: Vec<MissingReference>,
}

impl CheckReport {
    /// Whether every checked reference resolved to an existing file.
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty()
    }

    /// Process exit code for this report: `0` on a clean run, `1` otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_ok() { 0 } else { 1 }
    }
}
