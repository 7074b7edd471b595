use std::fs;
use std::path::{Component, Path, PathBuf};

/// Map a normalized local reference onto one absolute filesystem path.
///
/// Leading-slash references use root-relative semantics against the public
/// root, the way a web server maps request paths onto its document root.
/// Everything else is resolved against the directory containing the
/// entrypoint document.
pub fn resolve_reference(public_root: &Path, entry_dir: &Path, path: &str) -> PathBuf {
    if path.starts_with('/') {
        return public_root.join(path.trim_start_matches('/'));
    }
    canonicalize_lenient(&entry_dir.join(path))
}

/// Canonicalize a path, falling back to lexical `.`/`..` folding when the
/// target does not exist. A missing asset still gets a clean absolute path in
/// the report instead of an error.
pub fn canonicalize_lenient(path: &Path) -> PathBuf {
    match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(_) => normalize_lexically(path),
    }
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    let mut has_root = false;
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => {
                has_root = true;
                normalized.push(Component::RootDir.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() && !has_root {
                    normalized.push(Component::ParentDir.as_os_str());
                }
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}
