//! Exclusion patterns for template processing.
//! Combines a built-in set of never-copied paths with an optional
//! per-template `.wrapignore` file, similar to .gitignore functionality.

use crate::constants::{BUILTIN_IGNORES, IGNORE_FILE};
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Builds the glob set of template paths excluded from copying.
///
/// # Arguments
/// * `template_dir` - Template root, searched for a `.wrapignore` file
///
/// # Returns
/// * `Result<GlobSet>` - Compiled glob patterns matched against paths
///   relative to the template root
///
/// # Notes
/// - Built-in patterns (`.git`, `build/`, IDE litter) always apply
/// - Each non-empty, non-comment line of `.wrapignore` adds one pattern
pub fn load_ignore_patterns<P: AsRef<Path>>(template_dir: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in BUILTIN_IGNORES {
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::IgnoreError(format!("invalid built-in pattern '{}': {}", pattern, e))
        })?);
    }

    let ignore_path = template_dir.as_ref().join(IGNORE_FILE);
    if let Ok(contents) = read_to_string(&ignore_path) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            builder.add(Glob::new(line).map_err(|e| {
                Error::IgnoreError(format!("{} loading failed: {}", IGNORE_FILE, e))
            })?);
        }
    } else {
        debug!("{} does not exist", IGNORE_FILE);
    }

    builder
        .build()
        .map_err(|e| Error::IgnoreError(format!("{} loading failed: {}", IGNORE_FILE, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_patterns_match() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let set = load_ignore_patterns(temp_dir.path()).unwrap();

        assert!(set.is_match(".git"));
        assert!(set.is_match("build/outputs/apk"));
        assert!(set.is_match(".gradle/caches"));
        assert!(set.is_match("app.iml"));
        assert!(set.is_match("local.properties"));
        assert!(!set.is_match("app/build.gradle"));
    }

    #[test]
    fn wrapignore_lines_are_added() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(IGNORE_FILE),
            "# scratch files\n*.bak\n\nnotes/**\n",
        )
        .unwrap();

        let set = load_ignore_patterns(temp_dir.path()).unwrap();
        assert!(set.is_match("old.bak"));
        assert!(set.is_match("notes/todo.md"));
        assert!(!set.is_match("README.md"));
    }
}
