//! Asset path patterns and their expansion into concrete files.
//!
//! The `asset_paths` input comes in one of two explicitly configured formats,
//! never auto-detected:
//!
//! - [`PatternFormat::Newline`]: one literal path or glob per line
//! - [`PatternFormat::Json`]: a JSON array of literal paths or globs
//!
//! Expansion keeps pattern order, drops anything that is not a regular file,
//! and removes duplicates (first occurrence wins). Brace alternatives
//! (`dist/*.{zip,tar.gz}`) are expanded before globbing, and wildcards never
//! match hidden entries unless the leading `.` is written in the pattern.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glob::MatchOptions;
use tracing::{debug, warn};

use crate::error::{UploadError, UploadResult};

/// Characters that make a pattern a glob rather than a literal path.
const GLOB_MARKERS: &[char] = &['*', '?', '['];

/// Wildcards skip dotfiles, and `*` never crosses a `/`.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// How the `asset_paths` input is encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PatternFormat {
    /// Newline-separated patterns.
    #[default]
    Newline,
    /// JSON array of pattern strings.
    Json,
}

/// Ordered set of declared asset path patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<String>,
}

impl PatternSet {
    /// Build a pattern set from already-split patterns.
    ///
    /// Blank entries are dropped; an empty result is rejected.
    pub fn new<I, S>(patterns: I) -> UploadResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        if patterns.is_empty() {
            return Err(UploadError::InvalidPatternSet(
                "no asset path patterns were given".to_string(),
            ));
        }

        Ok(Self { patterns })
    }

    /// Parse the raw `asset_paths` input in the given format.
    pub fn parse(input: &str, format: PatternFormat) -> UploadResult<Self> {
        match format {
            PatternFormat::Newline => Self::new(input.lines()),
            PatternFormat::Json => {
                let patterns: Vec<String> = serde_json::from_str(input).map_err(|e| {
                    UploadError::InvalidPatternSet(format!(
                        "expected a JSON array of path strings: {e}"
                    ))
                })?;
                Self::new(patterns)
            }
        }
    }

    /// The declared patterns, in order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Patterns joined for display in messages.
    pub fn display(&self) -> String {
        self.patterns.join(", ")
    }
}

/// Whether a pattern needs glob expansion.
fn is_glob(pattern: &str) -> bool {
    pattern.contains(GLOB_MARKERS)
}

/// Find the first top-level `{...}` group holding at least one `,`.
///
/// Returns the byte offsets of the braces and the alternatives between them.
fn find_brace_group(pattern: &str) -> Option<(usize, usize, Vec<&str>)> {
    let mut open = None;
    let mut depth = 0usize;
    let mut splits = Vec::new();

    for (i, c) in pattern.char_indices() {
        match c {
            '{' => {
                if depth == 0 {
                    open = Some(i);
                    splits.clear();
                }
                depth += 1;
            }
            ',' if depth == 1 => splits.push(i),
            '}' if depth > 0 => {
                depth -= 1;
                if depth > 0 {
                    continue;
                }
                let start = open?;
                if splits.is_empty() {
                    continue;
                }
                let mut alternatives = Vec::with_capacity(splits.len() + 1);
                let mut from = start + 1;
                for &split in &splits {
                    alternatives.push(&pattern[from..split]);
                    from = split + 1;
                }
                alternatives.push(&pattern[from..i]);
                return Some((start, i, alternatives));
            }
            _ => {}
        }
    }
    None
}

/// Expand brace alternatives into plain patterns, left to right.
///
/// A group without a comma (`{a}`) or an unbalanced brace is kept literally.
fn expand_braces(pattern: &str) -> Vec<String> {
    let Some((start, end, alternatives)) = find_brace_group(pattern) else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..start];
    let suffix = &pattern[end + 1..];
    alternatives
        .into_iter()
        .flat_map(|alt| expand_braces(&format!("{prefix}{alt}{suffix}")))
        .collect()
}

/// Expand a single glob pattern into the regular files it matches.
fn expand_glob(pattern: &str) -> UploadResult<Vec<PathBuf>> {
    let entries = glob::glob_with(pattern, MATCH_OPTIONS).map_err(|e| {
        UploadError::InvalidPatternSet(format!("invalid glob pattern '{pattern}': {e}"))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => warn!(path = %e.path().display(), error = %e.error(), "Skipping unreadable glob entry"),
        }
    }
    Ok(files)
}

/// Expand a literal pattern; it contributes only if it names a regular file.
fn expand_literal(pattern: &str) -> Vec<PathBuf> {
    let path = Path::new(pattern);
    if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        debug!(path = pattern, "Literal asset path is not an existing file");
        Vec::new()
    }
}

/// Resolve a pattern set into an ordered, deduplicated list of existing files.
///
/// Fails with [`UploadError::NoAssetsFound`] when nothing matched.
pub fn resolve_asset_paths(patterns: &PatternSet) -> UploadResult<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::new();

    for declared in patterns.patterns() {
        for pattern in expand_braces(declared) {
            let matches = if is_glob(&pattern) {
                expand_glob(&pattern)?
            } else {
                expand_literal(&pattern)
            };

            for path in matches {
                if seen.insert(path.clone()) {
                    resolved.push(path);
                }
            }
        }
    }

    if resolved.is_empty() {
        return Err(UploadError::NoAssetsFound {
            patterns: patterns.display(),
        });
    }

    debug!(paths = ?resolved, "Expanded asset paths");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        let dist = dir.path().join("dist");
        fs::create_dir_all(dist.join("nested.tar.gz")).unwrap();
        fs::write(dist.join("app.zip"), b"zip").unwrap();
        fs::write(dist.join("b.tar.gz"), b"b").unwrap();
        fs::write(dist.join("a.tar.gz"), b"a").unwrap();
        dir
    }

    fn pattern(dir: &TempDir, rel: &str) -> String {
        dir.path().join(rel).to_string_lossy().into_owned()
    }

    #[test]
    fn test_parse_newline_skips_blank_lines() {
        let set = PatternSet::parse("dist/app.zip\n\n  dist/*.tar.gz  \n", PatternFormat::Newline)
            .unwrap();
        assert_eq!(set.patterns(), ["dist/app.zip", "dist/*.tar.gz"]);
    }

    #[test]
    fn test_parse_json_array() {
        let set = PatternSet::parse(r#"["dist/app.zip", "dist/*.tar.gz"]"#, PatternFormat::Json)
            .unwrap();
        assert_eq!(set.patterns(), ["dist/app.zip", "dist/*.tar.gz"]);
    }

    #[test]
    fn test_parse_malformed_json_fails() {
        let result = PatternSet::parse(r#"["dist/app.zip""#, PatternFormat::Json);
        assert!(matches!(result, Err(UploadError::InvalidPatternSet(_))));

        let result = PatternSet::parse(r#"{"path": "dist/app.zip"}"#, PatternFormat::Json);
        assert!(matches!(result, Err(UploadError::InvalidPatternSet(_))));
    }

    #[test]
    fn test_parse_json_is_not_auto_detected_in_newline_mode() {
        let set = PatternSet::parse(r#"["dist/app.zip"]"#, PatternFormat::Newline).unwrap();
        assert_eq!(set.patterns(), [r#"["dist/app.zip"]"#]);
    }

    #[test]
    fn test_parse_empty_input_fails() {
        assert!(matches!(
            PatternSet::parse("\n \n", PatternFormat::Newline),
            Err(UploadError::InvalidPatternSet(_))
        ));
        assert!(matches!(
            PatternSet::parse("[]", PatternFormat::Json),
            Err(UploadError::InvalidPatternSet(_))
        ));
    }

    #[test]
    fn test_resolve_keeps_pattern_order() {
        let dir = fixture();
        let set = PatternSet::new([pattern(&dir, "dist/app.zip"), pattern(&dir, "dist/*.tar.gz")])
            .unwrap();

        let resolved = resolve_asset_paths(&set).unwrap();

        let names: Vec<_> = resolved
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["app.zip", "a.tar.gz", "b.tar.gz"]);
    }

    #[test]
    fn test_resolve_excludes_directories() {
        let dir = fixture();
        let set = PatternSet::new([pattern(&dir, "dist/*")]).unwrap();

        let resolved = resolve_asset_paths(&set).unwrap();

        assert_eq!(resolved.len(), 3);
        assert!(resolved.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_resolve_removes_duplicates() {
        let dir = fixture();
        let set = PatternSet::new([
            pattern(&dir, "dist/a.tar.gz"),
            pattern(&dir, "dist/*.tar.gz"),
            pattern(&dir, "dist/a.tar.gz"),
        ])
        .unwrap();

        let resolved = resolve_asset_paths(&set).unwrap();

        assert_eq!(resolved.len(), 2);
        assert!(resolved[0].ends_with("a.tar.gz"));
        assert!(resolved[1].ends_with("b.tar.gz"));
    }

    #[test]
    fn test_resolve_skips_missing_literals() {
        let dir = fixture();
        let set = PatternSet::new([pattern(&dir, "dist/missing.zip"), pattern(&dir, "dist/app.zip")])
            .unwrap();

        let resolved = resolve_asset_paths(&set).unwrap();

        assert_eq!(resolved.len(), 1);
        assert!(resolved[0].ends_with("app.zip"));
    }

    #[test]
    fn test_resolve_nothing_found_fails() {
        let dir = fixture();
        let set = PatternSet::new([pattern(&dir, "dist/*.exe"), pattern(&dir, "dist")]).unwrap();

        let result = resolve_asset_paths(&set);

        match result {
            Err(UploadError::NoAssetsFound { patterns }) => assert!(patterns.contains("*.exe")),
            other => panic!("expected NoAssetsFound, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_invalid_glob_fails() {
        let set = PatternSet::new(["dist/[.zip"]).unwrap();
        assert!(matches!(
            resolve_asset_paths(&set),
            Err(UploadError::InvalidPatternSet(_))
        ));
    }

    #[test]
    fn test_expand_braces() {
        assert_eq!(expand_braces("dist/*.{zip,tar.gz}"), ["dist/*.zip", "dist/*.tar.gz"]);
        assert_eq!(
            expand_braces("{a,b}/{x,y}"),
            ["a/x", "a/y", "b/x", "b/y"]
        );
        assert_eq!(expand_braces("{a,{b,c}}.zip"), ["a.zip", "b.zip", "c.zip"]);
    }

    #[test]
    fn test_expand_braces_keeps_groups_without_alternatives() {
        assert_eq!(expand_braces("dist/{app}.zip"), ["dist/{app}.zip"]);
        assert_eq!(expand_braces("dist/{a,b"), ["dist/{a,b"]);
        assert_eq!(expand_braces("dist/app.zip"), ["dist/app.zip"]);
    }

    #[test]
    fn test_resolve_brace_alternatives() {
        let dir = fixture();
        let set = PatternSet::new([pattern(&dir, "dist/*.{zip,tar.gz}")]).unwrap();

        let resolved = resolve_asset_paths(&set).unwrap();

        let names: Vec<_> = resolved
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["app.zip", "a.tar.gz", "b.tar.gz"]);
    }

    #[test]
    fn test_resolve_wildcard_skips_hidden_files() {
        let dir = fixture();
        fs::write(dir.path().join("dist/.DS_Store"), b"junk").unwrap();
        let set = PatternSet::new([pattern(&dir, "dist/*")]).unwrap();

        let resolved = resolve_asset_paths(&set).unwrap();

        assert_eq!(resolved.len(), 3);
        assert!(!resolved.iter().any(|p| p.ends_with(".DS_Store")));
    }

    #[test]
    fn test_resolve_hidden_file_by_explicit_dot() {
        let dir = fixture();
        fs::write(dir.path().join("dist/.env.sample"), b"A=1").unwrap();
        let set = PatternSet::new([pattern(&dir, "dist/.env.*")]).unwrap();

        let resolved = resolve_asset_paths(&set).unwrap();

        assert_eq!(resolved.len(), 1);
        assert!(resolved[0].ends_with(".env.sample"));
    }
}
