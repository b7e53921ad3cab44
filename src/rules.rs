//! Include/exclude decisions for paths under the scan root
//!
//! A [`Ruleset`] is built once per run (see [`crate::config::Config::ruleset`])
//! and consulted with paths relative to the scan root. The same engine serves
//! the main walk ([`RuleScope::Full`]) and the preamble search
//! ([`RuleScope::Preamble`]), which prunes with a smaller rule set.

use std::collections::HashSet;
use std::path::Path;

/// Directory names the preamble search never descends into, regardless of
/// the configured ignore list.
pub const ALWAYS_SKIPPED_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "bower_components",
    "vendor",
    "__pycache__",
    ".venv",
    "venv",
    "target",
    "build",
    "dist",
    "out",
    "bin",
    "obj",
];

/// Outcome of consulting the rules for one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Include,
    Exclude,
}

impl Decision {
    pub fn is_included(self) -> bool {
        self == Decision::Include
    }
}

/// Which subset of the rules applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleScope {
    /// Name/path exclusion, then extension rules for files.
    #[default]
    Full,
    /// Bare-name exclusion plus [`ALWAYS_SKIPPED_DIRS`], directories only.
    Preamble,
}

/// Immutable rule set for one run.
///
/// All entries are stored normalized: names and paths use `/` separators
/// without trailing slashes, extensions are lowercase without a leading dot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ruleset {
    ignore_names: HashSet<String>,
    /// Root-relative paths excluded after the ruleset was built; never
    /// matched against base names.
    ignore_paths: HashSet<String>,
    ignore_extensions: HashSet<String>,
    include_extensions: HashSet<String>,
    metadata_suffix: String,
}

impl Ruleset {
    pub fn new<N, E, I>(
        ignore_names: N,
        ignore_extensions: E,
        include_extensions: I,
        metadata_suffix: impl Into<String>,
    ) -> Self
    where
        N: IntoIterator,
        N::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            ignore_names: ignore_names
                .into_iter()
                .map(|n| normalize_name(n.as_ref()))
                .collect(),
            ignore_paths: HashSet::new(),
            ignore_extensions: ignore_extensions
                .into_iter()
                .map(|e| normalize_extension(e.as_ref()))
                .collect(),
            include_extensions: include_extensions
                .into_iter()
                .map(|e| normalize_extension(e.as_ref()))
                .collect(),
            metadata_suffix: metadata_suffix.into(),
        }
    }

    /// Return a copy of this ruleset that additionally ignores exactly
    /// `relative_path`. Same-named entries elsewhere in the tree stay included.
    pub fn with_ignored_path(&self, relative_path: &str) -> Self {
        let mut next = self.clone();
        next.ignore_paths.insert(normalize_name(relative_path));
        next
    }

    pub fn metadata_suffix(&self) -> &str {
        &self.metadata_suffix
    }

    pub fn ignores_name(&self, name: &str) -> bool {
        self.ignore_names.contains(name)
    }

    /// Decide with the full rule set used by the main walk.
    pub fn decide(&self, relative_path: &str, is_dir: bool) -> Decision {
        self.decide_in(relative_path, is_dir, RuleScope::Full)
    }

    /// Decide whether `relative_path` is included under the given scope.
    pub fn decide_in(&self, relative_path: &str, is_dir: bool, scope: RuleScope) -> Decision {
        let normalized = normalize_separators(relative_path);
        let name = base_name(&normalized);

        match scope {
            RuleScope::Preamble => {
                if is_dir && (self.ignores_name(name) || ALWAYS_SKIPPED_DIRS.contains(&name)) {
                    Decision::Exclude
                } else {
                    Decision::Include
                }
            }
            RuleScope::Full => {
                if self.ignores_name(name)
                    || self.ignores_name(&normalized)
                    || self.ignore_paths.contains(&normalized)
                {
                    return Decision::Exclude;
                }
                if is_dir {
                    return Decision::Include;
                }

                let ext = extension_of(name);
                if self.ignore_extensions.contains(&ext) {
                    return Decision::Exclude;
                }
                if !self.include_extensions.is_empty() && !self.include_extensions.contains(&ext) {
                    return Decision::Exclude;
                }
                Decision::Include
            }
        }
    }
}

/// Replace `\` with `/` so Windows-style input compares equal.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Final path segment of a `/`-separated path.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Lowercase extension of a file name without the leading dot.
///
/// Dot-files such as `.gitignore` and names without a dot have extension `""`.
pub fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

fn normalize_name(name: &str) -> String {
    let name = normalize_separators(name);
    let trimmed = name.trim_end_matches('/');
    let trimmed = trimmed.strip_prefix("./").unwrap_or(trimmed);
    trimmed.to_string()
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    ext.strip_prefix('.').unwrap_or(ext).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ruleset(names: &[&str], ignore_ext: &[&str], include_ext: &[&str]) -> Ruleset {
        Ruleset::new(names, ignore_ext, include_ext, ".meta")
    }

    #[test]
    fn test_bare_name_excludes_at_any_depth() {
        let rules = ruleset(&["node_modules"], &[], &[]);
        assert_eq!(rules.decide("node_modules", true), Decision::Exclude);
        assert_eq!(rules.decide("web/node_modules", true), Decision::Exclude);
        assert_eq!(rules.decide("web/node_modules_old", true), Decision::Include);
    }

    #[test]
    fn test_full_path_excludes_only_that_path() {
        let rules = ruleset(&["docs/generated"], &[], &[]);
        assert_eq!(rules.decide("docs/generated", true), Decision::Exclude);
        assert_eq!(rules.decide("src/generated", true), Decision::Include);
        assert_eq!(rules.decide("generated", true), Decision::Include);
    }

    #[test]
    fn test_backslash_paths_are_normalized() {
        let rules = ruleset(&["docs\\generated"], &[], &[]);
        assert_eq!(rules.decide("docs/generated", true), Decision::Exclude);
        assert_eq!(rules.decide("docs\\generated", true), Decision::Exclude);
    }

    #[test]
    fn test_directories_skip_extension_rules() {
        let rules = ruleset(&[], &["js"], &["rs"]);
        assert_eq!(rules.decide("lib.js", true), Decision::Include);
        assert_eq!(rules.decide("lib.js", false), Decision::Exclude);
    }

    #[test]
    fn test_ignore_extension_is_case_insensitive() {
        let rules = ruleset(&[], &["PNG", ".jpg"], &[]);
        assert_eq!(rules.decide("img/logo.png", false), Decision::Exclude);
        assert_eq!(rules.decide("img/logo.PNG", false), Decision::Exclude);
        assert_eq!(rules.decide("img/photo.Jpg", false), Decision::Exclude);
        assert_eq!(rules.decide("img/notes.txt", false), Decision::Include);
    }

    #[test]
    fn test_include_whitelist() {
        let rules = ruleset(&[], &[], &["rs", "toml"]);
        assert_eq!(rules.decide("src/main.rs", false), Decision::Include);
        assert_eq!(rules.decide("Cargo.toml", false), Decision::Include);
        assert_eq!(rules.decide("README.md", false), Decision::Exclude);
        assert_eq!(rules.decide("Makefile", false), Decision::Exclude);
    }

    #[test]
    fn test_ignore_extension_wins_over_whitelist() {
        let rules = ruleset(&[], &["rs"], &["rs"]);
        assert_eq!(rules.decide("main.rs", false), Decision::Exclude);
    }

    #[test]
    fn test_empty_extension_only_matches_when_listed() {
        let rules = ruleset(&[], &[], &["rs"]);
        assert_eq!(rules.decide("LICENSE", false), Decision::Exclude);

        let rules = ruleset(&[], &[], &["rs", ""]);
        assert_eq!(rules.decide("LICENSE", false), Decision::Include);
        assert_eq!(rules.decide(".gitignore", false), Decision::Include);

        let rules = ruleset(&[], &[""], &[]);
        assert_eq!(rules.decide("LICENSE", false), Decision::Exclude);
        assert_eq!(rules.decide("main.rs", false), Decision::Include);
    }

    #[test]
    fn test_name_comparison_is_case_sensitive() {
        let rules = ruleset(&["Build"], &[], &[]);
        assert_eq!(rules.decide("Build", true), Decision::Exclude);
        assert_eq!(rules.decide("build", true), Decision::Include);
    }

    #[test]
    fn test_decide_is_deterministic() {
        let rules = ruleset(&["target", "docs/api"], &["png"], &["rs", "md"]);
        let paths = [
            ("target", true),
            ("docs/api", true),
            ("docs/api/index.md", false),
            ("src/lib.rs", false),
            ("logo.png", false),
            ("notes.txt", false),
        ];
        for (path, is_dir) in paths {
            let first = rules.decide(path, is_dir);
            for _ in 0..5 {
                assert_eq!(rules.decide(path, is_dir), first, "path {}", path);
            }
        }
    }

    #[test]
    fn test_with_ignored_path_leaves_original_untouched() {
        let rules = ruleset(&[], &[], &[]);
        let extended = rules.with_ignored_path("docs/SYSTEM.txt");
        assert_eq!(rules.decide("docs/SYSTEM.txt", false), Decision::Include);
        assert_eq!(extended.decide("docs/SYSTEM.txt", false), Decision::Exclude);
        assert_eq!(extended.decide("other/SYSTEM.txt", false), Decision::Include);
    }

    #[test]
    fn test_ignored_root_path_keeps_nested_namesakes() {
        let rules = ruleset(&[], &[], &[]).with_ignored_path("SYSTEM.txt");
        assert_eq!(rules.decide("SYSTEM.txt", false), Decision::Exclude);
        assert_eq!(rules.decide("sub/SYSTEM.txt", false), Decision::Include);
        assert_eq!(rules.decide("a/b/SYSTEM.txt", false), Decision::Include);
        assert_eq!(
            rules.decide_in("SYSTEM.txt", false, RuleScope::Preamble),
            Decision::Include
        );
    }

    #[test]
    fn test_names_with_surrounding_spaces_match_exactly() {
        let rules = ruleset(&[" notes ", "docs/ draft"], &[], &[]);
        assert_eq!(rules.decide(" notes ", false), Decision::Exclude);
        assert_eq!(rules.decide("notes", false), Decision::Include);
        assert_eq!(rules.decide("docs/ draft", true), Decision::Exclude);
        assert_eq!(rules.decide("docs/draft", true), Decision::Include);
    }

    #[test]
    fn test_preamble_scope_ignores_path_entries() {
        let rules = ruleset(&["private", "docs/internal"], &["txt"], &["rs"]);
        let scope = RuleScope::Preamble;
        assert_eq!(rules.decide_in("a/private", true, scope), Decision::Exclude);
        assert_eq!(rules.decide_in("docs/internal", true, scope), Decision::Include);
        assert_eq!(rules.decide_in("SYSTEM.txt", false, scope), Decision::Include);
    }

    #[test]
    fn test_preamble_scope_always_skips_infrastructure_dirs() {
        let rules = ruleset(&[], &[], &[]);
        for dir in ["node_modules", "pkg/.git", "target", "app/dist"] {
            assert_eq!(
                rules.decide_in(dir, true, RuleScope::Preamble),
                Decision::Exclude,
                "{} should be skipped",
                dir
            );
            assert_eq!(rules.decide(dir, true), Decision::Include);
        }
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("main.RS"), "rs");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of("Makefile"), "");
        assert_eq!(extension_of(".gitignore"), "");
    }
}
