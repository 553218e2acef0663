// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Scope extraction from file paths.

use serde::Serialize;
use std::fmt;

/// Generic directory names that never make a useful scope.
pub const SKIP_SEGMENTS: &[&str] = &[
    "src",
    "lib",
    "app",
    "components",
    "pages",
    "api",
    "tests",
    "test",
    "__tests__",
];

/// A commit scope: non-empty, lowercase ASCII letters, digits and hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Scope(String);

impl Scope {
    /// The sentinel used when a path has no meaningful segment.
    pub const CORE: &'static str = "core";

    /// The `core` sentinel scope.
    pub fn core() -> Self {
        Scope(Self::CORE.to_string())
    }

    /// Lower-case `raw` and drop everything outside `[a-z0-9-]`.
    ///
    /// Returns `None` when nothing is left.
    pub fn sanitize(raw: &str) -> Option<Self> {
        let cleaned: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
            .collect();

        if cleaned.is_empty() {
            None
        } else {
            Some(Scope(cleaned))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Scope {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derives a scope from the first meaningful path segment.
#[derive(Debug, Clone)]
pub struct ScopeExtractor {
    skip: Vec<String>,
    fallback: Scope,
}

impl ScopeExtractor {
    /// The built-in skip set with the `core` fallback.
    pub fn builtin() -> Self {
        Self::new::<&str>(&[], Scope::core())
    }

    /// Extend the built-in skip set and replace the fallback scope.
    pub fn new<S: AsRef<str>>(extra_skip: &[S], fallback: Scope) -> Self {
        let skip = SKIP_SEGMENTS
            .iter()
            .map(|s| s.to_string())
            .chain(extra_skip.iter().map(|s| s.as_ref().to_lowercase()))
            .collect();

        Self { skip, fallback }
    }

    /// The scope returned when every segment is filtered out.
    pub fn fallback(&self) -> &Scope {
        &self.fallback
    }

    /// Check whether a segment is a generic container name.
    pub fn is_skipped(&self, segment: &str) -> bool {
        let lower = segment.to_lowercase();
        self.skip.iter().any(|s| *s == lower)
    }

    /// Extract the scope of a path. Never fails.
    pub fn extract(&self, path: &str) -> Scope {
        let candidate = path
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .find(|segment| !segment.starts_with('.') && !self.is_skipped(segment));

        candidate
            .and_then(|segment| Scope::sanitize(file_stem(segment)))
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// The segment without its last extension.
fn file_stem(segment: &str) -> &str {
    match segment.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => segment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(path: &str) -> String {
        ScopeExtractor::builtin().extract(path).to_string()
    }

    #[test]
    fn test_scope_sanitization() {
        assert_eq!(extract("src/Components/UserProfile.tsx"), "userprofile");
        assert_eq!(extract("src/my_module/mod.rs"), "mymodule");
        assert_eq!(extract("web-ui/index.html"), "web-ui");
    }

    #[test]
    fn test_skipped_segments() {
        assert_eq!(extract("src/api/auth.ts"), "auth");
        assert_eq!(extract("lib/app/pages/home/index.ts"), "home");
        assert_eq!(extract("tests/api/auth.test.ts"), "authtest");
    }

    #[test]
    fn test_bare_filename() {
        assert_eq!(extract("README.md"), "readme");
        assert_eq!(extract("Cargo.toml"), "cargo");
        assert_eq!(extract("Makefile"), "makefile");
    }

    #[test]
    fn test_core_sentinel() {
        assert_eq!(extract("src"), "core");
        assert_eq!(extract("src/api"), "core");
        assert_eq!(extract(".github/.cache"), "core");
        assert_eq!(extract(".gitignore"), "core");
        assert_eq!(extract(""), "core");
    }

    #[test]
    fn test_hidden_directories_skipped() {
        assert_eq!(extract(".github/workflows/ci.yml"), "workflows");
        assert_eq!(extract("./docs/guide.md"), "docs");
    }

    #[test]
    fn test_unsanitizable_segment_falls_back() {
        assert_eq!(extract("日本/readme.md"), "core");
    }

    #[test]
    fn test_extra_skip_and_fallback() {
        let extractor = ScopeExtractor::new(&["Crates"], Scope::sanitize("repo").unwrap());
        assert_eq!(extractor.extract("crates/parser/lib.rs").as_str(), "parser");
        assert_eq!(extractor.extract("crates").as_str(), "repo");
        assert_eq!(extractor.fallback().as_str(), "repo");
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(Scope::sanitize("Auth_Service!").unwrap().as_str(), "authservice");
        assert!(Scope::sanitize("__").is_none());
        assert!(Scope::sanitize("").is_none());
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("auth.test.ts"), "auth.test");
        assert_eq!(file_stem("Makefile"), "Makefile");
        assert_eq!(file_stem(".env"), ".env");
    }
}
