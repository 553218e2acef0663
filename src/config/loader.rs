// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{CgError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::CgConfig;

/// File names looked up in each directory from the working directory upward.
const CONFIG_FILES: &[&str] = &["cg.toml", ".cg.toml"];

/// Find the nearest configuration file for `start_dir`.
///
/// Falls back to `<config dir>/cg/config.toml` when no ancestor has one.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .flat_map(|dir| CONFIG_FILES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
        .or_else(user_config_file)
}

fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("cg").join("config.toml"))
        .filter(|path| path.is_file())
}

/// Load the configuration that applies to the working directory.
///
/// Without a configuration file the built-in defaults are used.
pub fn load_config() -> Result<CgConfig> {
    let found = std::env::current_dir()
        .ok()
        .and_then(|dir| find_config_file(&dir));

    match found {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(CgConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<CgConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CgError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CgError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<CgConfig> {
    toml::from_str(content).map_err(|e| {
        CgError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommitType;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.classify.default_type, CommitType::Feat);
        assert_eq!(config.scope.fallback, "core");
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[classify]
default_type = "chore"

[[classify.rules]]
type = "perf"
patterns = ["bench/", "\\.bench\\."]

[[classify.rules]]
type = "chore"
patterns = ["^scripts/"]

[scope]
skip = ["crates", "packages"]
fallback = "repo"

[report]
color = false
examples = false
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.classify.default_type, CommitType::Chore);
        assert_eq!(config.classify.rules.len(), 2);
        assert_eq!(config.classify.rules[0].commit_type, CommitType::Perf);
        assert_eq!(config.classify.rules[1].patterns, vec!["^scripts/"]);
        assert_eq!(config.scope.skip, vec!["crates", "packages"]);
        assert_eq!(config.scope.fallback, "repo");
        assert!(!config.report.color);
        assert!(!config.report.examples);
        assert!(config.report.recommendations);
    }

    #[test]
    fn test_parse_unknown_type_fails() {
        let toml = r#"
[[classify.rules]]
type = "wip"
patterns = ["tmp/"]
"#;
        let result = parse_config(toml);
        assert!(matches!(
            result,
            Err(CgError::Config(ConfigError::ParseError { .. }))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from(&dir.path().join("cg.toml"));
        assert!(matches!(
            result,
            Err(CgError::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".cg.toml"), "[report]\ncolor = false\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, dir.path().join(".cg.toml"));

        let config = load_config_from(&found).unwrap();
        assert!(!config.report.color);
    }

    #[test]
    fn test_nearest_config_wins() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("cg.toml"), "").unwrap();
        let nested = dir.path().join("pkg");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join(".cg.toml"), "").unwrap();

        assert_eq!(find_config_file(&nested).unwrap(), nested.join(".cg.toml"));
        assert_eq!(find_config_file(dir.path()).unwrap(), dir.path().join("cg.toml"));
    }
}
