// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from cg.toml.

use serde::{Deserialize, Serialize};

/// The main configuration structure for cg.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CgConfig {
    /// Commit type classification.
    pub classify: ClassifyConfig,

    /// Scope extraction.
    pub scope: ScopeConfig,

    /// Report output.
    pub report: ReportConfig,
}

impl CgConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Commit type classification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Type used when no rule matches.
    pub default_type: CommitType,

    /// Extra rules, checked before the built-in table.
    pub rules: Vec<TypeRuleConfig>,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            default_type: CommitType::Feat,
            rules: Vec::new(),
        }
    }
}

/// A user-supplied classification rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeRuleConfig {
    /// Commit type assigned on match.
    #[serde(rename = "type")]
    pub commit_type: CommitType,

    /// Case-insensitive regular expressions matched anywhere in the path.
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Scope extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeConfig {
    /// Additional generic directory names to skip.
    pub skip: Vec<String>,

    /// Scope used when no path segment qualifies.
    pub fallback: String,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            skip: Vec::new(),
            fallback: "core".to_string(),
        }
    }
}

/// Report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Whether to use colors.
    pub color: bool,

    /// Whether to print example commit messages.
    pub examples: bool,

    /// Whether to print the granularity recommendation.
    pub recommendations: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            color: true,
            examples: true,
            recommendations: true,
        }
    }
}

/// Conventional commit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
}

impl CommitType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Chore => "chore",
        }
    }

    /// Get a description of the commit type.
    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Feat => "New feature",
            CommitType::Fix => "Bug fix",
            CommitType::Docs => "Documentation",
            CommitType::Style => "Code style/formatting",
            CommitType::Refactor => "Code refactoring",
            CommitType::Perf => "Performance improvement",
            CommitType::Test => "Tests",
            CommitType::Build => "Build system/dependencies",
            CommitType::Ci => "CI/CD configuration",
            CommitType::Chore => "Maintenance/tooling",
        }
    }

    /// Get all commit types.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Docs,
            CommitType::Style,
            CommitType::Refactor,
            CommitType::Perf,
            CommitType::Test,
            CommitType::Build,
            CommitType::Ci,
            CommitType::Chore,
        ]
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CgConfig::default();
        assert_eq!(config.classify.default_type, CommitType::Feat);
        assert!(config.classify.rules.is_empty());
        assert_eq!(config.scope.fallback, "core");
        assert!(config.report.color);
    }

    #[test]
    fn test_commit_type_deserialize() {
        let config: CgConfig = toml::from_str("[classify]\ndefault_type = \"docs\"").unwrap();
        assert_eq!(config.classify.default_type, CommitType::Docs);
        assert!(toml::from_str::<CgConfig>("[classify]\ndefault_type = \"revert\"").is_err());
    }

    #[test]
    fn test_commit_type_display() {
        assert_eq!(CommitType::Ci.to_string(), "ci");
        assert_eq!(CommitType::Refactor.to_string(), "refactor");
    }

    #[test]
    fn test_commit_type_table_is_closed() {
        assert_eq!(CommitType::all().len(), 10);
        for t in CommitType::all() {
            let toml_str = format!("[classify]\ndefault_type = \"{}\"", t.as_str());
            let config: CgConfig = toml::from_str(&toml_str).unwrap();
            assert_eq!(config.classify.default_type, *t);
            assert!(!t.description().is_empty());
        }
    }

    #[test]
    fn test_config_serialization() {
        let config = CgConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("default_type = \"feat\""));
        assert!(toml_str.contains("fallback = \"core\""));
    }
}
