// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit type classification from file paths.
//!
//! Classification walks an ordered table of `(type, patterns)` rules and
//! returns the type of the first rule with a pattern matching the path.
//! Order is priority: a `tests/README.md` is a test before it is docs.

use crate::config::CommitType;
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

/// Built-in classification rules, highest priority first.
pub const BUILTIN_PATTERNS: &[(CommitType, &[&str])] = &[
    (
        CommitType::Test,
        &[r"test/", r"\.test\.", r"\.spec\.", r"__tests__/", r"tests/"],
    ),
    (CommitType::Docs, &[r"\.md$", r"docs/", r"README", r"CHANGELOG"]),
    (
        CommitType::Ci,
        &[
            r"\.github/",
            r"\.gitlab-ci",
            r"\.circleci/",
            r"jenkinsfile",
            r"\.travis",
        ],
    ),
    (
        CommitType::Build,
        &[
            r"package\.json",
            r"package-lock\.json",
            r"yarn\.lock",
            r"Gemfile",
            r"requirements\.txt",
            r"pom\.xml",
            r"build\.gradle",
            r"Makefile",
            r"Dockerfile",
            r"docker-compose",
        ],
    ),
    (
        CommitType::Style,
        &[r"\.prettierrc", r"\.eslintrc", r"\.editorconfig"],
    ),
];

lazy_static! {
    static ref BUILTIN_RULES: Vec<TypeRule> = BUILTIN_PATTERNS
        .iter()
        .map(|(commit_type, patterns)| {
            TypeRule::new(*commit_type, *patterns).expect("built-in patterns are valid")
        })
        .collect();
}

/// One row of the classification table.
#[derive(Debug, Clone)]
pub struct TypeRule {
    commit_type: CommitType,
    patterns: Vec<Regex>,
}

impl TypeRule {
    /// Compile a rule. Patterns match case-insensitively anywhere in the path.
    pub fn new<S: AsRef<str>>(
        commit_type: CommitType,
        patterns: &[S],
    ) -> Result<Self, regex::Error> {
        let patterns = patterns
            .iter()
            .map(|p| RegexBuilder::new(p.as_ref()).case_insensitive(true).build())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            commit_type,
            patterns,
        })
    }

    /// The type this rule assigns.
    pub fn commit_type(&self) -> CommitType {
        self.commit_type
    }

    /// Check a lower-cased path against every pattern of the rule.
    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(path))
    }
}

/// Ordered classification table with a fallback type.
#[derive(Debug, Clone)]
pub struct TypeTable {
    rules: Vec<TypeRule>,
    default_type: CommitType,
}

impl TypeTable {
    /// The built-in table, falling back to `feat`.
    pub fn builtin() -> Self {
        Self {
            rules: BUILTIN_RULES.clone(),
            default_type: CommitType::Feat,
        }
    }

    /// Put `extra` rules ahead of the built-in ones.
    pub fn with_rules(extra: Vec<TypeRule>, default_type: CommitType) -> Self {
        let mut rules = extra;
        rules.extend(BUILTIN_RULES.iter().cloned());
        Self {
            rules,
            default_type,
        }
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[TypeRule] {
        &self.rules
    }

    /// Classify a path. Never fails; unmatched paths get the default type.
    pub fn classify(&self, path: &str) -> CommitType {
        let lower = path.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lower))
            .map(|rule| rule.commit_type)
            .unwrap_or(self.default_type)
    }
}
