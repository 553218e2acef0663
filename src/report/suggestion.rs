// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Example subjects and commit granularity advice.

use crate::analysis::Scope;
use crate::config::CommitType;
use serde::Serialize;

/// Coarse advice on how many commits to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    /// One group: a single commit covers it.
    Single,
    /// Two or three groups: combine them or keep them apart.
    Combined,
    /// Four or more groups: separate small commits.
    Separate,
}

impl Recommendation {
    /// Pick the recommendation for a number of groups.
    ///
    /// Returns `None` when there is nothing to commit.
    pub fn for_group_count(count: usize) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(Recommendation::Single),
            2..=3 => Some(Recommendation::Combined),
            _ => Some(Recommendation::Separate),
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Recommendation::Single => "Single logical group detected",
            Recommendation::Combined => "Small number of groups detected",
            Recommendation::Separate => "Multiple distinct groups detected",
        }
    }

    pub fn advice(&self) -> &'static [&'static str] {
        match self {
            Recommendation::Single => &["Consider: Single large commit"],
            Recommendation::Combined => &[
                "Recommended: Combined medium commits",
                "Alternative: Separate small commits for detailed history",
            ],
            Recommendation::Separate => &[
                "Recommended: Separate small commits",
                "Consider combining related groups if appropriate",
            ],
        }
    }
}

/// Example subject line for a group.
pub fn example_subject(commit_type: CommitType, scope: &Scope) -> String {
    match commit_type {
        CommitType::Feat => format!("add {} feature", scope),
        CommitType::Fix => format!("resolve {} issues", scope),
        CommitType::Test => format!("add {} test coverage", scope),
        CommitType::Docs => format!("update {} documentation", scope),
        _ => format!("update {}", scope),
    }
}

/// Full example message, `type(scope): subject`.
pub fn example_message(commit_type: CommitType, scope: &Scope) -> String {
    format!(
        "{}({}): {}",
        commit_type,
        scope,
        example_subject(commit_type, scope)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope(s: &str) -> Scope {
        Scope::sanitize(s).unwrap()
    }

    #[test]
    fn test_recommendation_buckets() {
        assert_eq!(Recommendation::for_group_count(0), None);
        assert_eq!(
            Recommendation::for_group_count(1),
            Some(Recommendation::Single)
        );
        assert_eq!(
            Recommendation::for_group_count(2),
            Some(Recommendation::Combined)
        );
        assert_eq!(
            Recommendation::for_group_count(3),
            Some(Recommendation::Combined)
        );
        assert_eq!(
            Recommendation::for_group_count(4),
            Some(Recommendation::Separate)
        );
        assert_eq!(
            Recommendation::for_group_count(40),
            Some(Recommendation::Separate)
        );
    }

    #[test]
    fn test_example_subjects() {
        assert_eq!(example_subject(CommitType::Feat, &scope("auth")), "add auth feature");
        assert_eq!(example_subject(CommitType::Fix, &scope("auth")), "resolve auth issues");
        assert_eq!(
            example_subject(CommitType::Test, &scope("auth")),
            "add auth test coverage"
        );
        assert_eq!(
            example_subject(CommitType::Docs, &scope("readme")),
            "update readme documentation"
        );
        assert_eq!(example_subject(CommitType::Ci, &scope("workflows")), "update workflows");
        assert_eq!(example_subject(CommitType::Build, &Scope::core()), "update core");
    }

    #[test]
    fn test_example_message() {
        assert_eq!(
            example_message(CommitType::Style, &scope("web")),
            "style(web): update web"
        );
    }
}
