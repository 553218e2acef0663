// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Partitioning changed files into type/scope groups.

use crate::config::CommitType;
use crate::git::ChangedFile;
use indexmap::IndexMap;

use super::classifier::Classifier;
use super::scope::Scope;

/// A suggested commit: files sharing one type and one scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Commit type shared by all files.
    pub commit_type: CommitType,
    /// Scope shared by all files.
    pub scope: Scope,
    /// Files in input order.
    pub files: Vec<ChangedFile>,
}

impl Group {
    /// Description of the group's commit type.
    pub fn description(&self) -> &'static str {
        self.commit_type.description()
    }

    /// Conventional commit header prefix, `type(scope)`.
    pub fn header(&self) -> String {
        format!("{}({})", self.commit_type, self.scope)
    }
}

impl Classifier {
    /// Partition `files` into groups.
    ///
    /// Types appear in the order they are first seen in the input, and so do
    /// scopes within a type. Every file lands in exactly one group.
    pub fn group(&self, files: &[ChangedFile]) -> Vec<Group> {
        let mut buckets: IndexMap<CommitType, IndexMap<Scope, Vec<ChangedFile>>> =
            IndexMap::new();

        for file in files {
            let (commit_type, scope) = self.classify(&file.path);
            buckets
                .entry(commit_type)
                .or_default()
                .entry(scope)
                .or_default()
                .push(file.clone());
        }

        let groups: Vec<Group> = buckets
            .into_iter()
            .flat_map(|(commit_type, scopes)| {
                scopes.into_iter().map(move |(scope, files)| Group {
                    commit_type,
                    scope,
                    files,
                })
            })
            .collect();

        tracing::debug!("Grouped {} files into {} groups", files.len(), groups.len());
        groups
    }
}

/// Partition `files` using the built-in rules.
pub fn group(files: &[ChangedFile]) -> Vec<Group> {
    Classifier::shared().group(files)
}
