// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Per-file classification: commit type plus scope.

use crate::config::{CgConfig, CommitType};
use crate::error::{CgError, ConfigError, Result};
use lazy_static::lazy_static;

use super::classify::{TypeRule, TypeTable};
use super::scope::{Scope, ScopeExtractor};

lazy_static! {
    static ref BUILTIN: Classifier = Classifier::builtin();
}

/// Maps a path to its `(type, scope)` pair.
///
/// Holds no mutable state; one instance can classify any number of files.
#[derive(Debug, Clone)]
pub struct Classifier {
    types: TypeTable,
    scopes: ScopeExtractor,
}

impl Classifier {
    /// Classifier with the built-in rules only.
    pub fn builtin() -> Self {
        Self {
            types: TypeTable::builtin(),
            scopes: ScopeExtractor::builtin(),
        }
    }

    /// Build a classifier from configuration.
    ///
    /// Invalid patterns and a fallback scope that sanitizes to nothing are
    /// reported here, so classification itself stays infallible.
    pub fn from_config(config: &CgConfig) -> Result<Self> {
        let mut extra = Vec::with_capacity(config.classify.rules.len());
        for (index, rule) in config.classify.rules.iter().enumerate() {
            let compiled =
                TypeRule::new(rule.commit_type, rule.patterns.as_slice()).map_err(|e| {
                    CgError::Config(ConfigError::InvalidValue {
                        key: format!("classify.rules[{}].patterns", index),
                        message: e.to_string(),
                    })
                })?;
            extra.push(compiled);
        }

        let fallback = Scope::sanitize(&config.scope.fallback).ok_or_else(|| {
            CgError::Config(ConfigError::InvalidValue {
                key: "scope.fallback".to_string(),
                message: format!(
                    "'{}' has no characters in [a-z0-9-]",
                    config.scope.fallback
                ),
            })
        })?;

        tracing::debug!(
            "Classifier configured with {} extra rules and {} extra skip segments",
            extra.len(),
            config.scope.skip.len()
        );

        Ok(Self {
            types: TypeTable::with_rules(extra, config.classify.default_type),
            scopes: ScopeExtractor::new(config.scope.skip.as_slice(), fallback),
        })
    }

    /// Shared built-in instance.
    pub fn shared() -> &'static Classifier {
        &*BUILTIN
    }

    /// Infer the commit type of a path.
    pub fn classify_type(&self, path: &str) -> CommitType {
        self.types.classify(path)
    }

    /// Infer the scope of a path.
    pub fn extract_scope(&self, path: &str) -> Scope {
        self.scopes.extract(path)
    }

    /// Infer both type and scope.
    pub fn classify(&self, path: &str) -> (CommitType, Scope) {
        let commit_type = self.classify_type(path);
        let scope = self.extract_scope(path);
        tracing::trace!("{} -> {}({})", path, commit_type, scope);
        (commit_type, scope)
    }
}

/// Infer the commit type of a path using the built-in rules.
pub fn classify_type(path: &str) -> CommitType {
    Classifier::shared().classify_type(path)
}

/// Infer the scope of a path using the built-in skip set.
pub fn extract_scope(path: &str) -> Scope {
    Classifier::shared().extract_scope(path)
}
