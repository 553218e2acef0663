// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cg - Conventional Commit Grouping Assistant
//!
//! Inspects the working tree of a Git repository and proposes how to split
//! the pending changes into well-scoped, conventionally typed commits.
//!
//! # Features
//!
//! - **Type Inference**: Ordered path rules map each file to a commit type
//! - **Scope Extraction**: The first meaningful path segment becomes the scope
//! - **Grouping**: Deterministic type → scope partition of the change list
//! - **Reports**: Text or JSON output with example commit messages
//!
//! # Example
//!
//! ```
//! use commit_groups::analysis::group;
//! use commit_groups::git::ChangedFile;
//!
//! let files = vec![
//!     ChangedFile::new("src/api/auth.ts", "M"),
//!     ChangedFile::new("README.md", "M"),
//! ];
//!
//! for g in group(&files) {
//!     println!("{}: {} file(s)", g.header(), g.files.len());
//! }
//! ```

// Module declarations
pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod report;

// Re-exports for convenience
pub use config::CgConfig;
pub use error::{CgError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cg.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
