// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Supplies the list of changed files the analysis works on.

mod repo;
pub mod status;

pub use repo::{open_repo, Repository};
pub use status::{parse_porcelain, parse_status_line, ChangedFile, StatusCode};
