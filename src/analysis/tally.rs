// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Status breakdown of the change list.

use crate::git::{ChangedFile, StatusCode};
use indexmap::IndexMap;
use serde::Serialize;

/// File counts per status category.
///
/// Every category is present, starting at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatusTally {
    counts: IndexMap<StatusCode, usize>,
}

impl StatusTally {
    /// An all-zero tally.
    pub fn new() -> Self {
        Self {
            counts: StatusCode::all().iter().map(|code| (*code, 0)).collect(),
        }
    }

    /// Count the files of a change list.
    pub fn from_files(files: &[ChangedFile]) -> Self {
        let mut tally = Self::new();
        for file in files {
            tally.add(file.code);
        }
        tally
    }

    pub fn add(&mut self, code: StatusCode) {
        *self.counts.entry(code).or_insert(0) += 1;
    }

    pub fn get(&self, code: StatusCode) -> usize {
        self.counts.get(&code).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// All categories, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (StatusCode, usize)> + '_ {
        self.counts.iter().map(|(code, count)| (*code, *count))
    }

    /// Categories with at least one file.
    pub fn non_zero(&self) -> impl Iterator<Item = (StatusCode, usize)> + '_ {
        self.iter().filter(|(_, count)| *count > 0)
    }
}

impl Default for StatusTally {
    fn default() -> Self {
        Self::new()
    }
}

/// Count files per status category.
pub fn tally(files: &[ChangedFile]) -> StatusTally {
    StatusTally::from_files(files)
}
