// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Working tree status entries and porcelain parsing.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Primary status of a changed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCode {
    Modified,
    Added,
    Deleted,
    Renamed,
    Untracked,
    Unknown,
}

impl StatusCode {
    /// Derive the status from a raw two-character porcelain status.
    ///
    /// The first non-space character is the primary signal, so both the
    /// index column (`M `) and the worktree column (` M`) count.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().chars().next() {
            Some('M') => StatusCode::Modified,
            Some('A') => StatusCode::Added,
            Some('D') => StatusCode::Deleted,
            Some('R') => StatusCode::Renamed,
            Some('?') => StatusCode::Untracked,
            _ => StatusCode::Unknown,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            StatusCode::Modified => "Modified",
            StatusCode::Added => "Added",
            StatusCode::Deleted => "Deleted",
            StatusCode::Renamed => "Renamed",
            StatusCode::Untracked => "Untracked",
            StatusCode::Unknown => "Unknown",
        }
    }

    /// All status codes, in display order.
    pub fn all() -> &'static [StatusCode] {
        &[
            StatusCode::Modified,
            StatusCode::Added,
            StatusCode::Deleted,
            StatusCode::Renamed,
            StatusCode::Untracked,
            StatusCode::Unknown,
        ]
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single entry of the working tree status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangedFile {
    /// Slash-separated path relative to the repository root.
    pub path: String,
    /// Trimmed raw status as reported by git (`M`, `??`, `RM`, ...).
    #[serde(rename = "status")]
    pub raw_status: String,
    /// Primary status category.
    #[serde(skip)]
    pub code: StatusCode,
}

impl ChangedFile {
    /// Create a changed file from a path and a raw status.
    pub fn new(path: impl Into<String>, raw_status: &str) -> Self {
        let raw_status = raw_status.trim().to_string();
        let code = StatusCode::from_raw(&raw_status);
        Self {
            path: path.into(),
            raw_status,
            code,
        }
    }
}

/// Parse one `git status --porcelain` line.
///
/// Renames (`R  old -> new`) keep only the destination path. Either side may
/// be C-quoted by git.
pub fn parse_status_line(line: &str) -> Option<ChangedFile> {
    if line.trim().is_empty() {
        return None;
    }

    let (status, rest) = match (line.get(..2), line.get(3..)) {
        (Some(status), Some(rest)) if !rest.trim().is_empty() => (status, rest.trim()),
        _ => {
            tracing::debug!("Skipping malformed status line: {:?}", line);
            return None;
        }
    };

    let (mut path, remainder) = take_path(rest);
    if let Some(destination) = remainder.strip_prefix(" -> ") {
        path = take_path(destination).0;
    }

    Some(ChangedFile::new(path, status))
}

/// Parse the full output of `git status --porcelain`.
///
/// Each path is kept once; later duplicates are dropped.
pub fn parse_porcelain(output: &str) -> Vec<ChangedFile> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for file in output.lines().filter_map(parse_status_line) {
        if seen.insert(file.path.clone()) {
            files.push(file);
        } else {
            tracing::debug!("Dropping duplicate status entry for {}", file.path);
        }
    }

    files
}

/// Read one path off the front of `input`, returning it and what follows.
fn take_path(input: &str) -> (String, &str) {
    if let Some(quoted) = input.strip_prefix('"') {
        return unquote(quoted);
    }
    match input.find(" -> ") {
        Some(end) => (input[..end].to_string(), &input[end..]),
        None => (input.to_string(), ""),
    }
}

/// Decode a C-quoted path up to its closing quote.
///
/// Octal escapes are raw bytes, so `caf\303\251` decodes to `café`.
fn unquote(input: &str) -> (String, &str) {
    let mut bytes: Vec<u8> = Vec::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return (String::from_utf8_lossy(&bytes).into_owned(), &input[i + 1..]),
            '\\' => match chars.next() {
                Some((_, digit @ '0'..='7')) => {
                    let mut value = digit as u32 - '0' as u32;
                    for _ in 0..2 {
                        match chars.peek() {
                            Some(&(_, d @ '0'..='7')) => {
                                value = value * 8 + (d as u32 - '0' as u32);
                                chars.next();
                            }
                            _ => break,
                        }
                    }
                    bytes.push(value as u8);
                }
                Some((_, 'a')) => bytes.push(0x07),
                Some((_, 'b')) => bytes.push(0x08),
                Some((_, 'f')) => bytes.push(0x0c),
                Some((_, 'n')) => bytes.push(b'\n'),
                Some((_, 'r')) => bytes.push(b'\r'),
                Some((_, 't')) => bytes.push(b'\t'),
                Some((_, 'v')) => bytes.push(0x0b),
                Some((_, other)) => push_char(&mut bytes, other),
                None => bytes.push(b'\\'),
            },
            other => push_char(&mut bytes, other),
        }
    }

    // unterminated quote: keep what was read
    (String::from_utf8_lossy(&bytes).into_owned(), "")
}

fn push_char(bytes: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
