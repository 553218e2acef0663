// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository discovery and working tree status.

use crate::error::{CgError, GitError, Result};
use git2::{Repository as Git2Repo, Status, StatusEntry, StatusOptions};
use std::path::{Path, PathBuf};

use super::status::ChangedFile;

/// Wrapper around git2::Repository with additional functionality.
pub struct Repository {
    inner: Git2Repo,
    workdir: PathBuf,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            CgError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open the repository containing a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                CgError::Git(GitError::NotARepository)
            } else {
                CgError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| {
                CgError::Git(GitError::OpenFailed {
                    message: "Repository has no working directory (bare repository)".to_string(),
                })
            })?
            .to_path_buf();

        tracing::debug!("Opened repository at {}", workdir.display());

        Ok(Self {
            inner: repo,
            workdir,
        })
    }

    /// Get the working directory path.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Snapshot the staged, unstaged and untracked changes.
    ///
    /// Untracked directories are listed file by file and staged renames are
    /// reported under their new path.
    pub fn changed_files(&self) -> Result<Vec<ChangedFile>> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(true)
            .include_ignored(false)
            .recurse_untracked_dirs(true)
            .renames_head_to_index(true);

        let statuses = self.inner.statuses(Some(&mut options)).map_err(|e| {
            CgError::Git(GitError::StatusFailed {
                message: e.message().to_string(),
            })
        })?;

        let mut files = Vec::new();
        for entry in statuses.iter() {
            let flags = entry.status();
            if flags.is_empty() || flags.contains(Status::IGNORED) {
                continue;
            }
            files.push(ChangedFile::new(
                entry_path(&entry),
                &format_status_flags(flags),
            ));
        }

        tracing::debug!(
            "Found {} changed files in {}",
            files.len(),
            self.workdir().display()
        );
        Ok(files)
    }
}

/// Path of an entry, preferring the rename destination.
fn entry_path(entry: &StatusEntry<'_>) -> String {
    let renamed = entry
        .head_to_index()
        .filter(|_| entry.status().contains(Status::INDEX_RENAMED))
        .and_then(|delta| delta.new_file().path_bytes().map(<[u8]>::to_vec));

    match renamed {
        Some(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        None => String::from_utf8_lossy(entry.path_bytes()).into_owned(),
    }
}

/// Two-column status in `git status --porcelain` notation.
fn format_status_flags(flags: Status) -> String {
    if flags.contains(Status::CONFLICTED) {
        return "UU".to_string();
    }
    if flags.contains(Status::WT_NEW) && !flags.intersects(index_flags()) {
        return "??".to_string();
    }

    let mut status = String::new();

    if flags.contains(Status::INDEX_NEW) {
        status.push('A');
    } else if flags.contains(Status::INDEX_MODIFIED) {
        status.push('M');
    } else if flags.contains(Status::INDEX_DELETED) {
        status.push('D');
    } else if flags.contains(Status::INDEX_RENAMED) {
        status.push('R');
    } else if flags.contains(Status::INDEX_TYPECHANGE) {
        status.push('T');
    } else {
        status.push(' ');
    }

    if flags.contains(Status::WT_MODIFIED) {
        status.push('M');
    } else if flags.contains(Status::WT_DELETED) {
        status.push('D');
    } else if flags.contains(Status::WT_TYPECHANGE) {
        status.push('T');
    } else if flags.contains(Status::WT_RENAMED) {
        status.push('R');
    } else {
        status.push(' ');
    }

    status
}

fn index_flags() -> Status {
    Status::INDEX_NEW
        | Status::INDEX_MODIFIED
        | Status::INDEX_DELETED
        | Status::INDEX_RENAMED
        | Status::INDEX_TYPECHANGE
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::StatusCode;
    use git2::Signature;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        Git2Repo::init(dir.path()).unwrap();
        let wrapper = Repository::open(dir.path()).unwrap();
        (dir, wrapper)
    }

    #[test]
    fn test_open_repo() {
        let (dir, repo) = create_test_repo();
        assert!(Repository::open(dir.path()).is_ok());
        assert!(!repo.inner.is_bare());
    }

    #[test]
    fn test_open_from_subdirectory() {
        let (dir, _repo) = create_test_repo();
        let nested = dir.path().join("src").join("api");
        fs::create_dir_all(&nested).unwrap();

        let repo = Repository::open(&nested).unwrap();
        assert_eq!(
            repo.workdir().canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(CgError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_changed_files_untracked_and_staged() {
        let (dir, repo) = create_test_repo();
        fs::create_dir_all(dir.path().join("src/api")).unwrap();
        fs::write(dir.path().join("src/api/auth.ts"), "export {}\n").unwrap();
        fs::write(dir.path().join("src/main.rs"), "fn main() {}\n").unwrap();
        fs::write(dir.path().join("README.md"), "# demo\n").unwrap();

        let mut index = repo.inner.index().unwrap();
        index.add_path(Path::new("README.md")).unwrap();
        index.write().unwrap();

        let files = repo.changed_files().unwrap();
        let readme = files.iter().find(|f| f.path == "README.md").unwrap();
        assert_eq!(readme.raw_status, "A");
        assert_eq!(readme.code, StatusCode::Added);

        let auth = files.iter().find(|f| f.path == "src/api/auth.ts").unwrap();
        assert_eq!(auth.raw_status, "??");
        assert!(files.iter().any(|f| f.path == "src/main.rs"));
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_changed_files_keeps_unusual_names() {
        let (dir, repo) = create_test_repo();
        fs::write(dir.path().join("a -> b.txt"), "x\n").unwrap();
        fs::write(dir.path().join("café.md"), "x\n").unwrap();

        let mut paths: Vec<String> = repo
            .changed_files()
            .unwrap()
            .into_iter()
            .map(|f| f.path)
            .collect();
        paths.sort();
        assert_eq!(paths, vec!["a -> b.txt".to_string(), "café.md".to_string()]);
    }

    #[test]
    fn test_changed_files_reports_rename_destination() {
        let (dir, repo) = create_test_repo();
        fs::write(dir.path().join("old.rs"), "fn old() {}\n").unwrap();

        let mut index = repo.inner.index().unwrap();
        index.add_path(Path::new("old.rs")).unwrap();
        index.write().unwrap();
        let tree = repo.inner.find_tree(index.write_tree().unwrap()).unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();
        repo.inner
            .commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();

        fs::rename(dir.path().join("old.rs"), dir.path().join("new.rs")).unwrap();
        index.remove_path(Path::new("old.rs")).unwrap();
        index.add_path(Path::new("new.rs")).unwrap();
        index.write().unwrap();

        let files = repo.changed_files().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "new.rs");
        assert_eq!(files[0].code, StatusCode::Renamed);
    }

    #[test]
    fn test_clean_repo_has_no_changes() {
        let (_dir, repo) = create_test_repo();
        assert!(repo.changed_files().unwrap().is_empty());
    }

    #[test]
    fn test_format_status_flags() {
        assert_eq!(format_status_flags(Status::WT_NEW), "??");
        assert_eq!(format_status_flags(Status::WT_MODIFIED), " M");
        assert_eq!(format_status_flags(Status::INDEX_NEW | Status::WT_MODIFIED), "AM");
        assert_eq!(format_status_flags(Status::INDEX_RENAMED), "R ");
        assert_eq!(format_status_flags(Status::CONFLICTED), "UU");
    }
}
