//! Git integration
//!
//! The sweeper does not need git to run. When no root is given it sweeps the
//! work tree of the repository enclosing the current directory.

use anyhow::{Context, Result};
use git2::Repository;
use std::path::{Path, PathBuf};

pub struct GitRepo {
    pub repo: Repository,
}

impl GitRepo {
    /// Discover the repository containing `start`, searching parent directories
    pub fn discover<P: AsRef<Path>>(start: P) -> Result<Self> {
        let repo = Repository::discover(start.as_ref())
            .with_context(|| format!("No Git repository found from {}", start.as_ref().display()))?;
        Ok(Self { repo })
    }

    /// Top-level directory of the work tree; `None` for bare repositories
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }
}

/// Project root for a run
///
/// An explicit root always wins. Otherwise the enclosing git work tree of
/// `cwd`, falling back to `cwd` itself outside a repository.
pub fn resolve_project_root(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(root) = explicit {
        return if root.is_absolute() { root.to_path_buf() } else { cwd.join(root) };
    }

    match GitRepo::discover(cwd) {
        Ok(repo) => match repo.workdir() {
            Some(workdir) => {
                tracing::debug!("Using git work tree {} as project root", workdir.display());
                workdir.to_path_buf()
            }
            None => {
                tracing::debug!("Bare repository at {}, using current directory", repo.git_dir().display());
                cwd.to_path_buf()
            }
        },
        Err(e) => {
            tracing::debug!("{:#}, using current directory", e);
            cwd.to_path_buf()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_root_wins() {
        let temp_dir = TempDir::new().unwrap();
        let root = resolve_project_root(Some(Path::new("sub")), temp_dir.path());
        assert_eq!(root, temp_dir.path().join("sub"));

        let absolute = temp_dir.path().join("abs");
        assert_eq!(resolve_project_root(Some(&absolute), Path::new("/elsewhere")), absolute);
    }

    #[test]
    fn test_discovers_enclosing_work_tree() {
        let temp_dir = TempDir::new().unwrap();
        Repository::init(temp_dir.path()).unwrap();
        let nested = temp_dir.path().join("app/Http");
        fs::create_dir_all(&nested).unwrap();

        let root = resolve_project_root(None, &nested);
        assert_eq!(
            root.canonicalize().unwrap(),
            temp_dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_discover_outside_repository_fails() {
        let temp_dir = TempDir::new().unwrap();
        // A temp dir may itself live inside a repository on some machines
        if Repository::discover(temp_dir.path()).is_err() {
            assert!(GitRepo::discover(temp_dir.path()).is_err());
            assert_eq!(resolve_project_root(None, temp_dir.path()), temp_dir.path());
        }
    }
}
