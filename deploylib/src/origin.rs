//! Project-root discovery via version-control metadata.
//!
//! Discovery is a swappable strategy so resolution logic can be tested
//! without a real repository on disk. The shipped strategy walks upward
//! from a starting directory looking for a git repository and returns
//! its working directory; every failure mode (not a repository, bare
//! repository) is reported as "unknown", never as an error.

use std::path::{Path, PathBuf};

/// Strategy for locating a project root from a starting directory.
pub trait RootDiscovery {
    /// Return the project root containing `start`, or `None` if no root
    /// can be determined.
    fn discover_root(&self, start: &Path) -> Option<PathBuf>;
}

/// Root discovery backed by git repository metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitDiscovery;

impl RootDiscovery for GitDiscovery {
    fn discover_root(&self, start: &Path) -> Option<PathBuf> {
        let repo = gix::discover(start).ok()?;
        repo.work_dir().map(Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    /// Lay down the minimal `.git` skeleton gix accepts as a repository.
    fn init_fake_repo(root: &Path) {
        fs::create_dir_all(root.join(".git/objects")).unwrap();
        fs::create_dir_all(root.join(".git/refs")).unwrap();
        fs::write(root.join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();
    }

    #[test]
    fn test_discover_from_repo_root() {
        let temp = tempdir().unwrap();
        let root = temp.path().canonicalize().unwrap();
        init_fake_repo(&root);

        let found = GitDiscovery.discover_root(&root);
        assert_eq!(found.unwrap().canonicalize().unwrap(), root);
    }

    #[test]
    fn test_discover_from_nested_dir() {
        let temp = tempdir().unwrap();
        let root = temp.path().canonicalize().unwrap();
        init_fake_repo(&root);
        let nested = root.join("src/deep");
        fs::create_dir_all(&nested).unwrap();

        let found = GitDiscovery.discover_root(&nested);
        assert_eq!(found.unwrap().canonicalize().unwrap(), root);
    }

    #[test]
    fn test_discover_outside_any_repo() {
        // GIT_CEILING_DIRECTORIES is not set here, so this relies on the
        // temp dir not living inside a repository, which holds for the
        // usual /tmp locations.
        let temp = tempdir().unwrap();

        let found = GitDiscovery.discover_root(temp.path());
        assert_eq!(found, None);
    }
}
