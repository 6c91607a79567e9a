//! Recursive tree copy with ignore-pattern pruning.
//!
//! A single pre-order walk over the source tree. At every level each
//! entry's base name is tested against the ignore set; a matched entry
//! is pruned outright, so an ignored directory is never recursed into
//! and never appears in the destination. The first I/O error aborts the
//! walk; entries already copied stay on disk.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::DeployError;
use crate::ignore::IgnoreSet;
use crate::Result;

/// Counts of entries written to the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Regular files copied
    pub files: u64,
    /// Directories created (including the destination root)
    pub dirs: u64,
}

/// Mirror `source` into the not-yet-existing `dest`, skipping every
/// entry whose base name matches `ignores`.
///
/// Symlinks are followed, so a linked file is copied as a regular file
/// and a linked directory is recursed into; a broken link or a link
/// cycle surfaces as a walk error. File permission bits are preserved
/// by the underlying copy where the platform supports it, and created
/// directories mirror their source's permissions.
pub fn copy_tree(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    ignores: &IgnoreSet,
) -> Result<CopyStats> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    let mut stats = CopyStats::default();

    let walker = WalkDir::new(source)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    for entry in walker.filter_entry(|e| e.depth() == 0 || !ignores.matches_os(e.file_name())) {
        let entry = entry?;
        let path = entry.path();

        // The source root itself maps to the destination root.
        let relative = path
            .strip_prefix(source)
            .expect("walked entry is always under the source root");
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| copy_failed(&target, e))?;
            let perms = entry
                .metadata()
                .map(|m| m.permissions())
                .map_err(DeployError::Walk)?;
            fs::set_permissions(&target, perms).map_err(|e| copy_failed(&target, e))?;
            stats.dirs += 1;
        } else {
            fs::copy(path, &target).map_err(|e| copy_failed(path, e))?;
            stats.files += 1;
        }
    }

    Ok(stats)
}

fn copy_failed(path: &Path, source: std::io::Error) -> DeployError {
    DeployError::CopyFailed {
        path: path.to_path_buf(),
        source,
    }
}
