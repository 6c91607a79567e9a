//! # deploylib
//!
//! Library for deploying a project tree: copy a source directory to a
//! fresh destination while excluding everything matched by a
//! `.deployignore` file of shell-style glob patterns.
//!
//! ## Overview
//!
//! A deployment is a single synchronous pipeline:
//!
//! 1. **Resolve** — combine explicit source/dest/ignore-file paths with
//!    computed defaults (destination `<source>_deploy` next to the
//!    source, ignore file `<source>/.deployignore`), discovering the
//!    source from git metadata when none is given, and validate the
//!    preconditions (source exists, destination does not, ignore file
//!    exists).
//! 2. **Load** — read the ignore file into an [`IgnoreSet`], one glob
//!    pattern per line, matched against entry base names only.
//! 3. **Copy** — walk the source once, pruning matched entries, and
//!    mirror the rest into the destination with permissions preserved.
//!
//! There is no merging, no rollback, and no incremental mode: the
//! destination must not exist beforehand, and a mid-copy failure leaves
//! whatever was already copied in place.
//!
//! ## Example
//!
//! ```rust
//! use deploylib::{copy_tree, IgnoreSet};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Set up a small project
//! let dir = tempdir().unwrap();
//! let source = dir.path().join("proj");
//! fs::create_dir(&source).unwrap();
//! fs::write(source.join("a.txt"), "keep").unwrap();
//! fs::write(source.join("b.log"), "drop").unwrap();
//!
//! // Copy it, excluding *.log
//! let ignores = IgnoreSet::from_lines(["*.log"]);
//! let dest = dir.path().join("proj_deploy");
//! let stats = copy_tree(&source, &dest, &ignores).unwrap();
//!
//! assert_eq!(stats.files, 1);
//! assert!(dest.join("a.txt").is_file());
//! assert!(!dest.join("b.log").exists());
//! ```

pub mod copy;
pub mod error;
pub mod ignore;
pub mod origin;
pub mod resolve;

pub use copy::{copy_tree, CopyStats};
pub use error::DeployError;
pub use ignore::{load_patterns, IgnoreSet};
pub use origin::{GitDiscovery, RootDiscovery};
pub use resolve::{
    resolve_request, DeployArgs, DeployRequest, ResolverConfig, DEFAULT_DEST_SUFFIX,
    DEFAULT_IGNORE_FILE_NAME,
};

/// Result type for deploylib operations
pub type Result<T> = std::result::Result<T, DeployError>;
