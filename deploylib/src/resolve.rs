//! Argument and defaults resolution.
//!
//! Combines caller-supplied paths with computed defaults, validates the
//! preconditions for a deployment, and produces an absolute, immutable
//! [`DeployRequest`]. Validation order is fixed: source must exist, then
//! destination must not, then the ignore file must exist. Each violation
//! is a distinct error and nothing is copied before all three pass.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::DeployError;
use crate::origin::RootDiscovery;
use crate::Result;

/// Default ignore-file name, resolved relative to the source root.
pub const DEFAULT_IGNORE_FILE_NAME: &str = ".deployignore";

/// Default suffix appended to the source basename to form the
/// destination sibling directory.
pub const DEFAULT_DEST_SUFFIX: &str = "_deploy";

/// Configuration for default-path computation.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// File name looked up under the source root when no ignore file is given
    pub ignore_file_name: String,
    /// Suffix for the default destination directory name
    pub dest_suffix: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            ignore_file_name: DEFAULT_IGNORE_FILE_NAME.to_string(),
            dest_suffix: DEFAULT_DEST_SUFFIX.to_string(),
        }
    }
}

/// Raw, possibly-missing paths as supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct DeployArgs {
    /// Project root to deploy from
    pub source: Option<PathBuf>,
    /// Directory to deploy into; must not exist yet
    pub dest: Option<PathBuf>,
    /// Ignore-pattern file
    pub ignore_file: Option<PathBuf>,
}

/// A fully-resolved, validated deployment request. All paths are
/// absolute; `dest` did not exist at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub ignore_file: PathBuf,
}

/// Resolve arguments into a validated [`DeployRequest`].
///
/// When no source is supplied, `discovery` is consulted starting from
/// `search_start`; if it also comes up empty the result is
/// [`DeployError::SourceUndetectable`], which callers are expected to
/// handle separately from the other precondition failures.
pub fn resolve_request(
    args: DeployArgs,
    config: &ResolverConfig,
    discovery: &dyn RootDiscovery,
    search_start: &Path,
) -> Result<DeployRequest> {
    let source = match args.source {
        Some(path) => path,
        None => discovery
            .discover_root(search_start)
            .ok_or(DeployError::SourceUndetectable)?,
    };

    if !source.is_dir() {
        return Err(DeployError::SourceNotFound(source));
    }
    let source = source.canonicalize()?;

    let dest = match args.dest {
        Some(path) => path,
        None => default_dest(&source, &config.dest_suffix),
    };
    if dest.exists() {
        return Err(DeployError::DestinationExists(dest));
    }
    let dest = std::path::absolute(&dest)?;

    let ignore_file = args
        .ignore_file
        .unwrap_or_else(|| source.join(&config.ignore_file_name));
    if !ignore_file.is_file() {
        return Err(DeployError::IgnoreFileNotFound(ignore_file));
    }
    let ignore_file = ignore_file.canonicalize()?;

    Ok(DeployRequest {
        source,
        dest,
        ignore_file,
    })
}

/// Sibling of `source` named `<source_basename><suffix>`.
fn default_dest(source: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = source
        .file_name()
        .unwrap_or(source.as_os_str())
        .to_os_string();
    name.push(suffix);
    source.parent().unwrap_or(Path::new("/")).join(name)
}
