//! # deploy
//!
//! Copy a project tree to a deploy directory, excluding anything matched
//! by a `.deployignore` file — a packaging step for uploading or
//! shipping a project without its build droppings.
//!
//! ## Usage
//!
//! ```bash
//! # Deploy the project containing this tool's install location
//! deploy
//!
//! # Deploy an explicit source to the default '<source>_deploy' sibling
//! deploy path/to/project
//!
//! # Explicit destination and ignore file
//! deploy path/to/project /tmp/out -i custom.deployignore
//! ```
//!
//! The destination must not exist yet; deploy never overwrites or
//! merges. When no source is given, the project root is auto-detected
//! from git repository metadata; if that fails the tool prints help and
//! exits with status 1.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use console::Style;
use deploylib::{
    copy_tree, resolve_request, DeployArgs, DeployError, GitDiscovery, IgnoreSet, ResolverConfig,
};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("deploy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Deploy a project tree, excluding everything the ignore file matches")
        .arg(
            Arg::new("source")
                .help("Path to the project root (default: auto-detected via git)"),
        )
        .arg(
            Arg::new("dest")
                .help("Path to deploy to (default: '<source>/../<source>_deploy'; must not exist)"),
        )
        .arg(
            Arg::new("ignore-file")
                .short('i')
                .long("ignore-file")
                .value_name("IGNORE_FILE_PATH")
                .help("Ignore-pattern file, one glob per line (default: '<source>/.deployignore')"),
        )
}

/// Starting directory for project-root auto-detection: the directory
/// this binary was installed into, falling back to the current dir.
fn search_start() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn run(matches: &ArgMatches) -> Result<()> {
    let args = DeployArgs {
        source: matches.get_one::<String>("source").map(PathBuf::from),
        dest: matches.get_one::<String>("dest").map(PathBuf::from),
        ignore_file: matches.get_one::<String>("ignore-file").map(PathBuf::from),
    };

    let request = resolve_request(
        args,
        &ResolverConfig::default(),
        &GitDiscovery,
        &search_start(),
    )?;

    println!("Deploying to '{}'", request.dest.display());

    let ignores = IgnoreSet::load(&request.ignore_file)?;
    let stats = copy_tree(&request.source, &request.dest, &ignores)?;

    let ok = Style::new().green().bold();
    println!(
        "{} ({} files, {} directories)",
        ok.apply_to("Deployed successfully!"),
        stats.files,
        stats.dirs
    );

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if matches!(
                e.downcast_ref::<DeployError>(),
                Some(DeployError::SourceUndetectable)
            ) =>
        {
            println!("WARNING: not inside a recognizable git repository");
            println!("---");
            let _ = build_command().print_help();
            println!("---\nCould not find project directory automatically. Please specify a [source] via command arguments.");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
