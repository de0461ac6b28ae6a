use crate::cli::Cli;
use crate::config::{self, BuildConfig};
use crate::error::BuildError;
use crate::toolchain::{Platform, Toolchain};

/// Run the pipeline: toolchain check, then restore, publish, and
/// package in order, each gated by its skip flag. Fail-fast: the first
/// phase error aborts everything after it.
pub fn run(cli: &Cli) -> Result<(), BuildError> {
    let config = BuildConfig::new();
    let toolchain = Toolchain::new(Platform::host());

    eprintln!("[info] root: {}", config.root.display());
    eprintln!("[info] project: {}", config::PROJECT);
    eprintln!("[info] output: {}", config.publish_dir.display());
    eprintln!("[info] archive: {}", config.archive_path.display());

    crate::tasks::doctor::run(&toolchain)?;

    if cli.skip_restore {
        eprintln!("[skip] restore");
    } else {
        crate::tasks::restore::run(&config, &toolchain)?;
    }

    let published = if cli.skip_build {
        eprintln!("[skip] publish");
        false
    } else {
        crate::tasks::publish::run(&config, &toolchain)?;
        true
    };

    if cli.skip_package {
        eprintln!("[skip] package");
    } else {
        crate::tasks::package::run(&config, published)?;
    }

    Ok(())
}
