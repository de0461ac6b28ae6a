use std::fs;
use std::path::Path;

use crate::config::BuildConfig;
use crate::error::{BuildError, Phase};
use crate::toolchain::Toolchain;

/// Publish the entry project into the publish output directory.
///
/// Any previous output is removed first so stale files never survive
/// into a new build.
pub fn run(config: &BuildConfig, toolchain: &Toolchain) -> Result<(), BuildError> {
    if clean_output_dir(&config.publish_dir)? {
        eprintln!(
            "[info] removed previous output: {}",
            config.publish_dir.display()
        );
    }

    eprintln!(
        "[step] publish: {} -> {}",
        config.project_dir.display(),
        config.publish_dir.display()
    );

    let status = toolchain
        .publish_command(&config.publish_dir, &config.project_dir)
        .status()?;
    if !status.success() {
        return Err(BuildError::PhaseFailed {
            phase: Phase::Publish,
            status,
        });
    }

    eprintln!("[ok] publish");
    Ok(())
}

/// Removes `dir` recursively if it exists. Returns whether anything
/// was deleted; an absent directory is not an error.
pub fn clean_output_dir(dir: &Path) -> Result<bool, BuildError> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
        return Ok(true);
    }
    Ok(false)
}
