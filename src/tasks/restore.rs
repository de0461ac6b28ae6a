use crate::config::BuildConfig;
use crate::error::{BuildError, Phase};
use crate::toolchain::Toolchain;

/// Resolve dependencies for the whole source tree.
pub fn run(config: &BuildConfig, toolchain: &Toolchain) -> Result<(), BuildError> {
    eprintln!("[step] restore: {}", config.restore_dir.display());

    let status = toolchain.restore_command(&config.restore_dir).status()?;
    if !status.success() {
        return Err(BuildError::PhaseFailed {
            phase: Phase::Restore,
            status,
        });
    }

    eprintln!("[ok] restore");
    Ok(())
}
